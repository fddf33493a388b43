//! Quantile normalization and ensemble fusion of anomaly-detector scores.
//!
//! Raw detector outputs live on incomparable scales. [`get_quantile_scores`]
//! relabels every element with the quantile level of its value in the array's
//! own empirical distribution, and [`compute_ensemble`] fuses 2 to 4 such
//! arrays of one shape with a mean, median, min or max.
//!
//! ```
//! use kira_scorefuse::{EnsembleStatistic, QuantileSpec, ScorerConfig};
//! use kira_scorefuse::{compute_ensemble, get_quantile_scores};
//! use ndarray::array;
//!
//! let config = ScorerConfig::with_quantiles(QuantileSpec::new(vec![0.0, 0.5, 1.0]).unwrap());
//! let q = get_quantile_scores(&array![0.1, 0.5, 0.9], &config).unwrap();
//! assert_eq!(q, array![0.0, 0.5, 1.0]);
//!
//! let a = array![[1, 2], [3, 4]];
//! let b = array![[5, 6], [7, 8]];
//! let fused = compute_ensemble(&[a.view(), b.view()], EnsembleStatistic::Mean).unwrap();
//! assert_eq!(fused, array![[3.0, 4.0], [5.0, 6.0]]);
//! ```

pub mod error;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod tracing;

pub use error::{InputError, RunError, ScoreError};
pub use model::overflow::OverflowPolicy;
pub use model::quantiles::QuantileSpec;
pub use model::statistic::EnsembleStatistic;
pub use pipeline::ensemble::{compute_ensemble, compute_ensemble_named};
pub use pipeline::quantile_scores::{
    QuantileScoreOutcome, ScorerConfig, get_quantile_scores, get_quantile_scores_into,
    get_quantile_scores_slice, get_quantile_scores_with_outcome,
};
pub use pipeline::thresholds::compute_thresholds;
