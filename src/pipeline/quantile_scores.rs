use ndarray::{Array, ArrayBase, ArrayView, ArrayViewMut, Data, DataMut, Dimension, Zip};
use num_traits::AsPrimitive;

use crate::error::ScoreError;
use crate::model::overflow::OverflowPolicy;
use crate::model::quantiles::QuantileSpec;
use crate::pipeline::thresholds::{sorted_finite, thresholds_from_sorted};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScorerConfig {
    pub quantiles: QuantileSpec,
    pub overflow: OverflowPolicy,
}

impl ScorerConfig {
    pub fn with_quantiles(quantiles: QuantileSpec) -> Self {
        Self {
            quantiles,
            overflow: OverflowPolicy::default(),
        }
    }

    pub fn overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuantileScoreOutcome {
    pub thresholds: Vec<f64>,
    pub n_scored: usize,
    /// Elements above the last threshold.
    pub n_overflow: usize,
}

pub fn get_quantile_scores<A, S, D>(
    scores: &ArrayBase<S, D>,
    config: &ScorerConfig,
) -> Result<Array<f64, D>, ScoreError>
where
    A: AsPrimitive<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    get_quantile_scores_with_outcome(scores, config).map(|(out, _)| out)
}

pub fn get_quantile_scores_with_outcome<A, S, D>(
    scores: &ArrayBase<S, D>,
    config: &ScorerConfig,
) -> Result<(Array<f64, D>, QuantileScoreOutcome), ScoreError>
where
    A: AsPrimitive<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    let mut out = Array::<f64, D>::zeros(scores.raw_dim());
    let outcome = assign_levels(out.view_mut(), scores.view(), config)?;
    Ok((out, outcome))
}

/// Writes quantile levels into `out`, which must have the same shape as `scores`.
///
/// Every element of `out` is overwritten, including overflow elements under
/// [`OverflowPolicy::ZeroDefault`], so the buffer's prior contents never leak.
pub fn get_quantile_scores_into<'o, A, S, So, D>(
    out: &'o mut ArrayBase<So, D>,
    scores: &ArrayBase<S, D>,
    config: &ScorerConfig,
) -> Result<&'o mut ArrayBase<So, D>, ScoreError>
where
    A: AsPrimitive<f64>,
    S: Data<Elem = A>,
    So: DataMut<Elem = f64>,
    D: Dimension,
{
    if out.shape() != scores.shape() {
        return Err(ScoreError::shape_mismatch(scores.shape(), out.shape()));
    }
    assign_levels(out.view_mut(), scores.view(), config)?;
    Ok(out)
}

pub fn get_quantile_scores_slice(
    scores: &[f64],
    config: &ScorerConfig,
) -> Result<Vec<f64>, ScoreError> {
    let view = ArrayView::from(scores);
    Ok(get_quantile_scores(&view, config)?.to_vec())
}

fn assign_levels<A, D>(
    out: ArrayViewMut<'_, f64, D>,
    scores: ArrayView<'_, A, D>,
    config: &ScorerConfig,
) -> Result<QuantileScoreOutcome, ScoreError>
where
    A: AsPrimitive<f64>,
    D: Dimension,
{
    let sorted = sorted_finite(scores.iter().map(|&v| v.as_()))?;
    let thresholds = thresholds_from_sorted(&sorted, &config.quantiles);
    let levels = config.quantiles.levels();
    let fallback = match config.overflow {
        OverflowPolicy::ZeroDefault => 0.0,
        OverflowPolicy::TopLevel => config.quantiles.last(),
    };

    let mut n_overflow = 0usize;
    Zip::from(out).and(&scores).for_each(|o, &s| {
        match level_index(&thresholds, s.as_()) {
            Some(i) => *o = levels[i],
            None => {
                n_overflow += 1;
                *o = fallback;
            }
        }
    });

    tracing::debug!(
        n_scored = sorted.len(),
        n_levels = levels.len(),
        n_overflow,
        "assigned quantile levels"
    );
    if n_overflow > 0 && config.overflow == OverflowPolicy::ZeroDefault {
        tracing::warn!(
            n_overflow,
            "scores above the highest threshold were assigned 0.0"
        );
    }

    Ok(QuantileScoreOutcome {
        thresholds,
        n_scored: sorted.len(),
        n_overflow,
    })
}

/// Index `i` with `T[i-1] < x <= T[i]` (or `x <= T[0]` for `i == 0`).
///
/// Thresholds are non-decreasing, so at most one bracket matches and the
/// first `T[i] >= x` is that bracket. `None` when `x` exceeds every threshold.
fn level_index(thresholds: &[f64], x: f64) -> Option<usize> {
    let i = thresholds.partition_point(|&t| t < x);
    (i < thresholds.len()).then_some(i)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/quantile_scores.rs"]
mod tests;
