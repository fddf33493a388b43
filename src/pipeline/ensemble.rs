use ndarray::{Array, ArrayView, Axis, Dimension};
use num_traits::AsPrimitive;

use crate::error::ScoreError;
use crate::model::statistic::EnsembleStatistic;

pub const MIN_ENSEMBLE_INPUTS: usize = 2;
pub const MAX_ENSEMBLE_INPUTS: usize = 4;

/// Stacks `scores` along a new trailing axis and reduces it with `statistic`.
///
/// Inputs must number 2 to 4 and share one shape. The result has that shape
/// and is always `f64`, whatever the input element type.
pub fn compute_ensemble<A, D>(
    scores: &[ArrayView<'_, A, D>],
    statistic: EnsembleStatistic,
) -> Result<Array<f64, D>, ScoreError>
where
    A: AsPrimitive<f64>,
    D: Dimension,
{
    let k = scores.len();
    if !(MIN_ENSEMBLE_INPUTS..=MAX_ENSEMBLE_INPUTS).contains(&k) {
        return Err(ScoreError::Arity { got: k });
    }
    let shape = scores[0].shape();
    for other in &scores[1..] {
        if other.shape() != shape {
            return Err(ScoreError::shape_mismatch(shape, other.shape()));
        }
    }

    let converted = scores
        .iter()
        .map(|a| a.mapv(|v| AsPrimitive::<f64>::as_(v)))
        .collect::<Vec<Array<f64, D>>>();
    let views = converted.iter().map(|a| a.view()).collect::<Vec<_>>();

    let trailing = Axis(scores[0].ndim());
    let stacked = ndarray::stack(trailing, &views)
        .map_err(|_| ScoreError::shape_mismatch(shape, views[0].shape()))?;

    let mut lane_buf = Vec::with_capacity(k);
    let reduced = stacked.map_axis(trailing, |lane| {
        lane_buf.clear();
        lane_buf.extend(lane.iter().copied());
        statistic.reduce(&mut lane_buf)
    });

    tracing::debug!(
        n_inputs = k,
        statistic = statistic.as_str(),
        n_elements = reduced.len(),
        "combined score arrays"
    );

    let found = reduced.shape().to_vec();
    reduced
        .into_dimensionality::<D>()
        .map_err(|_| ScoreError::shape_mismatch(shape, &found))
}

/// Like [`compute_ensemble`], resolving the statistic by name first.
pub fn compute_ensemble_named<A, D>(
    scores: &[ArrayView<'_, A, D>],
    statistic: &str,
) -> Result<Array<f64, D>, ScoreError>
where
    A: AsPrimitive<f64>,
    D: Dimension,
{
    let statistic = statistic.parse::<EnsembleStatistic>()?;
    compute_ensemble(scores, statistic)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/ensemble.rs"]
mod tests;
