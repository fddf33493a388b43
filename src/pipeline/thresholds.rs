use crate::error::ScoreError;
use crate::model::quantiles::QuantileSpec;

/// Collects the values in iteration order and sorts them ascending.
pub fn sorted_finite<I>(values: I) -> Result<Vec<f64>, ScoreError>
where
    I: IntoIterator<Item = f64>,
{
    let mut sorted = Vec::new();
    for (index, v) in values.into_iter().enumerate() {
        if !v.is_finite() {
            return Err(ScoreError::NonFiniteScore { index });
        }
        sorted.push(v);
    }
    if sorted.is_empty() {
        return Err(ScoreError::EmptyScores);
    }
    sorted.sort_by(|a, b| a.total_cmp(b));
    Ok(sorted)
}

/// Linear interpolation between the order statistics bracketing `(L - 1) * q`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    if lo + 1 >= n {
        return sorted[n - 1];
    }
    let frac = h - lo as f64;
    if frac == 0.0 {
        return sorted[lo];
    }
    let (a, b) = (sorted[lo], sorted[lo + 1]);
    let span = b - a;
    if span.is_finite() {
        a + span * frac
    } else {
        a * (1.0 - frac) + b * frac
    }
}

pub fn thresholds_from_sorted(sorted: &[f64], spec: &QuantileSpec) -> Vec<f64> {
    spec.levels()
        .iter()
        .map(|&q| quantile_sorted(sorted, q))
        .collect()
}

pub fn compute_thresholds<I>(values: I, spec: &QuantileSpec) -> Result<Vec<f64>, ScoreError>
where
    I: IntoIterator<Item = f64>,
{
    let sorted = sorted_finite(values)?;
    Ok(thresholds_from_sorted(&sorted, spec))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/thresholds.rs"]
mod tests;
