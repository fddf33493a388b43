use crate::error::ScoreError;

/// Strictly increasing quantile levels in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileSpec {
    levels: Vec<f64>,
}

impl QuantileSpec {
    pub const PERCENTILE_STEPS: usize = 100;

    pub fn new(levels: Vec<f64>) -> Result<Self, ScoreError> {
        if levels.is_empty() {
            return Err(ScoreError::EmptyQuantiles);
        }
        for (index, &value) in levels.iter().enumerate() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ScoreError::QuantileOutOfRange { index, value });
            }
        }
        for (index, pair) in levels.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(ScoreError::QuantilesNotIncreasing {
                    index: index + 1,
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(Self { levels })
    }

    /// `0.00, 0.01, ..., 1.00`.
    pub fn percentiles() -> Self {
        Self::grid(Self::PERCENTILE_STEPS)
    }

    pub fn evenly_spaced(n_levels: usize) -> Result<Self, ScoreError> {
        if n_levels < 2 {
            return Err(ScoreError::InvalidGrid(format!(
                "need at least 2 levels, got {n_levels}"
            )));
        }
        Ok(Self::grid(n_levels - 1))
    }

    // Levels are i / steps rather than an accumulated step to keep 0.07 == 7 / 100.
    fn grid(steps: usize) -> Self {
        let levels = (0..=steps).map(|i| i as f64 / steps as f64).collect();
        Self { levels }
    }

    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn last(&self) -> f64 {
        self.levels[self.levels.len() - 1]
    }

    pub fn contains(&self, value: f64) -> bool {
        self.levels.iter().any(|&l| l == value)
    }
}

impl Default for QuantileSpec {
    fn default() -> Self {
        Self::percentiles()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/quantiles.rs"]
mod tests;
