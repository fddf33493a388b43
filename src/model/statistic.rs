use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EnsembleStatistic {
    #[default]
    Mean,
    Median,
    Min,
    Max,
}

impl EnsembleStatistic {
    pub fn as_str(self) -> &'static str {
        match self {
            EnsembleStatistic::Mean => "mean",
            EnsembleStatistic::Median => "median",
            EnsembleStatistic::Min => "min",
            EnsembleStatistic::Max => "max",
        }
    }

    /// Reduces one position's values. `values` may be reordered.
    pub fn reduce(self, values: &mut [f64]) -> f64 {
        match self {
            EnsembleStatistic::Mean => {
                let n = values.len() as f64;
                let sum = values.iter().sum::<f64>();
                if sum.is_finite() {
                    sum / n
                } else {
                    // Finite inputs near f64::MAX overflow the plain sum.
                    values.iter().map(|v| v / n).sum()
                }
            }
            EnsembleStatistic::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            EnsembleStatistic::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            EnsembleStatistic::Median => {
                values.sort_by(|a, b| a.total_cmp(b));
                let mid = values.len() / 2;
                if values.len() % 2 == 1 {
                    values[mid]
                } else {
                    values[mid - 1].midpoint(values[mid])
                }
            }
        }
    }
}

impl FromStr for EnsembleStatistic {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(EnsembleStatistic::Mean),
            "median" => Ok(EnsembleStatistic::Median),
            "min" => Ok(EnsembleStatistic::Min),
            "max" => Ok(EnsembleStatistic::Max),
            other => Err(ScoreError::UnknownStatistic(other.to_string())),
        }
    }
}

impl fmt::Display for EnsembleStatistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/statistic.rs"]
mod tests;
