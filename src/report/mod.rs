pub mod json;
pub mod text;

use ndarray::{ArrayBase, Data, Dimension};
use serde::Serialize;

use crate::pipeline::thresholds::quantile_sorted;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArraySummary {
    pub label: String,
    pub shape: Vec<usize>,
    pub n: usize,
    pub min: f64,
    pub median: f64,
    pub p90: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum RunDetails {
    Score {
        n_levels: usize,
        overflow_policy: String,
        n_overflow: usize,
        thresholds_min: f64,
        thresholds_max: f64,
    },
    Combine {
        statistic: String,
        n_inputs: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub tool: String,
    pub tool_version: String,
    pub details: RunDetails,
    pub inputs: Vec<ArraySummary>,
    pub output: ArraySummary,
}

impl RunSummary {
    pub fn new(details: RunDetails, inputs: Vec<ArraySummary>, output: ArraySummary) -> Self {
        Self {
            tool: "kira-scorefuse".to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            details,
            inputs,
            output,
        }
    }
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// Non-finite values are skipped; an array without finite values reports zeros.
pub fn summarize_array<S, D>(label: &str, array: &ArrayBase<S, D>) -> ArraySummary
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let mut sorted = array
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .collect::<Vec<_>>();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let (min, max) = match (sorted.first(), sorted.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => (0.0, 0.0),
    };
    ArraySummary {
        label: label.to_string(),
        shape: array.shape().to_vec(),
        n: array.len(),
        min,
        median: quantile_sorted(&sorted, 0.5),
        p90: quantile_sorted(&sorted, 0.9),
        max,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
