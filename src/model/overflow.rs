use serde::{Deserialize, Serialize};

/// What the scorer writes for a value above the highest threshold.
///
/// This happens when the last quantile level is below `1.0`, or when rounding
/// in the interpolation places the maximum a hair above its own threshold.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Leave the element at `0.0`, matching historical detector pipelines.
    #[default]
    #[value(name = "zero")]
    #[serde(rename = "zero")]
    ZeroDefault,
    /// Assign the last quantile level.
    #[value(name = "top")]
    #[serde(rename = "top")]
    TopLevel,
}

impl OverflowPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            OverflowPolicy::ZeroDefault => "zero",
            OverflowPolicy::TopLevel => "top",
        }
    }
}
