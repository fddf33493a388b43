use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    #[error("score array is empty")]
    EmptyScores,
    #[error("quantile specification is empty")]
    EmptyQuantiles,
    #[error("quantile level {value} at index {index} is outside [0, 1]")]
    QuantileOutOfRange { index: usize, value: f64 },
    #[error("quantile levels must be strictly increasing (index {index}: {prev} >= {next})")]
    QuantilesNotIncreasing { index: usize, prev: f64, next: f64 },
    #[error("invalid quantile grid: {0}")]
    InvalidGrid(String),
    #[error("score at flat index {index} is not finite")]
    NonFiniteScore { index: usize },
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },
    #[error("ensemble requires between 2 and 4 score arrays, got {got}")]
    Arity { got: usize },
    #[error("unknown ensemble statistic `{0}` (use mean|median|min|max)")]
    UnknownStatistic(String),
}

impl ScoreError {
    pub(crate) fn shape_mismatch(expected: &[usize], found: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            found: found.to_vec(),
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error while {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl InputError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Input(#[from] InputError),
}
