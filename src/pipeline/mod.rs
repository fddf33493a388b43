pub mod ensemble;
pub mod quantile_scores;
pub mod thresholds;
