pub mod overflow;
pub mod quantiles;
pub mod statistic;
