//! Stats module - Session aggregation into labeled series

mod aggregator;

pub use aggregator::{Metric, Period, StatsAggregator, ALL_METRICS};
