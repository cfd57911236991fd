//! Aggregation of extracted log records
//!
//! This module groups records by configuration, averages them and derives
//! module shares and bottlenecks.

pub mod aggregator;

// Re-export commonly used items
pub use aggregator::{
    AcceptedLog, AggregateRow, ConfigurationGroup, LogScan, aggregate_groups, collect_groups,
    find_bottleneck, module_percentages,
};
