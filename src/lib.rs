//! lanebench turns lane-departure-warning benchmark logs into a per-configuration
//! summary table, an analysis report and comparison charts.

pub mod analysis;
pub mod config;
pub mod core;
pub mod discovery;
pub mod pipeline;
pub mod reporting;
pub mod ui;

// Re-export commonly used items
pub use analysis::{AggregateRow, ConfigurationGroup};
pub use config::{CliConfig, Config};
pub use crate::core::{Configuration, LaneBenchError, LogRecord, Module, ModuleMap, Result};
pub use discovery::{Extractor, MetricExtractor};
