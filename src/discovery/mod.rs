//! Log discovery and metric extraction
//!
//! This module handles finding benchmark logs for each configuration
//! and extracting timing metrics from their text.

pub mod extractor;
pub mod path_utils;

// Re-export commonly used items
pub use extractor::{Extractor, MetricExtractor};
pub use path_utils::{discover_logs, ensure_output_dir};
