//! Analysis output and reporting
//!
//! This module handles the CSV summary table, the text analysis report,
//! comparison charts with their font lookup, and structured logging.

pub mod charts;
pub mod fonts;
pub mod logging;
pub mod report;
pub mod summary;

// Re-export commonly used items
pub use charts::{ChartFormat, ChartRenderer};
pub use report::{SuggestionThresholds, generate_report};
pub use summary::{read_summary, write_summary};
