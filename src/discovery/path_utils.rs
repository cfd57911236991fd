use regex::Regex;
use std::path::{Path, PathBuf};

use crate::core::constants::files;
use crate::core::error::{LaneBenchError, Result};
use crate::core::types::Configuration;

/// Pattern matching `<label>_test*.log` file names
fn log_name_pattern(configuration: &Configuration) -> Result<Regex> {
    let pattern = format!(
        "^{}{}.*\\.{}$",
        regex::escape(configuration.label),
        regex::escape(files::LOG_STEM_INFIX),
        files::LOG_EXTENSION
    );
    Ok(Regex::new(&pattern)?)
}

/// Find the log files recorded for `configuration` directly inside `log_dir`.
///
/// Subdirectories are not searched. Results are sorted so that files are
/// always processed in the same order.
pub fn discover_logs(log_dir: &Path, configuration: &Configuration) -> Result<Vec<PathBuf>> {
    if !log_dir.is_dir() {
        return Err(LaneBenchError::FileNotFound(format!(
            "'{}' is not a directory",
            log_dir.display()
        )));
    }

    let name_pattern = log_name_pattern(configuration)?;

    let mut builder = ignore::WalkBuilder::new(log_dir);
    builder
        .max_depth(Some(1))
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false);

    let mut result_paths = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let entry_path = entry.path();

        if !entry_path.is_file() {
            continue;
        }

        let matches = entry_path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name_pattern.is_match(name));
        if matches {
            result_paths.push(entry_path.to_path_buf());
        }
    }

    result_paths.sort();
    Ok(result_paths)
}

/// Resolve the directory artifacts are written to, creating it if needed
pub fn ensure_output_dir(output_dir: &Path) -> Result<PathBuf> {
    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir)?;
    } else if !output_dir.is_dir() {
        return Err(LaneBenchError::InvalidArgument(format!(
            "'{}' exists but is not a directory",
            output_dir.display()
        )));
    }
    Ok(output_dir.to_path_buf())
}
