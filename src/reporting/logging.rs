use crate::config::Config;
use crate::core::types::Configuration;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn // Skipped files and charts still surface
    };

    // A second initialization (e.g. in tests) keeps the first logger
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let thresholds = config.suggestion_thresholds();

    info!(
        "Directories: logs={}, output={}",
        config.log_dir_path().display(),
        config.output_dir_path().display()
    );
    info!(
        "Suggestion thresholds: hough>{}%, edge>{}%, plot>{}%",
        thresholds.hough_percent, thresholds.edge_percent, thresholds.plot_percent
    );
    info!("Pie chart minimum: {}ms", config.pie_min_module_ms());
    info!(
        "Charts: format={}, font={}",
        config.chart_format().extension(),
        config
            .chart_font_path()
            .map_or_else(|| "system".to_string(), |p| p.display().to_string())
    );
}

/// Log the log files found for one configuration
pub fn log_configuration_files<P: AsRef<Path>>(configuration: &Configuration, files: &[P]) {
    info!(
        "处理配置 {}: 找到 {} 个日志文件",
        configuration,
        files.len()
    );
    for (i, file) in files.iter().enumerate() {
        debug!("  {}. {}", i + 1, file.as_ref().display());
    }
}

/// Log a record that was kept for aggregation
pub fn log_record_accepted(path: &Path, total_time: Option<f64>, total_frames: Option<f64>) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let frames = total_frames.map_or_else(|| "None".to_string(), |f| f.to_string());

    info!(
        "  {name}: 整机时间={}ms, 帧数={frames}",
        total_time.unwrap_or_default()
    );
}

/// Log a record that was dropped because it lacks a total time
pub fn log_record_rejected(path: &Path) {
    warn!(
        "Skipping '{}': no total execution time found",
        path.display()
    );
}

/// Log the written analysis report
pub fn log_report_written(path: &Path, rows: usize) {
    info!(
        "✅ Analysis report written: {} ({rows} configuration(s))",
        path.display()
    );
}

/// Log a written chart
pub fn log_chart_written(path: &Path) {
    info!("Chart written: {}", path.display());
}

/// Log the font chart text is drawn with
pub fn log_chart_font(path: &Path) {
    info!("Chart font: {}", path.display());
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_logger_initialization_is_repeatable() {
        init_logger(true, false);
        init_logger(false, true);
        init_logger(false, false);
    }

    #[test]
    fn test_log_config_info_defaults_and_overrides() {
        log_config_info(&Config::default());

        let config = Config {
            log_dir: Some("logs".to_string()),
            output_dir: Some("out".to_string()),
            hough_threshold: Some(10.0),
            ..Default::default()
        };
        log_config_info(&config);
    }

    #[test]
    fn test_log_configuration_files() {
        let empty: Vec<PathBuf> = vec![];
        log_configuration_files(&Configuration::SINGLE_CORE, &empty);
        log_configuration_files(
            &Configuration::MULTI_CORE_NEON,
            &[PathBuf::from("多核+NEON_test1.log")],
        );
    }

    #[test]
    fn test_log_record_outcomes() {
        log_record_accepted(Path::new("单核_test1.log"), Some(100.0), Some(20.0));
        log_record_accepted(Path::new("单核_test2.log"), Some(100.0), None);
        log_record_rejected(Path::new("单核_test3.log"));
    }

    #[test]
    fn test_log_error_with_and_without_source() {
        log_error("Simple error message", None);

        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        log_error("Failed to read file", Some(&io_error));
    }

    #[test]
    fn test_log_warning() {
        log_warning("");
        log_warning("Warning with 中文");
    }

    #[test]
    fn test_log_chart_paths() {
        log_chart_written(Path::new("out/performance_comparison.png"));
        log_chart_font(Path::new("/usr/share/fonts/DejaVuSans.ttf"));
    }
}
