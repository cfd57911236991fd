//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{chart_formats, files, numeric, output_formats, thresholds};
use crate::core::error::{LaneBenchError, Result};
use crate::reporting::{ChartFormat, SuggestionThresholds};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `<configuration>_test*.log` files
    pub log_dir: Option<String>,

    /// Directory the summary, report and charts are written to (defaults to log_dir)
    pub output_dir: Option<String>,

    /// Hough share (%) above which an algorithm change is suggested
    pub hough_threshold: Option<f64>,

    /// Edge detection share (%) above which SIMD optimization is suggested
    pub edge_threshold: Option<f64>,

    /// Drawing share (%) above which fewer draw calls are suggested
    pub plot_threshold: Option<f64>,

    /// Modules at or below this mean time (ms) are left out of pie charts
    pub pie_min_module_ms: Option<f64>,

    /// Chart image format (png, svg)
    pub chart_format: Option<String>,

    /// Font file for chart text (default: searched in the system font directories)
    pub chart_font: Option<String>,

    /// Console output format (text, json)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: Some(files::DEFAULT_LOG_DIR.to_string()),
            output_dir: None, // Same as log_dir
            hough_threshold: Some(thresholds::HOUGH_PERCENT),
            edge_threshold: Some(thresholds::EDGE_PERCENT),
            plot_threshold: Some(thresholds::PLOT_PERCENT),
            pie_min_module_ms: Some(thresholds::PIE_MIN_MODULE_MS),
            chart_format: Some(chart_formats::DEFAULT.to_string()),
            chart_font: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LaneBenchError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            LaneBenchError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Validate the loaded configuration
        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .lanebench.toml in current directory
        if let Ok(config) = Self::load_from_file(files::CONFIG_FILE) {
            return config;
        }

        // Check for .lanebench.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}{}", "../".repeat(i), files::CONFIG_FILE);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Directories
        if let Some(ref log_dir) = cli_config.log_dir {
            self.log_dir = Some(log_dir.clone());
        }
        if let Some(ref output_dir) = cli_config.output_dir {
            self.output_dir = Some(output_dir.clone());
        }

        // Analysis
        if let Some(threshold) = cli_config.hough_threshold {
            self.hough_threshold = Some(threshold);
        }
        if let Some(threshold) = cli_config.edge_threshold {
            self.edge_threshold = Some(threshold);
        }
        if let Some(threshold) = cli_config.plot_threshold {
            self.plot_threshold = Some(threshold);
        }
        if let Some(min_ms) = cli_config.pie_min_module_ms {
            self.pie_min_module_ms = Some(min_ms);
        }

        // Charts
        if let Some(ref chart_format) = cli_config.chart_format {
            self.chart_format = Some(chart_format.clone());
        }
        if let Some(ref chart_font) = cli_config.chart_font {
            self.chart_font = Some(chart_font.clone());
        }

        // Output & format
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
    }

    /// Directory holding the benchmark logs
    pub fn log_dir_path(&self) -> PathBuf {
        PathBuf::from(self.log_dir.as_deref().unwrap_or(files::DEFAULT_LOG_DIR))
    }

    /// Directory artifacts are written to
    pub fn output_dir_path(&self) -> PathBuf {
        self.output_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.log_dir_path())
    }

    pub fn summary_csv_path(&self) -> PathBuf {
        self.output_dir_path().join(files::SUMMARY_CSV)
    }

    pub fn suggestion_thresholds(&self) -> SuggestionThresholds {
        SuggestionThresholds {
            hough_percent: self.hough_threshold.unwrap_or(thresholds::HOUGH_PERCENT),
            edge_percent: self.edge_threshold.unwrap_or(thresholds::EDGE_PERCENT),
            plot_percent: self.plot_threshold.unwrap_or(thresholds::PLOT_PERCENT),
        }
    }

    pub fn pie_min_module_ms(&self) -> f64 {
        self.pie_min_module_ms
            .unwrap_or(thresholds::PIE_MIN_MODULE_MS)
    }

    pub fn chart_format(&self) -> ChartFormat {
        self.chart_format
            .as_deref()
            .and_then(ChartFormat::from_name)
            .unwrap_or_default()
    }

    pub fn chart_font_path(&self) -> Option<PathBuf> {
        self.chart_font.as_deref().map(PathBuf::from)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate paths
        for (name, dir) in [
            ("log_dir", &self.log_dir),
            ("output_dir", &self.output_dir),
            ("chart_font", &self.chart_font),
        ] {
            if let Some(dir) = dir
                && dir.trim().is_empty()
            {
                return Err(LaneBenchError::Config(format!(
                    "{name} cannot be empty. Expected a path."
                )));
            }
        }

        // Validate suggestion thresholds
        for (name, threshold) in [
            ("hough_threshold", self.hough_threshold),
            ("edge_threshold", self.edge_threshold),
            ("plot_threshold", self.plot_threshold),
        ] {
            if let Some(threshold) = threshold
                && !(numeric::MIN_PERCENTAGE..=numeric::MAX_PERCENTAGE).contains(&threshold)
            {
                return Err(LaneBenchError::Config(format!(
                    "{name} {threshold}% is invalid. Expected a value between 0-100."
                )));
            }
        }

        // Validate pie chart minimum
        if let Some(min_ms) = self.pie_min_module_ms
            && (!min_ms.is_finite() || min_ms < 0.0)
        {
            return Err(LaneBenchError::Config(format!(
                "pie_min_module_ms {min_ms} is invalid. Expected a non-negative number of milliseconds."
            )));
        }

        // Validate chart format
        if let Some(ref format) = self.chart_format
            && ChartFormat::from_name(format).is_none()
        {
            return Err(LaneBenchError::Config(format!(
                "Invalid chart format '{format}'. Expected one of: {}.",
                chart_formats::ALL.join(", ")
            )));
        }

        // Validate output format
        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(LaneBenchError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Directories
    pub log_dir: Option<String>,    // --log-dir
    pub output_dir: Option<String>, // --output-dir

    // Analysis
    pub hough_threshold: Option<f64>,   // --hough-threshold
    pub edge_threshold: Option<f64>,    // --edge-threshold
    pub plot_threshold: Option<f64>,    // --plot-threshold
    pub pie_min_module_ms: Option<f64>, // --pie-min-ms

    // Charts
    pub chart_format: Option<String>, // --chart-format
    pub chart_font: Option<String>,   // --chart-font

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format
    pub no_progress: bool,             // --no-progress

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
