// Command-line interface definitions and parsing for lanebench

use crate::config::CliConfig;
use crate::core::constants::{chart_formats, output_formats};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Directories
    /// Directory holding <configuration>_test*.log files (default: module_test_results)
    #[arg(short = 'd', long, value_name = "DIR", help_heading = "Directories")]
    pub log_dir: Option<String>,

    /// Directory for the summary, report and charts (default: the log directory)
    #[arg(short = 'o', long, value_name = "DIR", help_heading = "Directories")]
    pub output_dir: Option<String>,

    // Analysis
    /// Suggest a different line detector above this Hough share (default: 25)
    #[arg(long, value_name = "PCT", help_heading = "Analysis")]
    pub hough_threshold: Option<f64>,

    /// Suggest SIMD edge detection above this share (default: 20)
    #[arg(long, value_name = "PCT", help_heading = "Analysis")]
    pub edge_threshold: Option<f64>,

    /// Suggest fewer draw calls above this drawing share (default: 15)
    #[arg(long, value_name = "PCT", help_heading = "Analysis")]
    pub plot_threshold: Option<f64>,

    /// Leave modules at or below this mean time out of pie charts (default: 1.0)
    #[arg(long = "pie-min-ms", value_name = "MS", help_heading = "Analysis")]
    pub pie_min_ms: Option<f64>,

    // Charts
    /// Chart image format (default: png)
    #[arg(long, value_name = "FORMAT", value_parser = chart_formats::ALL, help_heading = "Charts")]
    pub chart_format: Option<String>,

    /// Font file for chart text (default: searched in the system font directories)
    #[arg(long, value_name = "FILE", help_heading = "Charts")]
    pub chart_font: Option<String>,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Console summary format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Disable progress bars
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Extract logs, write CSV summary and analysis report
    Process,
    /// Regenerate the analysis report from an existing CSV
    Report,
    /// Render comparison charts from an existing CSV
    Charts,
    /// Process logs and render charts (default when no command is given)
    All,
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    /// Command to run, `all` when none was given
    pub fn command_or_default(&self) -> Commands {
        self.command.unwrap_or(Commands::All)
    }
}

/// Convert the derive-based CLI into CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        log_dir: cli.log_dir.clone(),
        output_dir: cli.output_dir.clone(),
        hough_threshold: cli.hough_threshold,
        edge_threshold: cli.edge_threshold,
        plot_threshold: cli.plot_threshold,
        pie_min_module_ms: cli.pie_min_ms,
        chart_format: cli.chart_format.clone(),
        chart_font: cli.chart_font.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        no_progress: cli.no_progress,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
