use clap::{CommandFactory, Parser};
use lanebench::config::{CliConfig, Config};
use lanebench::core::constants::output_formats;
use lanebench::pipeline;
use lanebench::reporting::logging;
use lanebench::ui::output;
use lanebench::ui::print_completions;
use lanebench::ui::{Cli, Commands, ProgressReporter, RunOutcome, cli_to_config};

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_lanebench_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            output::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        _ => None,
    }
}

/// Main pipeline logic extracted from main() for testing
pub fn run_lanebench_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    // Setup logging and output settings
    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);
    logging::log_config_info(&config);

    if output_settings.should_show_config_info() {
        output::display_config_info(&config);
    }

    let mut progress = output_settings
        .show_progress
        .then(|| ProgressReporter::new(true));

    let outcome = run_command(cli.command_or_default(), &config, progress.as_mut())
        .inspect_err(|e| logging::log_error("Run failed", Some(e)))?;

    output::display_outcome(&outcome, &output_settings.output_format)?;
    Ok(0)
}

fn run_command(
    command: Commands,
    config: &Config,
    progress: Option<&mut ProgressReporter>,
) -> lanebench::Result<RunOutcome> {
    match command {
        Commands::Process => pipeline::run_process(config, progress),
        Commands::Report => pipeline::run_report(config),
        Commands::Charts => pipeline::run_charts(config, progress.as_deref()),
        Commands::All => pipeline::run_all(config, progress),
        Commands::CompletionGenerate { .. } => {
            unreachable!("completions are handled before the pipeline runs")
        }
    }
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
    pub show_progress: bool,
}

impl OutputSettings {
    pub fn should_show_config_info(&self) -> bool {
        self.verbose && !self.quiet && self.output_format == output_formats::TEXT
    }
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    let quiet = cli_config.quiet;
    let verbose = config.verbose.unwrap_or(false);
    let output_format = config
        .output_format
        .as_deref()
        .unwrap_or(output_formats::DEFAULT)
        .to_string();
    let show_progress = !quiet && !cli_config.no_progress;

    OutputSettings {
        quiet,
        verbose,
        output_format,
        show_progress,
    }
}
