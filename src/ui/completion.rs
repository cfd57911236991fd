//! Shell completion generation for lanebench

use clap::Command;
use clap_complete::{Generator, generate};

/// Generate shell completions for the given shell
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    generate(
        generator,
        app,
        app.get_name().to_string(),
        &mut std::io::stdout(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Cli;
    use clap::CommandFactory;

    #[test]
    fn test_completion_script_mentions_subcommands() {
        let mut app = Cli::command();
        let mut buffer = Vec::new();
        generate(clap_complete::Shell::Bash, &mut app, "lanebench", &mut buffer);

        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("lanebench"));
        assert!(script.contains("charts"));
        assert!(script.contains("--log-dir"));
    }
}
