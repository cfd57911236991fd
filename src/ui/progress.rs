use indicatif::{ProgressBar, ProgressStyle};

pub struct ProgressReporter {
    configuration_progress: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            configuration_progress: None,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn start_configuration(&mut self, label: &str, total_files: usize) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::new(total_files as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix} [{bar:40.cyan/blue}] {pos}/{len} logs")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_prefix(label.to_string());
        self.configuration_progress = Some(pb);
    }

    pub fn update_configuration(&self, current: usize) {
        if let Some(ref pb) = self.configuration_progress {
            pb.set_position(current as u64);
        }
    }

    pub fn finish_configuration(&self) {
        if let Some(ref pb) = self.configuration_progress {
            pb.finish_with_message("✓");
        }
    }

    /// Create a simple spinner for indeterminate progress
    pub fn create_spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.enabled {
            return None;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(120));
        Some(spinner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_reporter_creates_nothing() {
        let mut reporter = ProgressReporter::new(false);
        reporter.start_configuration("单核", 3);
        reporter.update_configuration(1);
        reporter.finish_configuration();

        assert!(!reporter.is_enabled());
        assert!(reporter.configuration_progress.is_none());
        assert!(reporter.create_spinner("Rendering charts").is_none());
    }

    #[test]
    fn test_enabled_reporter_tracks_position() {
        let mut reporter = ProgressReporter::new(true);
        reporter.start_configuration("多核+NEON", 2);
        reporter.update_configuration(2);

        let pb = reporter.configuration_progress.as_ref().unwrap();
        assert_eq!(pb.position(), 2);
        assert_eq!(pb.length(), Some(2));
        reporter.finish_configuration();
        assert!(pb.is_finished());
    }

    #[test]
    fn test_spinner_when_enabled() {
        let reporter = ProgressReporter::new(true);
        let spinner = reporter.create_spinner("Rendering charts");
        assert!(spinner.is_some());
        spinner.unwrap().finish_and_clear();
    }
}
