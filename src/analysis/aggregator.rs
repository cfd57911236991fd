use serde::Serialize;
use std::path::Path;

use crate::core::constants::numeric;
use crate::core::error::Result;
use crate::core::types::{Configuration, LogRecord, Module, ModuleMap};
use crate::discovery::{MetricExtractor, discover_logs};
use crate::reporting::logging;
use crate::ui::ProgressReporter;

/// A log file whose record was kept, as echoed to the console
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedLog {
    pub file: String,
    pub total_time_ms: f64,
    pub total_frames: Option<f64>,
}

/// What was found and kept for one configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogScan {
    pub configuration: &'static str,
    pub files_found: usize,
    pub accepted: Vec<AcceptedLog>,
}

/// Records extracted for one configuration
#[derive(Debug, Clone)]
pub struct ConfigurationGroup {
    pub configuration: Configuration,
    pub files_found: usize,
    records: Vec<LogRecord>,
    accepted: Vec<AcceptedLog>,
}

impl ConfigurationGroup {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            files_found: 0,
            records: Vec::new(),
            accepted: Vec::new(),
        }
    }

    /// Like [`push`](Self::push), remembering which file the record came from
    pub fn push_file(&mut self, path: &Path, record: LogRecord) -> bool {
        let total_time_ms = record.total_time.unwrap_or_default();
        let total_frames = record.total_frames;
        if !self.push(record) {
            return false;
        }

        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.accepted.push(AcceptedLog {
            file,
            total_time_ms,
            total_frames,
        });
        true
    }

    pub fn scan(&self) -> LogScan {
        LogScan {
            configuration: self.configuration.label,
            files_found: self.files_found,
            accepted: self.accepted.clone(),
        }
    }

    /// Add a record to the group. Records without a total time are rejected
    /// and `false` is returned.
    pub fn push(&mut self, record: LogRecord) -> bool {
        if !record.is_complete() {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Average the group into a summary row; `None` for an empty group.
    pub fn aggregate(&self) -> Option<AggregateRow> {
        if self.records.is_empty() {
            return None;
        }

        let total_time_ms = mean(self.records.iter().map(|r| r.total_time));
        let total_frames = mean(self.records.iter().map(|r| r.total_frames));
        let module_times = ModuleMap::from_fn(|module| {
            mean(self.records.iter().map(|r| r.module_times[module]))
        });

        Some(AggregateRow::new(
            self.configuration,
            total_time_ms,
            total_frames,
            module_times,
        ))
    }
}

/// Mean of the present values; 0.0 when none are present
fn mean(values: impl Iterator<Item = Option<f64>>) -> f64 {
    let (sum, count) = values
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Share of the module total held by each module, in percent.
///
/// All zero when the module total does not exceed the epsilon guard.
pub fn module_percentages(module_times: &ModuleMap<f64>) -> ModuleMap<f64> {
    let module_total = module_times.total();
    if module_total > numeric::MODULE_TOTAL_EPSILON {
        module_times.map(|_, time| time / module_total * numeric::MAX_PERCENTAGE)
    } else {
        ModuleMap::default()
    }
}

/// Module with the largest mean time. Ties go to the earliest module in
/// [`Module::BOTTLENECK_ORDER`].
pub fn find_bottleneck(module_times: &ModuleMap<f64>) -> (Module, f64) {
    let first = Module::BOTTLENECK_ORDER[0];
    Module::BOTTLENECK_ORDER[1..].iter().fold(
        (first, module_times[first]),
        |(best, best_time), &module| {
            let time = module_times[module];
            if time > best_time {
                (module, time)
            } else {
                (best, best_time)
            }
        },
    )
}

/// Averaged metrics for one configuration, as persisted in the summary table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub configuration: &'static str,
    pub cpu_cores: u32,
    pub neon_enabled: bool,
    pub total_time_ms: f64,
    pub total_frames: f64,
    pub module_times: ModuleMap<f64>,
    pub percentages: ModuleMap<f64>,
}

impl AggregateRow {
    /// Build a row from averaged values, deriving the percentages
    pub fn new(
        configuration: Configuration,
        total_time_ms: f64,
        total_frames: f64,
        module_times: ModuleMap<f64>,
    ) -> Self {
        let percentages = module_percentages(&module_times);
        Self {
            configuration: configuration.label,
            cpu_cores: configuration.cpu_cores,
            neon_enabled: configuration.neon_enabled,
            total_time_ms,
            total_frames,
            module_times,
            percentages,
        }
    }

    pub fn module_total(&self) -> f64 {
        self.module_times.total()
    }

    /// Theoretical frame rate implied by the mean total time
    pub fn fps(&self) -> f64 {
        if self.total_time_ms > 0.0 {
            numeric::MS_PER_SECOND / self.total_time_ms
        } else {
            0.0
        }
    }

    pub fn bottleneck(&self) -> (Module, f64) {
        find_bottleneck(&self.module_times)
    }
}

/// Discover, extract and group the logs of every configuration.
///
/// Files are processed one at a time in sorted order. A file that fails to
/// parse only drops its own record.
pub fn collect_groups<E: MetricExtractor>(
    log_dir: &Path,
    extractor: &E,
    mut progress: Option<&mut ProgressReporter>,
) -> Result<Vec<ConfigurationGroup>> {
    let mut groups = Vec::with_capacity(Configuration::ALL.len());

    for configuration in Configuration::ALL {
        let log_files = discover_logs(log_dir, &configuration)?;
        logging::log_configuration_files(&configuration, &log_files);

        if let Some(progress) = progress.as_deref_mut() {
            progress.start_configuration(configuration.label, log_files.len());
        }

        let mut group = ConfigurationGroup::new(configuration);
        group.files_found = log_files.len();
        for (i, log_file) in log_files.iter().enumerate() {
            let record = extractor.extract_file(log_file);
            let total_time = record.total_time;
            let total_frames = record.total_frames;

            if group.push_file(log_file, record) {
                logging::log_record_accepted(log_file, total_time, total_frames);
            } else {
                logging::log_record_rejected(log_file);
            }

            if let Some(progress) = progress.as_deref() {
                progress.update_configuration(i + 1);
            }
        }

        if let Some(progress) = progress.as_deref() {
            progress.finish_configuration();
        }

        groups.push(group);
    }

    Ok(groups)
}

/// Summary rows for every non-empty group, in configuration order
pub fn aggregate_groups(groups: &[ConfigurationGroup]) -> Vec<AggregateRow> {
    groups
        .iter()
        .filter_map(|group| {
            let row = group.aggregate();
            if row.is_none() {
                logging::log_warning(&format!(
                    "配置 {} 没有可用的日志数据，跳过",
                    group.configuration
                ));
            }
            row
        })
        .collect()
}
