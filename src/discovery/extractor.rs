use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::{LaneBenchError, Result};
use crate::core::types::{LogRecord, Module, ModuleMap};
use crate::reporting::logging;

use std::fs;
use std::path::Path;

const TOTAL_TIME_PATTERN: &str = r"整机执行时间:\s*([0-9.]+)\s*ms";
const TOTAL_FRAMES_PATTERN: &str = r"总处理帧数:\s*([0-9]+)";

static TOTAL_TIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(TOTAL_TIME_PATTERN).expect("Failed to compile total time pattern"));

static TOTAL_FRAMES_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(TOTAL_FRAMES_PATTERN).expect("Failed to compile total frames pattern")
});

// One "<name>: <value> ms" pattern per module, keyed by the module's log label
static MODULE_REGEXES: Lazy<ModuleMap<Regex>> = Lazy::new(|| {
    ModuleMap::from_fn(|module| {
        let pattern = format!(
            r"{}:\s*([0-9.]+)\s*ms",
            regex::escape(module.display_name())
        );
        Regex::new(&pattern).expect("Failed to compile module time pattern")
    })
});

pub trait MetricExtractor {
    /// Extract a record from raw log text.
    fn extract_text(&self, content: &str) -> Result<LogRecord>;

    /// Extract a record from a log file. Never fails: any read or parse
    /// error is logged and yields an all-null record.
    fn extract_file(&self, path: &Path) -> LogRecord;
}

#[derive(Default, Debug)]
pub struct Extractor {}

impl MetricExtractor for Extractor {
    fn extract_text(&self, content: &str) -> Result<LogRecord> {
        let total_time = Self::capture_f64(&TOTAL_TIME_REGEX, content, "整机执行时间")?;
        let total_frames = Self::capture_f64(&TOTAL_FRAMES_REGEX, content, "总处理帧数")?;

        let mut module_times = ModuleMap::default();
        for module in Module::ALL {
            let value = Self::capture_f64(&MODULE_REGEXES[module], content, module.display_name())?;
            module_times[module] = Some(value.unwrap_or(0.0));
        }

        Ok(LogRecord {
            total_time,
            total_frames,
            module_times,
        })
    }

    fn extract_file(&self, path: &Path) -> LogRecord {
        let result = fs::read_to_string(path)
            .map_err(LaneBenchError::from)
            .and_then(|content| self.extract_text(&content));

        match result {
            Ok(record) => record,
            Err(e) => {
                logging::log_error(
                    &format!("处理文件 {} 时出错", path.display()),
                    Some(&e),
                );
                LogRecord::empty()
            }
        }
    }
}

impl Extractor {
    /// First match of `regex` parsed as a float; `None` when the pattern is absent.
    fn capture_f64(regex: &Regex, content: &str, field: &str) -> Result<Option<f64>> {
        let Some(raw) = Self::first_capture(regex, content) else {
            return Ok(None);
        };

        raw.parse::<f64>().map(Some).map_err(|e| {
            LaneBenchError::InvalidArgument(format!("Could not parse {field} value '{raw}': {e}"))
        })
    }

    fn first_capture<'a>(regex: &Regex, content: &'a str) -> Option<&'a str> {
        regex
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
