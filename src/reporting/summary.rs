//! Summary table persisted as CSV
//!
//! One row per configuration with 21 fixed columns. Times are written with
//! three decimals, frames with none and percentages with two.

use csv::{ReaderBuilder, StringRecord, Writer};
use std::path::Path;

use crate::analysis::AggregateRow;
use crate::core::error::{LaneBenchError, Result};
use crate::core::types::{Configuration, Module, ModuleMap};

const CONFIG_COLUMN: &str = "配置";
const CPU_CORES_COLUMN: &str = "CPU核心数";
const NEON_COLUMN: &str = "NEON优化";
const TOTAL_TIME_COLUMN: &str = "整机执行时间(ms)";
const TOTAL_FRAMES_COLUMN: &str = "总帧数";

/// Number of columns in the summary table
pub const COLUMN_COUNT: usize = 5 + 2 * Module::ALL.len();

/// Column names in file order
pub fn header() -> Vec<&'static str> {
    let mut columns = vec![
        CONFIG_COLUMN,
        CPU_CORES_COLUMN,
        NEON_COLUMN,
        TOTAL_TIME_COLUMN,
        TOTAL_FRAMES_COLUMN,
    ];
    columns.extend(Module::ALL.iter().map(|m| m.time_column()));
    columns.extend(Module::ALL.iter().map(|m| m.percent_column()));
    columns
}

/// Format a row the way it is written to the table
pub fn to_record(row: &AggregateRow) -> Vec<String> {
    let mut fields = vec![
        row.configuration.to_string(),
        row.cpu_cores.to_string(),
        row.neon_enabled.to_string(),
        format!("{:.3}", row.total_time_ms),
        format!("{:.0}", row.total_frames),
    ];
    fields.extend(row.module_times.values().iter().map(|t| format!("{t:.3}")));
    fields.extend(row.percentages.values().iter().map(|p| format!("{p:.2}")));
    fields
}

/// Write the summary table, replacing any existing file
pub fn write_summary(path: &Path, rows: &[AggregateRow]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(header())?;
    for row in rows {
        writer.write_record(to_record(row))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a summary table written by [`write_summary`]
pub fn read_summary(path: &Path) -> Result<Vec<AggregateRow>> {
    if !path.exists() {
        return Err(LaneBenchError::FileNotFound(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let found: Vec<&str> = reader.headers()?.iter().collect();
    let expected = header();
    if found != expected {
        return Err(LaneBenchError::InvalidSummary(format!(
            "unexpected header in '{}': expected {} columns starting with '{}', found [{}]",
            path.display(),
            COLUMN_COUNT,
            CONFIG_COLUMN,
            found.join(",")
        )));
    }

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        rows.push(parse_record(&record?, line + 2)?);
    }
    Ok(rows)
}

fn parse_record(record: &StringRecord, line: usize) -> Result<AggregateRow> {
    let field = |index: usize| -> Result<&str> {
        record.get(index).ok_or_else(|| {
            LaneBenchError::InvalidSummary(format!("line {line}: missing column {index}"))
        })
    };

    let label = field(0)?;
    let configuration = Configuration::from_label(label).ok_or_else(|| {
        LaneBenchError::InvalidSummary(format!("line {line}: unknown configuration '{label}'"))
    })?;

    let cpu_cores = parse_value::<u32>(field(1)?, CPU_CORES_COLUMN, line)?;
    let neon_enabled = parse_value::<bool>(field(2)?, NEON_COLUMN, line)?;
    let total_time_ms = parse_value::<f64>(field(3)?, TOTAL_TIME_COLUMN, line)?;
    let total_frames = parse_value::<f64>(field(4)?, TOTAL_FRAMES_COLUMN, line)?;

    let mut module_times = ModuleMap::default();
    let mut percentages = ModuleMap::default();
    for (i, module) in Module::ALL.into_iter().enumerate() {
        module_times[module] = parse_value::<f64>(field(5 + i)?, module.time_column(), line)?;
        percentages[module] =
            parse_value::<f64>(field(5 + Module::ALL.len() + i)?, module.percent_column(), line)?;
    }

    Ok(AggregateRow {
        configuration: configuration.label,
        cpu_cores,
        neon_enabled,
        total_time_ms,
        total_frames,
        module_times,
        percentages,
    })
}

fn parse_value<T>(raw: &str, column: &str, line: usize) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| {
        LaneBenchError::InvalidSummary(format!("line {line}: column '{column}' value '{raw}': {e}"))
    })
}
