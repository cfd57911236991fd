//! The end-to-end steps behind each subcommand
//!
//! Each step reads what the previous one wrote to the output directory, so
//! `report` and `charts` can be re-run on an existing summary table.

use crate::analysis::{AggregateRow, ConfigurationGroup, aggregate_groups, collect_groups};
use crate::config::Config;
use crate::core::constants::messages;
use crate::core::error::Result;
use crate::discovery::{Extractor, ensure_output_dir};
use crate::reporting::{ChartRenderer, generate_report, logging, read_summary, write_summary};
use crate::ui::{ProgressReporter, RunOutcome};

/// Extract every log, write the summary table and the analysis report
pub fn run_process(config: &Config, progress: Option<&mut ProgressReporter>) -> Result<RunOutcome> {
    let mut outcome = RunOutcome::new("process");

    let groups = collect_groups(&config.log_dir_path(), &Extractor::default(), progress)?;
    outcome.scans = groups.iter().map(ConfigurationGroup::scan).collect();
    outcome.rows = aggregate_groups(&groups);

    let output_dir = ensure_output_dir(&config.output_dir_path())?;
    let csv_path = config.summary_csv_path();
    write_summary(&csv_path, &outcome.rows)?;
    outcome.summary_csv = Some(csv_path);

    outcome.report = generate_report(&output_dir, &config.suggestion_thresholds())?;
    if outcome.report.is_none() {
        outcome.message = Some(messages::MISSING_SUMMARY.to_string());
    }
    Ok(outcome)
}

/// Regenerate the analysis report from an existing summary table
pub fn run_report(config: &Config) -> Result<RunOutcome> {
    let mut outcome = RunOutcome::new("report");
    outcome.report = generate_report(&config.output_dir_path(), &config.suggestion_thresholds())?;
    if outcome.report.is_none() {
        outcome.message = Some(messages::MISSING_SUMMARY.to_string());
    }
    Ok(outcome)
}

/// Render the comparison charts from an existing summary table
pub fn run_charts(config: &Config, progress: Option<&ProgressReporter>) -> Result<RunOutcome> {
    let mut outcome = RunOutcome::new("charts");
    outcome.rows = read_summary(&config.summary_csv_path())?;
    outcome.charts = render_charts(config, &outcome.rows, progress)?;
    Ok(outcome)
}

/// Process the logs, then chart whatever rows were produced
pub fn run_all(config: &Config, mut progress: Option<&mut ProgressReporter>) -> Result<RunOutcome> {
    let mut outcome = run_process(config, progress.as_deref_mut())?;
    outcome.command = "all";

    if outcome.rows.is_empty() {
        logging::log_warning("没有可用的配置数据，跳过图表生成");
        return Ok(outcome);
    }

    // Rows are re-read so the charts show exactly what the table holds
    let rows = read_summary(&config.summary_csv_path())?;
    outcome.charts = render_charts(config, &rows, progress.as_deref())?;
    Ok(outcome)
}

fn render_charts(
    config: &Config,
    rows: &[AggregateRow],
    progress: Option<&ProgressReporter>,
) -> Result<Vec<std::path::PathBuf>> {
    let output_dir = ensure_output_dir(&config.output_dir_path())?;
    let spinner = progress.and_then(|p| p.create_spinner("生成性能分析图表..."));

    let result = ChartRenderer::new(output_dir, config.pie_min_module_ms())
        .with_format(config.chart_format())
        .with_font(config.chart_font_path())
        .render_all(rows);

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{charts, files};
    use crate::core::error::LaneBenchError;
    use std::fs;
    use tempfile::TempDir;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    const MODULE_LINES: &str = "图像去噪: 10 ms\n边缘检测: 20 ms\n掩码处理: 5 ms\nHough变换: 40 ms\n\
                                线分离: 5 ms\n回归拟合: 5 ms\n转向预测: 5 ms\n结果绘制: 10 ms\n";

    fn write_log(dir: &TempDir, name: &str, total_ms: f64) -> TestResult {
        let content = format!("整机执行时间: {total_ms} ms\n总处理帧数: 100\n{MODULE_LINES}");
        fs::write(dir.path().join(name), content)?;
        Ok(())
    }

    fn config_for(log_dir: &TempDir, output_dir: Option<&TempDir>) -> Config {
        Config {
            log_dir: Some(log_dir.path().display().to_string()),
            output_dir: output_dir.map(|d| d.path().display().to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_run_process_writes_summary_and_report() -> TestResult {
        let logs = TempDir::new()?;
        write_log(&logs, "单核_test1.log", 1000.0)?;
        write_log(&logs, "单核_test2.log", 3000.0)?;

        let outcome = run_process(&config_for(&logs, None), None)?;

        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].total_time_ms, 2000.0);
        let csv = fs::read_to_string(logs.path().join(files::SUMMARY_CSV))?;
        assert!(csv.contains("单核,1,false,2000.000,100,"));
        assert_eq!(
            outcome.report,
            Some(logs.path().join(files::ANALYSIS_REPORT))
        );
        assert!(outcome.message.is_none());
        Ok(())
    }

    #[test]
    fn test_run_process_lists_scanned_files() -> TestResult {
        let logs = TempDir::new()?;
        write_log(&logs, "多核_test1.log", 800.0)?;
        fs::write(logs.path().join("多核_test2.log"), "总处理帧数: 100\n")?;

        let outcome = run_process(&config_for(&logs, None), None)?;

        assert_eq!(outcome.scans.len(), 4);
        let multi_core = outcome
            .scans
            .iter()
            .find(|scan| scan.configuration == "多核")
            .ok_or("no scan for 多核")?;
        assert_eq!(multi_core.files_found, 2);
        assert_eq!(multi_core.accepted.len(), 1);
        assert_eq!(multi_core.accepted[0].file, "多核_test1.log");
        assert!(outcome.scans.iter().filter(|s| s.configuration != "多核").all(|s| s.files_found == 0));
        Ok(())
    }

    #[test]
    fn test_run_process_missing_log_dir_fails() {
        let config = Config {
            log_dir: Some("/non/existent/lanebench/logs".to_string()),
            ..Default::default()
        };
        let result = run_process(&config, None);
        assert!(matches!(result, Err(LaneBenchError::FileNotFound(_))));
    }

    #[test]
    fn test_run_report_without_summary_is_ok() -> TestResult {
        let logs = TempDir::new()?;
        let outcome = run_report(&config_for(&logs, None))?;
        assert!(outcome.report.is_none());
        assert_eq!(outcome.message.as_deref(), Some(messages::MISSING_SUMMARY));
        Ok(())
    }

    #[test]
    fn test_run_charts_without_summary_fails() -> TestResult {
        let logs = TempDir::new()?;
        let result = run_charts(&config_for(&logs, None), None);
        assert!(matches!(result, Err(LaneBenchError::FileNotFound(_))));
        Ok(())
    }

    #[test]
    fn test_run_all_into_separate_output_dir() -> TestResult {
        let logs = TempDir::new()?;
        let out = TempDir::new()?;
        write_log(&logs, "单核_test1.log", 4000.0)?;
        write_log(&logs, "单核+NEON_test1.log", 3000.0)?;
        write_log(&logs, "多核_test1.log", 2000.0)?;
        write_log(&logs, "多核+NEON_test1.log", 1000.0)?;

        let outcome = run_all(&config_for(&logs, Some(&out)), None)?;

        assert_eq!(outcome.command, "all");
        assert_eq!(outcome.rows.len(), 4);
        assert_eq!(outcome.charts.len(), 4);
        for chart in [
            charts::PERFORMANCE_COMPARISON,
            charts::MODULE_BREAKDOWN,
            charts::OPTIMIZATION_IMPACT,
            charts::BOTTLENECK_ANALYSIS,
        ] {
            assert!(out.path().join(chart).exists(), "missing {chart}");
        }
        assert!(!logs.path().join(files::SUMMARY_CSV).exists());
        Ok(())
    }

    #[test]
    fn test_run_all_without_logs_skips_charts() -> TestResult {
        let logs = TempDir::new()?;
        let outcome = run_all(&config_for(&logs, None), None)?;

        assert!(outcome.rows.is_empty());
        assert!(outcome.charts.is_empty());
        assert!(logs.path().join(files::SUMMARY_CSV).exists());
        Ok(())
    }
}
