use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::analysis::AggregateRow;
use crate::core::constants::{files, messages, thresholds};
use crate::core::error::{LaneBenchError, Result};
use crate::core::types::Module;
use crate::reporting::{logging, summary};

/// Percentage shares above which the report suggests an optimization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionThresholds {
    pub hough_percent: f64,
    pub edge_percent: f64,
    pub plot_percent: f64,
}

impl Default for SuggestionThresholds {
    fn default() -> Self {
        Self {
            hough_percent: thresholds::HOUGH_PERCENT,
            edge_percent: thresholds::EDGE_PERCENT,
            plot_percent: thresholds::PLOT_PERCENT,
        }
    }
}

/// An optimization hint for a module that takes a large share of the time
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub module: Module,
    pub percent: f64,
}

impl Suggestion {
    pub fn message(&self) -> String {
        let percent = self.percent;
        match self.module {
            Module::Hough => format!(
                "Hough变换占用时间较多({percent:.1}%)，建议优化参数或使用更高效的直线检测算法"
            ),
            Module::EdgeDetection => {
                format!("边缘检测占用时间较多({percent:.1}%)，建议使用NEON指令集优化")
            }
            Module::Plot => {
                format!("绘制操作占用时间较多({percent:.1}%)，建议减少不必要的图形操作")
            }
            other => format!("{other}占用时间较多({percent:.1}%)"),
        }
    }
}

/// Suggestions for a row, in Hough, edge, plot order
pub fn generate_suggestions(
    row: &AggregateRow,
    thresholds: &SuggestionThresholds,
) -> Vec<Suggestion> {
    [
        (Module::Hough, thresholds.hough_percent),
        (Module::EdgeDetection, thresholds.edge_percent),
        (Module::Plot, thresholds.plot_percent),
    ]
    .into_iter()
    .filter(|(module, limit)| row.percentages[*module] > *limit)
    .map(|(module, _)| Suggestion {
        module,
        percent: row.percentages[module],
    })
    .collect()
}

/// Write the full analysis report to `out`
pub fn write_report<W: Write>(
    out: &mut W,
    rows: &[AggregateRow],
    thresholds: &SuggestionThresholds,
    generated_at: &str,
) -> io::Result<()> {
    let section_rule = "-".repeat(30);

    writeln!(out, "{}", messages::REPORT_TITLE)?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "生成时间: {generated_at}")?;
    writeln!(out)?;

    writeln!(out, "1. 整体性能对比")?;
    writeln!(out, "{section_rule}")?;
    for row in rows {
        writeln!(out, "配置: {}", row.configuration)?;
        writeln!(out, "  整机执行时间: {:.3} ms", row.total_time_ms)?;
        writeln!(out, "  处理帧数: {:.0}", row.total_frames)?;
        writeln!(out, "  理论帧率: {:.2} FPS", row.fps())?;
        writeln!(out)?;
    }

    writeln!(out, "2. 模块性能分析")?;
    writeln!(out, "{section_rule}")?;
    for row in rows {
        writeln!(out, "配置: {}", row.configuration)?;
        writeln!(out, "  模块执行时间占比:")?;
        for module in Module::ALL {
            writeln!(
                out,
                "    {}: {:.3} ms ({:.2}%)",
                module.display_name(),
                row.module_times[module],
                row.percentages[module]
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "3. 性能优化建议")?;
    writeln!(out, "{section_rule}")?;
    for row in rows {
        writeln!(out, "配置 {}:", row.configuration)?;
        for suggestion in generate_suggestions(row, thresholds) {
            writeln!(out, "  - {}", suggestion.message())?;
        }
        writeln!(out)?;
    }

    writeln!(out, "4. 瓶颈分析")?;
    writeln!(out, "{section_rule}")?;
    for row in rows {
        let (module, time) = row.bottleneck();
        writeln!(
            out,
            "配置 {}: 主要瓶颈 {} ({:.3} ms, 模块总时间 {:.3} ms)",
            row.configuration,
            module,
            time,
            row.module_total()
        )?;
    }

    Ok(())
}

/// Generate the analysis report from the summary table in `output_dir`.
///
/// Returns `Ok(None)` without writing anything when the summary table does
/// not exist yet. Telling the user is left to the caller.
pub fn generate_report(
    output_dir: &Path,
    thresholds: &SuggestionThresholds,
) -> Result<Option<PathBuf>> {
    let csv_path = output_dir.join(files::SUMMARY_CSV);
    if !csv_path.exists() {
        logging::log_warning(&format!(
            "Summary table not found: {}",
            csv_path.display()
        ));
        return Ok(None);
    }

    let rows = summary::read_summary(&csv_path)?;
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let report_path = output_dir.join(files::ANALYSIS_REPORT);
    let with_context = |e: io::Error| {
        LaneBenchError::Io(io::Error::new(
            e.kind(),
            format!("Could not write report '{}': {e}", report_path.display()),
        ))
    };
    let mut out = BufWriter::new(File::create(&report_path).map_err(with_context)?);
    write_report(&mut out, &rows, thresholds, &generated_at).map_err(with_context)?;
    out.flush().map_err(with_context)?;

    logging::log_report_written(&report_path, rows.len());
    Ok(Some(report_path))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::core::types::{Configuration, ModuleMap};
    use tempfile::TempDir;

    use std::fs;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn render(rows: &[AggregateRow], generated_at: &str) -> String {
        let mut out = Vec::new();
        write_report(&mut out, rows, &SuggestionThresholds::default(), generated_at).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn row_with(hough: f64, edge: f64, plot: f64, rest: f64) -> AggregateRow {
        let module_times = ModuleMap::from_fn(|m| match m {
            Module::Hough => hough,
            Module::EdgeDetection => edge,
            Module::Plot => plot,
            _ => rest,
        });
        AggregateRow::new(Configuration::MULTI_CORE, 200.0, 100.0, module_times)
    }

    #[test]
    fn test_generate_suggestions__all_triggered() {
        // shares: hough 30, edge 25, plot 20, remaining 5 modules 5 each
        let row = row_with(30.0, 25.0, 20.0, 5.0);
        let suggestions = generate_suggestions(&row, &SuggestionThresholds::default());

        let modules: Vec<_> = suggestions.iter().map(|s| s.module).collect();
        assert_eq!(
            modules,
            vec![Module::Hough, Module::EdgeDetection, Module::Plot]
        );
        assert!(suggestions[0].message().contains("30.0%"));
        assert!(suggestions[1].message().contains("NEON"));
    }

    #[test]
    fn test_generate_suggestions__threshold_is_strict() {
        // shares: hough 25, edge 20, plot 15, remaining 5 modules 8 each
        let row = row_with(25.0, 20.0, 15.0, 8.0);
        let suggestions = generate_suggestions(&row, &SuggestionThresholds::default());
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_generate_suggestions__custom_thresholds() {
        let row = row_with(25.0, 20.0, 15.0, 8.0);
        let thresholds = SuggestionThresholds {
            hough_percent: 10.0,
            edge_percent: 50.0,
            plot_percent: 50.0,
        };
        let suggestions = generate_suggestions(&row, &thresholds);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].module, Module::Hough);
    }

    #[test]
    fn test_write_report__sections() {
        let row = row_with(30.0, 25.0, 20.0, 5.0);
        let report = render(&[row], "2024-01-01 00:00:00");

        assert!(report.starts_with("车道偏离预警系统详细性能分析报告\n"));
        assert!(report.contains("生成时间: 2024-01-01 00:00:00"));
        assert!(report.contains("1. 整体性能对比"));
        assert!(report.contains("  整机执行时间: 200.000 ms"));
        assert!(report.contains("  理论帧率: 5.00 FPS"));
        assert!(report.contains("    Hough变换: 30.000 ms (30.00%)"));
        assert!(report.contains("  - Hough变换占用时间较多(30.0%)"));
        assert!(report.contains("主要瓶颈 Hough变换"));
    }

    #[test]
    fn test_write_report__propagates_writer_errors() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("disk full"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let row = row_with(30.0, 25.0, 20.0, 5.0);
        let result = write_report(
            &mut FailingWriter,
            &[row],
            &SuggestionThresholds::default(),
            "2024-01-01 00:00:00",
        );
        assert_eq!(result.unwrap_err().to_string(), "disk full");
    }

    #[test]
    fn test_write_report__no_rows_keeps_headings() {
        let report = render(&[], "now");
        assert!(report.contains("1. 整体性能对比"));
        assert!(report.contains("4. 瓶颈分析"));
    }

    #[test]
    fn test_generate_report__missing_csv_is_graceful() -> TestResult {
        let dir = TempDir::new()?;
        let result = generate_report(dir.path(), &SuggestionThresholds::default())?;

        assert_eq!(result, None);
        assert!(!dir.path().join(files::ANALYSIS_REPORT).exists());
        Ok(())
    }

    #[test]
    fn test_generate_report__writes_file() -> TestResult {
        let dir = TempDir::new()?;
        let csv_path = dir.path().join(files::SUMMARY_CSV);
        summary::write_summary(&csv_path, &[row_with(30.0, 25.0, 20.0, 5.0)])?;

        let report_path = generate_report(dir.path(), &SuggestionThresholds::default())?
            .expect("report should be written");
        let content = fs::read_to_string(report_path)?;
        assert!(content.contains("配置: 多核"));
        assert!(content.contains("3. 性能优化建议"));
        Ok(())
    }
}
