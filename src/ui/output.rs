//! Console output for lanebench runs

use serde::Serialize;
use std::path::PathBuf;

use crate::analysis::{AggregateRow, LogScan};
use crate::config::Config;
use crate::core::constants::{display, output_formats};
use crate::core::error::Result;
use crate::ui::color::{Colors, colorize, label};

/// Everything a finished run reports back to the console
#[derive(Debug, Serialize)]
pub struct RunOutcome {
    pub command: &'static str,
    pub scans: Vec<LogScan>,
    pub rows: Vec<AggregateRow>,
    pub summary_csv: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub charts: Vec<PathBuf>,
    /// Notice for the user, such as a missing summary table
    pub message: Option<String>,
}

impl RunOutcome {
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            scans: Vec::new(),
            rows: Vec::new(),
            summary_csv: None,
            report: None,
            charts: Vec::new(),
            message: None,
        }
    }

    pub fn artifacts(&self) -> Vec<&PathBuf> {
        self.summary_csv
            .iter()
            .chain(self.report.iter())
            .chain(self.charts.iter())
            .collect()
    }
}

/// Display configuration information in a user-friendly format
pub fn display_config_info(config: &Config) {
    let thresholds = config.suggestion_thresholds();

    println!(
        "{}: {}",
        label("Log directory"),
        colorize(
            &config.log_dir_path().display().to_string(),
            Colors::BRIGHT_WHITE
        )
    );
    println!(
        "{}: {}",
        label("Output directory"),
        colorize(
            &config.output_dir_path().display().to_string(),
            Colors::BRIGHT_WHITE
        )
    );
    println!(
        "{}: {}",
        label("Suggestion thresholds (%)"),
        colorize(
            &format!(
                "hough {}, edge {}, plot {}",
                thresholds.hough_percent, thresholds.edge_percent, thresholds.plot_percent
            ),
            Colors::BRIGHT_WHITE
        )
    );
    println!(
        "{}: {}",
        label("Pie chart minimum (ms)"),
        colorize(&config.pie_min_module_ms().to_string(), Colors::BRIGHT_WHITE)
    );
    println!();
}

/// Files found for one configuration and the runs kept from them
pub fn format_scan(scan: &LogScan) -> String {
    let mut lines = vec![format!(
        "处理配置 {}: 找到 {} 个日志文件",
        scan.configuration, scan.files_found
    )];
    for log in &scan.accepted {
        let frames = log
            .total_frames
            .map_or_else(|| "None".to_string(), |f| f.to_string());
        lines.push(format!(
            "  {}: 整机时间={}ms, 帧数={frames}",
            log.file, log.total_time_ms
        ));
    }
    lines.join("\n")
}

/// Per-configuration console summary
pub fn format_row_summary(row: &AggregateRow) -> String {
    let (bottleneck, bottleneck_ms) = row.bottleneck();
    [
        format!("配置 {} 处理完成:", label(row.configuration)),
        format!("  平均整机时间: {:.3} ms", row.total_time_ms),
        format!("  平均帧数: {:.0}", row.total_frames),
        format!("  平均模块总时间: {:.3} ms", row.module_total()),
        format!(
            "  主要瓶颈: {} ({})",
            bottleneck.display_name(),
            colorize(&format!("{bottleneck_ms:.3} ms"), Colors::YELLOW)
        ),
    ]
    .join("\n")
}

/// Display the outcome of a run in the configured format
pub fn display_outcome(outcome: &RunOutcome, format: &str) -> Result<()> {
    match format {
        output_formats::JSON => {
            let json = serde_json::to_string_pretty(outcome)
                .map_err(|e| std::io::Error::other(format!("Could not serialize output: {e}")))?;
            println!("{json}");
        }
        _ => display_text_outcome(outcome),
    }
    Ok(())
}

fn display_text_outcome(outcome: &RunOutcome) {
    for scan in &outcome.scans {
        println!("{}", format_scan(scan));
    }
    if !outcome.scans.is_empty() {
        println!();
    }

    if let Some(ref message) = outcome.message {
        println!("{message}");
    }

    for row in &outcome.rows {
        println!("{}", format_row_summary(row));
        println!();
    }

    if let Some(ref csv) = outcome.summary_csv {
        println!(
            "{} 处理完成！结果已保存到: {}",
            display::SUCCESS_EMOJI,
            csv.display()
        );
    }
    if let Some(ref report) = outcome.report {
        println!(
            "{} 详细分析报告已生成: {}",
            display::FILE_EMOJI,
            report.display()
        );
    }
    if !outcome.charts.is_empty() {
        println!("{} 图表文件:", display::CHART_EMOJI);
        for chart in &outcome.charts {
            println!("  - {}", colorize(&chart.display().to_string(), Colors::DIM));
        }
    }
    if outcome.artifacts().is_empty() {
        println!(
            "{} {}",
            display::WARNING_EMOJI,
            colorize("No files were written", Colors::YELLOW)
        );
    } else {
        println!("{}", colorize("所有处理完成！", Colors::GREEN));
    }
}

/// Print an error to stderr
pub fn display_error(message: &str) {
    eprintln!("{} {}", colorize("Error:", Colors::RED), message);
}
