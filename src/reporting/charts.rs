//! Comparison charts rendered from the summary table
//!
//! Four images are produced: execution time and FPS per configuration,
//! per-configuration module share pies, the effect of multi-core and NEON,
//! and the heaviest modules across configurations. PNG is the default
//! format and SVG can be chosen instead.

use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};

use crate::analysis::AggregateRow;
use crate::core::constants::{chart_formats, charts, numeric};
use crate::core::error::{LaneBenchError, Result};
use crate::core::types::{Configuration, Module};
use crate::reporting::{fonts, logging};

const FONT: &str = charts::FONT_FAMILY;
const GROUP_WIDTH: f64 = 0.8;

/// Image format charts are written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartFormat {
    #[default]
    Png,
    Svg,
}

impl ChartFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            chart_formats::PNG => Some(Self::Png),
            chart_formats::SVG => Some(Self::Svg),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => chart_formats::PNG,
            Self::Svg => chart_formats::SVG,
        }
    }
}

const CONFIG_COLORS: [RGBColor; 4] = [
    RGBColor(0xFF, 0x6B, 0x6B),
    RGBColor(0x4E, 0xCD, 0xC4),
    RGBColor(0x45, 0xB7, 0xD1),
    RGBColor(0x96, 0xCE, 0xB4),
];

const NEON_COLORS: [RGBColor; 2] = [RGBColor(0xFF, 0x8E, 0x8E), RGBColor(0x6E, 0xDD, 0xD5)];

fn module_color(module: Module) -> RGBColor {
    match module {
        Module::Denoise => RGBColor(0xFF, 0x6B, 0x6B),
        Module::EdgeDetection => RGBColor(0x4E, 0xCD, 0xC4),
        Module::Mask => RGBColor(0x45, 0xB7, 0xD1),
        Module::Hough => RGBColor(0x96, 0xCE, 0xB4),
        Module::LineSeparation => RGBColor(0xFF, 0xEA, 0xA7),
        Module::Regression => RGBColor(0xDD, 0xA0, 0xDD),
        Module::Predict => RGBColor(0x98, 0xD8, 0xC8),
        Module::Plot => RGBColor(0xF7, 0xDC, 0x6F),
    }
}

/// Relative reduction of `value` against `baseline`, in percent
pub fn improvement_percent(baseline: f64, value: f64) -> f64 {
    if baseline > 0.0 {
        (baseline - value) / baseline * numeric::MAX_PERCENTAGE
    } else {
        0.0
    }
}

/// Modules whose mean time exceeds `min_ms`, in column order
pub fn significant_modules(row: &AggregateRow, min_ms: f64) -> Vec<(Module, f64)> {
    row.module_times
        .iter()
        .filter(|(_, time)| **time > min_ms)
        .map(|(module, time)| (module, *time))
        .collect()
}

/// The `count` modules with the largest summed time across rows.
/// Ties keep column order.
pub fn heaviest_modules(rows: &[AggregateRow], count: usize) -> Vec<Module> {
    let mut totals: Vec<(Module, f64)> = Module::ALL
        .into_iter()
        .map(|module| (module, rows.iter().map(|r| r.module_times[module]).sum()))
        .collect();
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals.into_iter().take(count).map(|(m, _)| m).collect()
}

/// Execution times of the four configurations, needed for the optimization chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationImpact {
    pub single_core: f64,
    pub single_core_neon: f64,
    pub multi_core: f64,
    pub multi_core_neon: f64,
}

impl OptimizationImpact {
    /// `None` unless every configuration has a row
    pub fn from_rows(rows: &[AggregateRow]) -> Option<Self> {
        let time_of = |configuration: Configuration| {
            rows.iter()
                .find(|r| r.configuration == configuration.label)
                .map(|r| r.total_time_ms)
        };

        Some(Self {
            single_core: time_of(Configuration::SINGLE_CORE)?,
            single_core_neon: time_of(Configuration::SINGLE_CORE_NEON)?,
            multi_core: time_of(Configuration::MULTI_CORE)?,
            multi_core_neon: time_of(Configuration::MULTI_CORE_NEON)?,
        })
    }

    pub fn multi_core_gain(&self) -> f64 {
        improvement_percent(self.single_core, self.multi_core)
    }

    pub fn multi_core_neon_gain(&self) -> f64 {
        improvement_percent(self.single_core, self.multi_core_neon)
    }

    pub fn neon_gain_single(&self) -> f64 {
        improvement_percent(self.single_core, self.single_core_neon)
    }

    pub fn neon_gain_multi(&self) -> f64 {
        improvement_percent(self.multi_core, self.multi_core_neon)
    }
}

struct BarSeries {
    name: Option<String>,
    /// One color per group, cycled when shorter
    colors: Vec<RGBColor>,
    values: Vec<f64>,
    /// Text drawn above each bar; empty strings are skipped
    annotations: Vec<String>,
}

struct BarPanel<'a> {
    title: &'a str,
    y_desc: &'a str,
    groups: &'a [String],
    series: Vec<BarSeries>,
}

fn group_label(groups: &[String], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    groups.get(index as usize).cloned().unwrap_or_default()
}

fn draw_bar_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &BarPanel<'_>,
) -> Result<()> {
    let group_count = panel.groups.len().max(1);
    let y_max = panel
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0, f64::max);
    let y_top = if y_max > 0.0 { y_max * 1.2 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, (FONT, 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..(group_count as f64 - 0.5), 0f64..y_top)?;

    let groups = panel.groups;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(group_count)
        .x_label_formatter(&|x| group_label(groups, *x))
        .y_desc(panel.y_desc)
        .draw()?;

    let bar_width = GROUP_WIDTH / panel.series.len().max(1) as f64;
    let annotation_style =
        TextStyle::from((FONT, 13).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));

    for (s, series) in panel.series.iter().enumerate() {
        if series.colors.is_empty() {
            continue;
        }
        let offset = -GROUP_WIDTH / 2.0 + bar_width * s as f64;

        let bars = series.values.iter().enumerate().map(|(i, &value)| {
            let left = i as f64 + offset;
            let color = series.colors[i % series.colors.len()];
            Rectangle::new([(left, 0.0), (left + bar_width * 0.95, value)], color.filled())
        });
        let annotation = chart.draw_series(bars)?;
        if let Some(name) = &series.name {
            let legend_color = series.colors[0];
            annotation.label(name.as_str()).legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], legend_color.filled())
            });
        }

        let labels = series
            .annotations
            .iter()
            .zip(series.values.iter())
            .enumerate()
            .filter(|(_, (text, _))| !text.is_empty())
            .map(|(i, (text, &value))| {
                Text::new(
                    text.clone(),
                    (i as f64 + offset + bar_width / 2.0, value + y_top * 0.01),
                    annotation_style.clone(),
                )
            });
        chart.draw_series(labels)?;
    }

    if panel.series.iter().any(|s| s.name.is_some()) {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    Ok(())
}

/// One chart image, drawable on any plotters backend
trait Chart {
    /// Image size in pixels
    fn size(&self) -> (u32, u32);

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>;
}

fn render<C: Chart>(path: &Path, format: ChartFormat, chart: &C) -> Result<()> {
    match format {
        ChartFormat::Png => present(BitMapBackend::new(path, chart.size()).into_drawing_area(), chart),
        ChartFormat::Svg => present(SVGBackend::new(path, chart.size()).into_drawing_area(), chart),
    }
}

fn present<DB: DrawingBackend, C: Chart>(root: DrawingArea<DB, Shift>, chart: &C) -> Result<()> {
    root.fill(&WHITE)?;
    chart.draw(&root)?;
    root.present()?;
    Ok(())
}

struct PerformanceComparison<'a> {
    rows: &'a [AggregateRow],
}

impl Chart for PerformanceComparison<'_> {
    fn size(&self) -> (u32, u32) {
        (1500, 600)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        draw_performance_comparison(root, self.rows)
    }
}

fn draw_performance_comparison<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    rows: &[AggregateRow],
) -> Result<()> {
    let (left, right) = root.split_horizontally(750);

    let groups: Vec<String> = rows.iter().map(|r| r.configuration.to_string()).collect();
    let times: Vec<f64> = rows.iter().map(|r| r.total_time_ms).collect();
    let fps: Vec<f64> = rows.iter().map(AggregateRow::fps).collect();

    draw_bar_panel(
        &left,
        &BarPanel {
            title: "整机执行时间对比",
            y_desc: "执行时间 (ms)",
            groups: &groups,
            series: vec![BarSeries {
                name: None,
                colors: CONFIG_COLORS.to_vec(),
                annotations: times.iter().map(|t| format!("{t:.0}ms")).collect(),
                values: times,
            }],
        },
    )?;

    draw_bar_panel(
        &right,
        &BarPanel {
            title: "理论帧率对比",
            y_desc: "帧率 (FPS)",
            groups: &groups,
            series: vec![BarSeries {
                name: None,
                colors: CONFIG_COLORS.to_vec(),
                annotations: fps.iter().map(|f| format!("{f:.2}FPS")).collect(),
                values: fps,
            }],
        },
    )
}

struct ModuleBreakdown<'a> {
    rows: &'a [AggregateRow],
    min_ms: f64,
}

impl ModuleBreakdown<'_> {
    /// Two pies per grid row
    fn grid_rows(&self) -> usize {
        self.rows.len().div_ceil(2).max(1)
    }
}

impl Chart for ModuleBreakdown<'_> {
    fn size(&self) -> (u32, u32) {
        (1600, 600 * self.grid_rows() as u32)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        draw_module_breakdown(root, self.rows, self.min_ms, self.grid_rows())
    }
}

fn draw_module_breakdown<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    rows: &[AggregateRow],
    min_ms: f64,
    grid_rows: usize,
) -> Result<()> {
    let cells = root.split_evenly((grid_rows, 2));
    for (row, cell) in rows.iter().zip(cells.iter()) {
        let title = format!("{} 模块时间分解", row.configuration);
        let inner = cell.titled(&title, (FONT, 22))?;

        let slices = significant_modules(row, min_ms);
        if slices.is_empty() {
            continue;
        }

        let (width, height) = inner.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.35;
        let sizes: Vec<f64> = slices.iter().map(|(_, time)| *time).collect();
        let colors: Vec<RGBColor> = slices.iter().map(|(m, _)| module_color(*m)).collect();
        let labels: Vec<&str> = slices.iter().map(|(m, _)| m.display_name()).collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style((FONT, 16).into_font().color(&BLACK));
        pie.percentages((FONT, 14).into_font().color(&WHITE));
        inner.draw(&pie)?;
    }

    Ok(())
}

impl Chart for OptimizationImpact {
    fn size(&self) -> (u32, u32) {
        (1500, 600)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        draw_optimization_impact(root, self)
    }
}

fn draw_optimization_impact<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    impact: &OptimizationImpact,
) -> Result<()> {
    let (left, right) = root.split_horizontally(750);

    let scaling_groups: Vec<String> = [
        Configuration::SINGLE_CORE,
        Configuration::MULTI_CORE,
        Configuration::MULTI_CORE_NEON,
    ]
    .iter()
    .map(|c| c.label.to_string())
    .collect();

    draw_bar_panel(
        &left,
        &BarPanel {
            title: "多核并行化效果",
            y_desc: "执行时间 (ms)",
            groups: &scaling_groups,
            series: vec![BarSeries {
                name: None,
                colors: CONFIG_COLORS[..3].to_vec(),
                values: vec![impact.single_core, impact.multi_core, impact.multi_core_neon],
                annotations: vec![
                    String::new(),
                    format!("提升{:.1}%", impact.multi_core_gain()),
                    format!("提升{:.1}%", impact.multi_core_neon_gain()),
                ],
            }],
        },
    )?;

    let neon_groups = vec![
        Configuration::SINGLE_CORE.label.to_string(),
        Configuration::MULTI_CORE.label.to_string(),
    ];
    draw_bar_panel(
        &right,
        &BarPanel {
            title: "NEON优化效果对比",
            y_desc: "执行时间 (ms)",
            groups: &neon_groups,
            series: vec![
                BarSeries {
                    name: Some("无NEON".to_string()),
                    colors: CONFIG_COLORS[..2].to_vec(),
                    values: vec![impact.single_core, impact.multi_core],
                    annotations: Vec::new(),
                },
                BarSeries {
                    name: Some("有NEON".to_string()),
                    colors: NEON_COLORS.to_vec(),
                    values: vec![impact.single_core_neon, impact.multi_core_neon],
                    annotations: vec![
                        format!("+{:.1}%", impact.neon_gain_single()),
                        format!("+{:.1}%", impact.neon_gain_multi()),
                    ],
                },
            ],
        },
    )
}

struct BottleneckAnalysis<'a> {
    rows: &'a [AggregateRow],
}

impl Chart for BottleneckAnalysis<'_> {
    fn size(&self) -> (u32, u32) {
        (1200, 800)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        draw_bottleneck_analysis(root, self.rows)
    }
}

fn draw_bottleneck_analysis<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    rows: &[AggregateRow],
) -> Result<()> {
    let groups: Vec<String> = rows.iter().map(|r| r.configuration.to_string()).collect();
    let series = heaviest_modules(rows, charts::BOTTLENECK_MODULE_COUNT)
        .into_iter()
        .map(|module| {
            let values: Vec<f64> = rows.iter().map(|r| r.module_times[module]).collect();
            BarSeries {
                name: Some(module.display_name().to_string()),
                colors: vec![module_color(module)],
                annotations: values
                    .iter()
                    .map(|v| if *v > 0.0 { format!("{v:.1}") } else { String::new() })
                    .collect(),
                values,
            }
        })
        .collect();

    draw_bar_panel(
        root,
        &BarPanel {
            title: "各配置主要模块执行时间对比",
            y_desc: "执行时间 (ms)",
            groups: &groups,
            series,
        },
    )
}

/// Renders the comparison charts into an output directory
pub struct ChartRenderer {
    output_dir: PathBuf,
    pie_min_module_ms: f64,
    format: ChartFormat,
    font: Option<PathBuf>,
}

impl ChartRenderer {
    pub fn new<P: AsRef<Path>>(output_dir: P, pie_min_module_ms: f64) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            pie_min_module_ms,
            format: ChartFormat::default(),
            font: None,
        }
    }

    pub fn with_format(mut self, format: ChartFormat) -> Self {
        self.format = format;
        self
    }

    /// Font file for chart text instead of a system font lookup
    pub fn with_font(mut self, font: Option<PathBuf>) -> Self {
        self.font = font;
        self
    }

    /// Where the chart called `name` is written in the configured format
    pub fn chart_path(&self, name: &str) -> PathBuf {
        self.output_dir
            .join(name)
            .with_extension(self.format.extension())
    }

    /// Render every chart the rows allow and return the written paths
    pub fn render_all(&self, rows: &[AggregateRow]) -> Result<Vec<PathBuf>> {
        if rows.is_empty() {
            return Err(LaneBenchError::InvalidSummary(
                "summary table has no rows to chart".to_string(),
            ));
        }
        fonts::ensure_chart_font(self.font.as_deref())?;

        let mut written = vec![
            self.performance_comparison(rows)?,
            self.module_breakdown(rows)?,
        ];
        if let Some(path) = self.optimization_impact(rows)? {
            written.push(path);
        }
        written.push(self.bottleneck_analysis(rows)?);

        for path in &written {
            logging::log_chart_written(path);
        }
        Ok(written)
    }

    pub fn performance_comparison(&self, rows: &[AggregateRow]) -> Result<PathBuf> {
        let path = self.chart_path(charts::PERFORMANCE_COMPARISON);
        render(&path, self.format, &PerformanceComparison { rows })?;
        Ok(path)
    }

    pub fn module_breakdown(&self, rows: &[AggregateRow]) -> Result<PathBuf> {
        let path = self.chart_path(charts::MODULE_BREAKDOWN);
        let chart = ModuleBreakdown {
            rows,
            min_ms: self.pie_min_module_ms,
        };
        render(&path, self.format, &chart)?;
        Ok(path)
    }

    /// `Ok(None)` when a configuration is missing from the rows
    pub fn optimization_impact(&self, rows: &[AggregateRow]) -> Result<Option<PathBuf>> {
        let Some(impact) = OptimizationImpact::from_rows(rows) else {
            logging::log_warning("优化效果图表需要全部四种配置的数据，已跳过");
            return Ok(None);
        };

        let path = self.chart_path(charts::OPTIMIZATION_IMPACT);
        render(&path, self.format, &impact)?;
        Ok(Some(path))
    }

    pub fn bottleneck_analysis(&self, rows: &[AggregateRow]) -> Result<PathBuf> {
        let path = self.chart_path(charts::BOTTLENECK_ANALYSIS);
        render(&path, self.format, &BottleneckAnalysis { rows })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::core::types::ModuleMap;
    use std::fs;
    use tempfile::TempDir;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn row(configuration: Configuration, total: f64, times: [f64; 8]) -> AggregateRow {
        AggregateRow::new(
            configuration,
            total,
            100.0,
            ModuleMap::from_fn(|m| times[m.index()]),
        )
    }

    fn all_rows() -> Vec<AggregateRow> {
        vec![
            row(Configuration::SINGLE_CORE, 4000.0, [10.0, 12.0, 0.5, 40.0, 0.3, 2.0, 0.1, 8.0]),
            row(Configuration::SINGLE_CORE_NEON, 3000.0, [8.0, 9.0, 0.5, 35.0, 0.3, 2.0, 0.1, 7.0]),
            row(Configuration::MULTI_CORE, 2000.0, [5.0, 6.0, 0.4, 20.0, 0.2, 1.0, 0.1, 6.0]),
            row(Configuration::MULTI_CORE_NEON, 1000.0, [4.0, 4.0, 0.4, 15.0, 0.2, 1.0, 0.1, 5.0]),
        ]
    }

    #[test]
    fn test_improvement_percent() {
        assert_eq!(improvement_percent(200.0, 150.0), 25.0);
        assert_eq!(improvement_percent(0.0, 150.0), 0.0);
        assert!(improvement_percent(100.0, 120.0) < 0.0);
    }

    #[test]
    fn test_significant_modules__filters_small_modules() {
        let rows = all_rows();
        let modules: Vec<Module> = significant_modules(&rows[0], 1.0)
            .into_iter()
            .map(|(m, _)| m)
            .collect();

        assert_eq!(
            modules,
            vec![
                Module::Denoise,
                Module::EdgeDetection,
                Module::Hough,
                Module::Regression,
                Module::Plot
            ]
        );
    }

    #[test]
    fn test_heaviest_modules() {
        let heaviest = heaviest_modules(&all_rows(), 4);
        assert_eq!(
            heaviest,
            vec![
                Module::Hough,
                Module::EdgeDetection,
                Module::Denoise,
                Module::Plot
            ]
        );
    }

    #[test]
    fn test_heaviest_modules__ties_keep_column_order() {
        let rows = vec![row(Configuration::SINGLE_CORE, 1.0, [1.0; 8])];
        assert_eq!(
            heaviest_modules(&rows, 2),
            vec![Module::Denoise, Module::EdgeDetection]
        );
    }

    #[test]
    fn test_optimization_impact__requires_all_configurations() {
        let rows = all_rows();
        let impact = OptimizationImpact::from_rows(&rows).unwrap();
        assert_eq!(impact.multi_core_gain(), 50.0);
        assert_eq!(impact.multi_core_neon_gain(), 75.0);
        assert_eq!(impact.neon_gain_single(), 25.0);
        assert_eq!(impact.neon_gain_multi(), 50.0);

        assert_eq!(OptimizationImpact::from_rows(&rows[..3]), None);
    }

    #[test]
    fn test_group_label() {
        let groups = vec!["a".to_string(), "b".to_string()];
        assert_eq!(group_label(&groups, 1.0), "b");
        assert_eq!(group_label(&groups, 0.5), "");
        assert_eq!(group_label(&groups, -1.0), "");
        assert_eq!(group_label(&groups, 5.0), "");
    }

    #[test]
    fn test_chart_format_from_name() {
        assert_eq!(ChartFormat::from_name("png"), Some(ChartFormat::Png));
        assert_eq!(ChartFormat::from_name("svg"), Some(ChartFormat::Svg));
        assert_eq!(ChartFormat::from_name("gif"), None);
        assert_eq!(ChartFormat::default().extension(), "png");
    }

    #[test]
    fn test_chart_path__follows_format() {
        let png = ChartRenderer::new("out", 1.0);
        assert_eq!(
            png.chart_path(charts::MODULE_BREAKDOWN),
            Path::new("out").join("module_breakdown.png")
        );

        let svg = ChartRenderer::new("out", 1.0).with_format(ChartFormat::Svg);
        assert_eq!(
            svg.chart_path(charts::MODULE_BREAKDOWN),
            Path::new("out").join("module_breakdown.svg")
        );
    }

    #[test]
    fn test_render_all__writes_four_png_charts() -> TestResult {
        let dir = TempDir::new()?;
        let written = ChartRenderer::new(dir.path(), 1.0).render_all(&all_rows())?;

        assert_eq!(
            written,
            vec![
                dir.path().join("performance_comparison.png"),
                dir.path().join("module_breakdown.png"),
                dir.path().join("optimization_impact.png"),
                dir.path().join("bottleneck_analysis.png"),
            ]
        );
        for path in &written {
            let content = fs::read(path)?;
            assert!(content.starts_with(b"\x89PNG\r\n\x1a\n"), "{} is not a PNG", path.display());
        }
        Ok(())
    }

    #[test]
    fn test_render_all__svg_format() -> TestResult {
        let dir = TempDir::new()?;
        let written = ChartRenderer::new(dir.path(), 1.0)
            .with_format(ChartFormat::Svg)
            .render_all(&all_rows())?;

        assert_eq!(written.len(), 4);
        for path in &written {
            assert_eq!(path.extension().and_then(|e| e.to_str()), Some("svg"));
            let content = fs::read_to_string(path)?;
            assert!(content.contains("<svg"));
        }
        Ok(())
    }

    #[test]
    fn test_module_breakdown__grid_grows_with_rows() {
        let rows = all_rows();
        let chart = ModuleBreakdown {
            rows: &rows[..1],
            min_ms: 1.0,
        };
        assert_eq!(chart.size(), (1600, 600));

        let chart = ModuleBreakdown {
            rows: &rows,
            min_ms: 1.0,
        };
        assert_eq!(chart.size(), (1600, 1200));
    }

    #[test]
    fn test_render_all__skips_optimization_chart_when_incomplete() -> TestResult {
        let dir = TempDir::new()?;
        let rows = all_rows();
        let written = ChartRenderer::new(dir.path(), 1.0).render_all(&rows[..3])?;

        assert_eq!(written.len(), 3);
        assert!(!dir.path().join(charts::OPTIMIZATION_IMPACT).exists());
        Ok(())
    }

    #[test]
    fn test_render_all__empty_rows_is_error() {
        let dir = TempDir::new().unwrap();
        let result = ChartRenderer::new(dir.path(), 1.0).render_all(&[]);
        assert!(matches!(result, Err(LaneBenchError::InvalidSummary(_))));
    }
}
