/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful console summary
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// Input and output file names
pub mod files {
    /// Directory holding benchmark logs (and, by default, every artifact)
    pub const DEFAULT_LOG_DIR: &str = "module_test_results";
    /// Suffix appended to a configuration label to form its log file prefix
    pub const LOG_STEM_INFIX: &str = "_test";
    /// Log file extension
    pub const LOG_EXTENSION: &str = "log";
    /// Aggregated summary table
    pub const SUMMARY_CSV: &str = "processed_performance_summary.csv";
    /// Plain-text analysis report
    pub const ANALYSIS_REPORT: &str = "detailed_analysis_report.txt";
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE: &str = ".lanebench.toml";
}

/// Chart image format constants
pub mod chart_formats {
    /// Raster image, the default
    pub const PNG: &str = "png";
    /// Vector image
    pub const SVG: &str = "svg";

    /// Default chart format
    pub const DEFAULT: &str = PNG;

    /// All valid chart formats
    pub const ALL: [&str; 2] = [PNG, SVG];
}

/// Chart file names. SVG output swaps the extension.
pub mod charts {
    pub const PERFORMANCE_COMPARISON: &str = "performance_comparison.png";
    pub const MODULE_BREAKDOWN: &str = "module_breakdown.png";
    pub const OPTIMIZATION_IMPACT: &str = "optimization_impact.png";
    pub const BOTTLENECK_ANALYSIS: &str = "bottleneck_analysis.png";

    /// Family name chart text is drawn with
    pub const FONT_FAMILY: &str = "sans-serif";

    /// Directories searched for a chart font when none is configured
    pub const FONT_DIRS: [&str; 5] = [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/System/Library/Fonts",
        "/Library/Fonts",
        "C:\\Windows\\Fonts",
    ];

    /// Per-user font directories, relative to the home directory
    pub const USER_FONT_DIRS: [&str; 2] = [".fonts", ".local/share/fonts"];

    /// Font file name fragments in order of preference. CJK fonts come
    /// first so the Chinese chart titles render.
    pub const PREFERRED_FONTS: [&str; 12] = [
        "notosanscjk",
        "notosanssc",
        "sourcehansans",
        "wqy",
        "simhei",
        "msyh",
        "pingfang",
        "droidsansfallback",
        "arialuni",
        "dejavusans.ttf",
        "liberationsans-regular",
        "arial.ttf",
    ];

    /// Number of modules compared in the bottleneck chart
    pub const BOTTLENECK_MODULE_COUNT: usize = 4;
}

/// Thresholds driving the optimization suggestions in the analysis report
pub mod thresholds {
    /// Hough transform share (percent) above which an algorithm change is suggested
    pub const HOUGH_PERCENT: f64 = 25.0;
    /// Edge detection share (percent) above which SIMD optimization is suggested
    pub const EDGE_PERCENT: f64 = 20.0;
    /// Drawing share (percent) above which fewer draw calls are suggested
    pub const PLOT_PERCENT: f64 = 15.0;
    /// Modules at or below this mean time (ms) are left out of pie charts
    pub const PIE_MIN_MODULE_MS: f64 = 1.0;
}

/// Numeric guards
pub mod numeric {
    /// Module totals at or below this value yield all-zero percentages
    pub const MODULE_TOTAL_EPSILON: f64 = 0.001;
    /// Milliseconds per second, used for FPS
    pub const MS_PER_SECOND: f64 = 1000.0;
    /// Maximum percentage value
    pub const MAX_PERCENTAGE: f64 = 100.0;
    /// Minimum percentage value
    pub const MIN_PERCENTAGE: f64 = 0.0;
}

/// Console and report messages
pub mod messages {
    /// Printed when the report step cannot find the summary table
    pub const MISSING_SUMMARY: &str = "CSV文件不存在，请先运行数据处理";
    /// Report title
    pub const REPORT_TITLE: &str = "车道偏离预警系统详细性能分析报告";
}

/// Display and formatting constants
pub mod display {
    /// Emoji for success status
    pub const SUCCESS_EMOJI: &str = "✅";
    /// Emoji for warning status
    pub const WARNING_EMOJI: &str = "⚠️";
    /// Emoji for file information
    pub const FILE_EMOJI: &str = "📁";
    /// Emoji for chart output
    pub const CHART_EMOJI: &str = "📊";
}
