//! Domain types shared across extraction, aggregation and reporting

use serde::Serialize;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A processing stage of the lane detector whose execution time is logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    Denoise,
    EdgeDetection,
    Mask,
    Hough,
    LineSeparation,
    Regression,
    Predict,
    Plot,
}

impl Module {
    /// All modules in summary-table column order
    pub const ALL: [Module; 8] = [
        Module::Denoise,
        Module::EdgeDetection,
        Module::Mask,
        Module::Hough,
        Module::LineSeparation,
        Module::Regression,
        Module::Predict,
        Module::Plot,
    ];

    /// Order in which modules are compared when picking the bottleneck.
    /// The first maximum in this order wins a tie.
    pub const BOTTLENECK_ORDER: [Module; 8] = [
        Module::Hough,
        Module::EdgeDetection,
        Module::Denoise,
        Module::Plot,
        Module::Mask,
        Module::Regression,
        Module::LineSeparation,
        Module::Predict,
    ];

    pub fn index(self) -> usize {
        match self {
            Module::Denoise => 0,
            Module::EdgeDetection => 1,
            Module::Mask => 2,
            Module::Hough => 3,
            Module::LineSeparation => 4,
            Module::Regression => 5,
            Module::Predict => 6,
            Module::Plot => 7,
        }
    }

    /// Label used for the module both in benchmark logs and in reports
    pub fn display_name(self) -> &'static str {
        match self {
            Module::Denoise => "图像去噪",
            Module::EdgeDetection => "边缘检测",
            Module::Mask => "掩码处理",
            Module::Hough => "Hough变换",
            Module::LineSeparation => "线分离",
            Module::Regression => "回归拟合",
            Module::Predict => "转向预测",
            Module::Plot => "结果绘制",
        }
    }

    /// Summary-table column holding the module's mean time
    pub fn time_column(self) -> &'static str {
        match self {
            Module::Denoise => "去噪时间(ms)",
            Module::EdgeDetection => "边缘检测时间(ms)",
            Module::Mask => "掩码时间(ms)",
            Module::Hough => "Hough时间(ms)",
            Module::LineSeparation => "线分离时间(ms)",
            Module::Regression => "回归时间(ms)",
            Module::Predict => "预测时间(ms)",
            Module::Plot => "绘制时间(ms)",
        }
    }

    /// Summary-table column holding the module's share of the module total
    pub fn percent_column(self) -> &'static str {
        match self {
            Module::Denoise => "去噪百分比",
            Module::EdgeDetection => "边缘检测百分比",
            Module::Mask => "掩码百分比",
            Module::Hough => "Hough百分比",
            Module::LineSeparation => "线分离百分比",
            Module::Regression => "回归百分比",
            Module::Predict => "预测百分比",
            Module::Plot => "绘制百分比",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Fixed-size map from every [`Module`] to a value
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModuleMap<T>([T; 8]);

impl<T> ModuleMap<T> {
    pub fn from_fn(mut f: impl FnMut(Module) -> T) -> Self {
        Self(Module::ALL.map(&mut f))
    }

    /// Iterate `(module, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (Module, &T)> {
        Module::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> &[T; 8] {
        &self.0
    }

    pub fn map<U>(&self, mut f: impl FnMut(Module, &T) -> U) -> ModuleMap<U> {
        ModuleMap::from_fn(|module| f(module, &self.0[module.index()]))
    }
}

impl ModuleMap<f64> {
    /// Sum of all module values
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl<T> Index<Module> for ModuleMap<T> {
    type Output = T;

    fn index(&self, module: Module) -> &T {
        &self.0[module.index()]
    }
}

impl<T> IndexMut<Module> for ModuleMap<T> {
    fn index_mut(&mut self, module: Module) -> &mut T {
        &mut self.0[module.index()]
    }
}

impl<T: Serialize> Serialize for ModuleMap<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(8))?;
        for (module, value) in self.iter() {
            map.serialize_entry(&module, value)?;
        }
        map.end()
    }
}

/// Hardware/optimization setting a benchmark was run under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Configuration {
    pub label: &'static str,
    pub cpu_cores: u32,
    pub neon_enabled: bool,
}

impl Configuration {
    pub const SINGLE_CORE: Configuration = Configuration {
        label: "单核",
        cpu_cores: 1,
        neon_enabled: false,
    };
    pub const SINGLE_CORE_NEON: Configuration = Configuration {
        label: "单核+NEON",
        cpu_cores: 1,
        neon_enabled: true,
    };
    pub const MULTI_CORE: Configuration = Configuration {
        label: "多核",
        cpu_cores: 4,
        neon_enabled: false,
    };
    pub const MULTI_CORE_NEON: Configuration = Configuration {
        label: "多核+NEON",
        cpu_cores: 4,
        neon_enabled: true,
    };

    /// Every benchmarked configuration, in summary-table row order
    pub const ALL: [Configuration; 4] = [
        Configuration::SINGLE_CORE,
        Configuration::SINGLE_CORE_NEON,
        Configuration::MULTI_CORE,
        Configuration::MULTI_CORE_NEON,
    ];

    pub fn from_label(label: &str) -> Option<Configuration> {
        Self::ALL.into_iter().find(|c| c.label == label)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Metrics extracted from a single benchmark log
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogRecord {
    pub total_time: Option<f64>,
    /// Frame counts are kept as floats so any digit run in a log parses
    pub total_frames: Option<f64>,
    pub module_times: ModuleMap<Option<f64>>,
}

impl LogRecord {
    /// Record for a log that could not be read or parsed
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the record carries the total time that gates acceptance
    pub fn is_complete(&self) -> bool {
        self.total_time.is_some()
    }
}
