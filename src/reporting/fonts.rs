//! Font lookup for chart text
//!
//! Text layout in both chart formats needs a font registered with plotters.
//! A configured font file is used as is. Without one, the system font
//! directories are searched and the best match from
//! [`charts::PREFERRED_FONTS`] is registered.

use once_cell::sync::OnceCell;
use plotters::style::{FontStyle, register_font};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::charts;
use crate::core::error::{LaneBenchError, Result};
use crate::reporting::logging;

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];
const STYLED_MARKERS: [&str; 6] = ["bold", "italic", "oblique", "light", "thin", "black"];

static REGISTERED_FONT: OnceCell<PathBuf> = OnceCell::new();

/// Register the chart font and return the file it was read from.
///
/// Registration happens once per process; later calls return the font
/// registered first.
pub fn ensure_chart_font(configured: Option<&Path>) -> Result<&'static Path> {
    REGISTERED_FONT
        .get_or_try_init(|| register_chart_font(configured))
        .map(PathBuf::as_path)
}

fn register_chart_font(configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = configured {
        register_file(path)?;
        logging::log_chart_font(path);
        return Ok(path.to_path_buf());
    }

    let candidates = rank_fonts(find_font_files(&search_dirs()));
    for path in candidates {
        match register_file(&path) {
            Ok(()) => {
                logging::log_chart_font(&path);
                return Ok(path);
            }
            Err(e) => logging::log_warning(&format!("Skipping font: {e}")),
        }
    }

    Err(LaneBenchError::Chart(
        "no usable font found in the system font directories; set chart_font or pass --chart-font"
            .to_string(),
    ))
}

fn register_file(path: &Path) -> Result<()> {
    let bytes = fs::read(path).map_err(|e| {
        LaneBenchError::Chart(format!("Could not read font '{}': {e}", path.display()))
    })?;

    // plotters holds font data for the rest of the process
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(charts::FONT_FAMILY, FontStyle::Normal, bytes).map_err(|_| {
        LaneBenchError::Chart(format!("'{}' is not a usable font file", path.display()))
    })
}

fn search_dirs() -> Vec<PathBuf> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let user_dirs = home
        .iter()
        .flat_map(|home| charts::USER_FONT_DIRS.iter().map(move |dir| home.join(dir)));

    charts::FONT_DIRS
        .iter()
        .map(PathBuf::from)
        .chain(user_dirs)
        .filter(|dir| dir.is_dir())
        .collect()
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| FONT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Every font file below `dirs`, following symlinks
fn find_font_files(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let Some((first, rest)) = dirs.split_first() else {
        return Vec::new();
    };

    let mut builder = ignore::WalkBuilder::new(first);
    for dir in rest {
        builder.add(dir);
    }
    builder.standard_filters(false).follow_links(true);

    builder
        .build()
        .filter_map(|entry| entry.ok())
        .map(ignore::DirEntry::into_path)
        .filter(|path| path.is_file() && is_font_file(path))
        .collect()
}

/// Sort key: preference slot, then regular before styled faces
fn font_rank(path: &Path) -> (usize, bool) {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let preference = charts::PREFERRED_FONTS
        .iter()
        .position(|fragment| name.contains(fragment))
        .unwrap_or(charts::PREFERRED_FONTS.len());
    let styled = STYLED_MARKERS.iter().any(|marker| name.contains(marker));
    (preference, styled)
}

fn rank_fonts(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.sort_by(|a, b| font_rank(a).cmp(&font_rank(b)).then_with(|| a.cmp(b)));
    paths
}
