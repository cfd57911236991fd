use std::fmt;

/// Comprehensive error types for lanebench operations
#[derive(Debug)]
pub enum LaneBenchError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Regex compilation error
    Regex(regex::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// CSV reading or writing error
    Csv(csv::Error),

    /// Chart rendering error
    Chart(String),

    /// File not found error
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// Summary table has an unexpected shape or value
    InvalidSummary(String),

    /// File walking/ignore error
    FileWalking(ignore::Error),
}

impl fmt::Display for LaneBenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneBenchError::Io(err) => write!(f, "IO error: {err}"),
            LaneBenchError::Config(msg) => write!(f, "Configuration error: {msg}"),
            LaneBenchError::Regex(err) => write!(f, "Regex error: {err}"),
            LaneBenchError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            LaneBenchError::Csv(err) => write!(f, "CSV error: {err}"),
            LaneBenchError::Chart(msg) => write!(f, "Chart error: {msg}"),
            LaneBenchError::FileNotFound(path) => write!(f, "File not found: {path}"),
            LaneBenchError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            LaneBenchError::InvalidSummary(msg) => write!(f, "Invalid summary: {msg}"),
            LaneBenchError::FileWalking(err) => write!(f, "File walking error: {err}"),
        }
    }
}

impl std::error::Error for LaneBenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaneBenchError::Io(err) => Some(err),
            LaneBenchError::Regex(err) => Some(err),
            LaneBenchError::TomlParsing(err) => Some(err),
            LaneBenchError::Csv(err) => Some(err),
            LaneBenchError::FileWalking(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LaneBenchError {
    fn from(err: std::io::Error) -> Self {
        LaneBenchError::Io(err)
    }
}

impl From<regex::Error> for LaneBenchError {
    fn from(err: regex::Error) -> Self {
        LaneBenchError::Regex(err)
    }
}

impl From<toml::de::Error> for LaneBenchError {
    fn from(err: toml::de::Error) -> Self {
        LaneBenchError::TomlParsing(err)
    }
}

impl From<csv::Error> for LaneBenchError {
    fn from(err: csv::Error) -> Self {
        LaneBenchError::Csv(err)
    }
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for LaneBenchError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        LaneBenchError::Chart(err.to_string())
    }
}

impl From<ignore::Error> for LaneBenchError {
    fn from(err: ignore::Error) -> Self {
        LaneBenchError::FileWalking(err)
    }
}

/// Type alias for Results using LaneBenchError
pub type Result<T> = std::result::Result<T, LaneBenchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = LaneBenchError::Config("Invalid threshold".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Invalid threshold"
        );

        let file_error = LaneBenchError::FileNotFound("/path/to/file".to_string());
        assert_eq!(format!("{file_error}"), "File not found: /path/to/file");

        let summary_error = LaneBenchError::InvalidSummary("bad header".to_string());
        assert_eq!(format!("{summary_error}"), "Invalid summary: bad header");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let converted = LaneBenchError::from(io_error);

        assert!(matches!(converted, LaneBenchError::Io(_)));
        assert!(format!("{converted}").contains("IO error:"));
    }

    #[test]
    #[allow(clippy::invalid_regex)]
    fn test_error_from_regex() {
        let regex_error = regex::Regex::new("[invalid").unwrap_err();
        let converted = LaneBenchError::from(regex_error);

        assert!(matches!(converted, LaneBenchError::Regex(_)));
        assert!(converted.source().is_some());
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let converted = LaneBenchError::from(toml_error);

        assert!(matches!(converted, LaneBenchError::TomlParsing(_)));
        assert!(format!("{converted}").contains("TOML parsing error:"));
    }

    #[test]
    fn test_error_from_csv() {
        let data = "a,b\n1,2,3\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let csv_error = reader
            .records()
            .find_map(|r| r.err())
            .expect("ragged row should fail");
        let converted = LaneBenchError::from(csv_error);

        assert!(matches!(converted, LaneBenchError::Csv(_)));
        assert!(converted.source().is_some());
    }

    #[test]
    fn test_error_from_drawing_area() {
        let drawing_error: plotters::drawing::DrawingAreaErrorKind<std::io::Error> =
            plotters::drawing::DrawingAreaErrorKind::LayoutError;
        let converted = LaneBenchError::from(drawing_error);

        assert!(matches!(converted, LaneBenchError::Chart(_)));
        assert!(format!("{converted}").starts_with("Chart error:"));
    }

    #[test]
    fn test_error_from_ignore() {
        let ignore_error = ignore::WalkBuilder::new("/non/existent/path/12345")
            .build()
            .next()
            .unwrap()
            .unwrap_err();
        let converted = LaneBenchError::from(ignore_error);

        assert!(matches!(converted, LaneBenchError::FileWalking(_)));
        assert!(format!("{converted}").contains("File walking error:"));
    }

    #[test]
    fn test_error_no_source_variants() {
        let errors_without_source = vec![
            LaneBenchError::Config("test".to_string()),
            LaneBenchError::Chart("test".to_string()),
            LaneBenchError::FileNotFound("test".to_string()),
            LaneBenchError::InvalidArgument("test".to_string()),
            LaneBenchError::InvalidSummary("test".to_string()),
        ];

        for error in errors_without_source {
            assert!(error.source().is_none());
            assert!(format!("{error}").contains(':'));
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LaneBenchError>();
    }
}
