use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmartChartError {
    #[error("The {chart} chart type does not accept the '{attribute}' attribute")]
    UnknownAttribute {
        chart: &'static str,
        attribute: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("The {chart} chart type requires the '{attribute}' attribute")]
    MissingRequiredAttribute {
        chart: &'static str,
        attribute: &'static str,
    },

    #[error("Dimensions error: {0}")]
    Dimensions(String),

    #[error("Data format error: {0}")]
    DataFormat(String),

    #[error("Invalid color '{0}': colors must be given as six hexadecimal digits")]
    ColorFormat(String),

    #[error("URL too long: {length} characters (must not exceed {max})")]
    UrlLength { length: usize, max: usize },

    #[error("Line style name '{name}' is not valid. Try one of: {valid}")]
    LineStyleName { name: String, valid: String },

    #[error("Failed to fetch chart image: {0}")]
    Fetch(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SmartChartError {
    /// Whether this error was raised by chart validation (as opposed to
    /// construction, file loading or transport).
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredAttribute { .. }
                | Self::Dimensions(_)
                | Self::DataFormat(_)
                | Self::ColorFormat(_)
                | Self::UrlLength { .. }
                | Self::LineStyleName { .. }
        )
    }

    /// Short category name used as the heading of CLI error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::UnknownAttribute { .. } | Self::Config(_) => "Config",
            Self::MissingRequiredAttribute { .. } => "MissingAttribute",
            Self::Dimensions(_) => "Dimensions",
            Self::DataFormat(_) => "DataFormat",
            Self::ColorFormat(_) => "ColorFormat",
            Self::UrlLength { .. } => "UrlLength",
            Self::LineStyleName { .. } => "LineStyle",
            Self::Fetch(_) => "Fetch",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::TomlParse(_) => "TOML",
            Self::Json(_) => "JSON",
        }
    }

    /// The message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg)
            | Self::Dimensions(msg)
            | Self::DataFormat(msg)
            | Self::Fetch(msg) => msg.clone(),
            Self::FileRead { path, .. } => path.display().to_string(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::Json(e) => e.to_string(),
            _ => self.to_string(),
        }
    }

    /// Underlying cause, when there is one worth printing separately.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::UrlLength { length, max } => {
                Some(format!("{} characters over the limit", length - max))
            }
            _ => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownAttribute { .. } => {
                Some("Remove the attribute or use a chart type that supports it")
            }
            Self::ColorFormat(_) => Some("Use six hex digits without '#', e.g. \"FF0000\""),
            Self::UrlLength { .. } => {
                Some("Reduce the number of data points or use `fetch`, which posts the data")
            }
            Self::Dimensions(_) => Some("Reduce the chart width or height"),
            Self::FileRead { source, .. } | Self::Io(source) => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
                _ => None,
            },
            Self::TomlParse(_) => Some("Check the TOML syntax of the chart file"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SmartChartError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
