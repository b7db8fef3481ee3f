use std::path::Path;

use serde_json::{Map, Value};

use crate::chart::{Chart, Shape};
use crate::error::{Result, SmartChartError};

use super::filesystem::{FileSystem, RealFileSystem};

/// Key naming the chart shape.
pub const TYPE_KEY: &str = "type";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartFormat {
    #[default]
    Toml,
    Json,
}

impl ChartFormat {
    /// `.json` files are JSON; everything else is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

pub trait ChartLoader {
    /// Loads the chart defined in `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or names an
    /// unknown shape or attribute.
    fn load(&self, path: &Path) -> Result<Chart>;
}

#[derive(Debug, Default)]
pub struct FileChartLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl FileChartLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileChartLoader<F> {
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

impl<F: FileSystem> ChartLoader for FileChartLoader<F> {
    fn load(&self, path: &Path) -> Result<Chart> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| SmartChartError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "loading chart definition");
        parse_chart(&content, ChartFormat::from_path(path))
    }
}

/// Parses a chart definition.
///
/// # Errors
/// Returns a parse error for malformed documents and
/// [`SmartChartError::Config`] or [`SmartChartError::UnknownAttribute`] for
/// definitions that do not describe a chart.
pub fn parse_chart(content: &str, format: ChartFormat) -> Result<Chart> {
    let value: Value = match format {
        ChartFormat::Toml => serde_json::to_value(toml::from_str::<toml::Table>(content)?)?,
        ChartFormat::Json => serde_json::from_str(content)?,
    };
    let Value::Object(mut map) = value else {
        return Err(SmartChartError::Config(
            "chart definition must be a table of attributes".to_string(),
        ));
    };
    let shape = take_shape(&mut map)?;
    Chart::from_map(shape, map)
}

fn take_shape(map: &mut Map<String, Value>) -> Result<Shape> {
    let Some(value) = map.shift_remove(TYPE_KEY) else {
        return Err(SmartChartError::Config(format!(
            "missing '{TYPE_KEY}' key naming the chart type"
        )));
    };
    let key = value.as_str().unwrap_or_default();
    Shape::from_key(key).ok_or_else(|| {
        let valid: Vec<&str> = Shape::ALL.iter().map(|s| s.key()).collect();
        SmartChartError::Config(format!(
            "unknown chart type {value}; expected one of: {}",
            valid.join(", ")
        ))
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
