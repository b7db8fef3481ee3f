//! The `data` attribute: every representation a chart can be given.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::line_style::LineStyle;
use crate::encoder::Series;

/// Chart data as supplied by the caller. Which variants are legal depends
/// on the chart shape and is checked by the `data-format` validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartData {
    /// Text to encode (QR codes).
    Text(String),
    /// A single bare series.
    Series(Series),
    /// Several series, each bare or styled.
    Sets(Vec<DataSet>),
    /// Label to value, in insertion order (pie slices, map regions).
    Mapping(IndexMap<String, f64>),
}

impl ChartData {
    /// Whether the data is a single bare series rather than a list of sets.
    #[must_use]
    pub const fn is_bare(&self) -> bool {
        matches!(self, Self::Series(_))
    }

    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Series(_) | Self::Sets(_))
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "a string",
            Self::Series(_) | Self::Sets(_) => "an array",
            Self::Mapping(_) => "a mapping",
        }
    }

    /// Numeric series held by the data. Text has none; a mapping is one
    /// series of its values.
    #[must_use]
    pub fn series(&self) -> Vec<Series> {
        match self {
            Self::Text(_) => Vec::new(),
            Self::Series(values) => vec![values.clone()],
            Self::Sets(sets) => sets.iter().map(|s| s.values().to_vec()).collect(),
            Self::Mapping(map) => vec![map.values().copied().map(Some).collect()],
        }
    }

    /// Styled series records, empty unless the data is a list of sets.
    pub fn styled(&self) -> impl Iterator<Item = &DataSeries> {
        let sets: &[DataSet] = match self {
            Self::Sets(sets) => sets,
            _ => &[],
        };
        sets.iter().filter_map(DataSet::styled)
    }
}

impl From<Vec<f64>> for ChartData {
    fn from(values: Vec<f64>) -> Self {
        Self::Series(values.into_iter().map(Some).collect())
    }
}

impl From<Vec<DataSet>> for ChartData {
    fn from(sets: Vec<DataSet>) -> Self {
        Self::Sets(sets)
    }
}

impl From<IndexMap<String, f64>> for ChartData {
    fn from(map: IndexMap<String, f64>) -> Self {
        Self::Mapping(map)
    }
}

impl From<&str> for ChartData {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for ChartData {
    fn from(pairs: [(K, f64); N]) -> Self {
        Self::Mapping(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// One element of a multi-series `data` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataSet {
    Values(Series),
    Styled(DataSeries),
}

impl DataSet {
    #[must_use]
    pub fn values(&self) -> &[Option<f64>] {
        match self {
            Self::Values(values) => values,
            Self::Styled(series) => &series.values,
        }
    }

    #[must_use]
    pub const fn styled(&self) -> Option<&DataSeries> {
        match self {
            Self::Values(_) => None,
            Self::Styled(series) => Some(series),
        }
    }
}

impl From<Vec<f64>> for DataSet {
    fn from(values: Vec<f64>) -> Self {
        Self::Values(values.into_iter().map(Some).collect())
    }
}

impl From<DataSeries> for DataSet {
    fn from(series: DataSeries) -> Self {
        Self::Styled(series)
    }
}

/// A series with presentation attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSeries {
    pub values: Series,
    /// Legend entry.
    pub label: Option<String>,
    pub color: Option<SeriesColor>,
    pub style: Option<LineStyle>,
    pub thickness: Option<f64>,
}

impl DataSeries {
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().map(Some).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(SeriesColor::Single(color.into()));
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub const fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }
}

/// A series color, or one color per data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesColor {
    Single(String),
    PerPoint(Vec<String>),
}

impl SeriesColor {
    #[must_use]
    pub fn colors(&self) -> Vec<&str> {
        match self {
            Self::Single(c) => vec![c.as_str()],
            Self::PerPoint(cs) => cs.iter().map(String::as_str).collect(),
        }
    }

    /// Per-point colors joined by `|`.
    #[must_use]
    pub fn render(&self) -> String {
        self.colors().join("|")
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
