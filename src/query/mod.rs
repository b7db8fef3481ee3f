//! Query-string parameters and their serialization.

use std::fmt;

use indexmap::IndexMap;

/// A chart-service query parameter. `code()` is the name on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Type,
    Size,
    Data,
    Color,
    Fill,
    Labels,
    AxisType,
    AxisLabels,
    AxisLabelPositions,
    AxisStyle,
    Margins,
    BarSpacing,
    ZeroLineOrRotation,
    LineStyles,
    GridLines,
    Title,
    Legend,
    LegendPosition,
    MapRegion,
    LabelData,
    BarcodeEncoding,
}

impl Param {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Type => "cht",
            Self::Size => "chs",
            Self::Data => "chd",
            Self::Color => "chco",
            Self::Fill => "chf",
            Self::Labels => "chl",
            Self::AxisType => "chxt",
            Self::AxisLabels => "chxl",
            Self::AxisLabelPositions => "chxp",
            Self::AxisStyle => "chxs",
            Self::Margins => "chma",
            Self::BarSpacing => "chbh",
            Self::ZeroLineOrRotation => "chp",
            Self::LineStyles => "chls",
            Self::GridLines => "chg",
            Self::Title => "chtt",
            Self::Legend => "chdl",
            Self::LegendPosition => "chdlp",
            Self::MapRegion => "chtm",
            Self::LabelData => "chld",
            Self::BarcodeEncoding => "choe",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What joins `name=value` pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Separator {
    #[default]
    Ampersand,
    /// `&amp;`, for embedding the URL in HTML attributes.
    HtmlAmpersand,
}

impl Separator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ampersand => "&",
            Self::HtmlAmpersand => "&amp;",
        }
    }
}

/// Ordered collection of parameter values.
///
/// Parameters keep the order in which they were first pushed; empty or
/// absent values are never stored, so they never render as `name=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    params: IndexMap<Param, String>,
}

impl QueryString {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` for `param` unless it is absent or empty.
    pub fn push(&mut self, param: Param, value: Option<String>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.params.insert(param, value);
        }
    }

    #[must_use]
    pub fn get(&self, param: Param) -> Option<&str> {
        self.params.get(&param).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Renders `name=value` pairs joined by `separator`, percent-encoding
    /// values (never names) when `encode` is set.
    #[must_use]
    pub fn render(&self, encode: bool, separator: Separator) -> String {
        self.params
            .iter()
            .map(|(param, value)| {
                if encode {
                    format!("{}={}", param.code(), escape(value))
                } else {
                    format!("{}={value}", param.code())
                }
            })
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}

/// Form-encodes a parameter value: space becomes `+`, everything outside
/// `A-Z a-z 0-9 * - . _` becomes `%XX`.
#[must_use]
pub fn escape(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
