//! Chart attributes: the explicit, enumerated set of options a chart accepts.

use serde::{Deserialize, Serialize};

use super::data::ChartData;
use super::line_style::LineStyle;
use crate::encoder::Encoding;
use crate::nice::LabelStyle;

/// Every attribute name any chart type understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Width,
    Height,
    Data,
    YMin,
    YMax,
    Background,
    Margins,
    Legend,
    Title,
    DataEncoding,
    Orientation,
    Style,
    Grid,
    Axis,
    Labels,
    BarWidth,
    BarSpace,
    BarGroupSpace,
    Rotate,
    Colors,
    Foreground,
    Region,
    EcLevel,
    Margin,
    Encoding,
}

impl Attribute {
    pub const ALL: &'static [Self] = &[
        Self::Width,
        Self::Height,
        Self::Data,
        Self::YMin,
        Self::YMax,
        Self::Background,
        Self::Margins,
        Self::Legend,
        Self::Title,
        Self::DataEncoding,
        Self::Orientation,
        Self::Style,
        Self::Grid,
        Self::Axis,
        Self::Labels,
        Self::BarWidth,
        Self::BarSpace,
        Self::BarGroupSpace,
        Self::Rotate,
        Self::Colors,
        Self::Foreground,
        Self::Region,
        Self::EcLevel,
        Self::Margin,
        Self::Encoding,
    ];

    /// Key used in chart definitions.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Data => "data",
            Self::YMin => "y_min",
            Self::YMax => "y_max",
            Self::Background => "background",
            Self::Margins => "margins",
            Self::Legend => "legend",
            Self::Title => "title",
            Self::DataEncoding => "data_encoding",
            Self::Orientation => "orientation",
            Self::Style => "style",
            Self::Grid => "grid",
            Self::Axis => "axis",
            Self::Labels => "labels",
            Self::BarWidth => "bar_width",
            Self::BarSpace => "bar_space",
            Self::BarGroupSpace => "bar_group_space",
            Self::Rotate => "rotate",
            Self::Colors => "colors",
            Self::Foreground => "foreground",
            Self::Region => "region",
            Self::EcLevel => "ec_level",
            Self::Margin => "margin",
            Self::Encoding => "encoding",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.name() == name)
    }
}

/// Attribute values of one chart. Unset attributes are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartOptions {
    /// Image width in pixels.
    pub width: Option<u32>,
    /// Image height in pixels.
    pub height: Option<u32>,
    pub data: Option<ChartData>,
    /// Explicit lower bound of the value range.
    pub y_min: Option<f64>,
    /// Explicit upper bound of the value range.
    pub y_max: Option<f64>,
    /// Background fill color (six hex digits).
    pub background: Option<String>,
    pub margins: Option<Margins>,
    pub legend: Option<Legend>,
    pub title: Option<String>,
    pub data_encoding: Option<Encoding>,
    /// Bar direction.
    pub orientation: Option<Orientation>,
    pub style: Option<ChartStyle>,
    pub grid: Option<Grid>,
    pub axis: Option<Axis>,
    pub labels: Option<AxisLabels>,
    /// Bar width in pixels (service picks one when unset).
    pub bar_width: Option<u32>,
    /// Space between bars in pixels.
    pub bar_space: Option<u32>,
    /// Space between bar groups in pixels.
    pub bar_group_space: Option<u32>,
    /// Degrees to rotate the first pie slice clockwise from 12 o'clock.
    pub rotate: Option<f64>,
    pub colors: Option<Vec<String>>,
    /// Map color for regions without data.
    pub foreground: Option<String>,
    pub region: Option<String>,
    /// QR error correction level: L, M, Q or H.
    pub ec_level: Option<String>,
    /// QR margin in rows/columns.
    pub margin: Option<u32>,
    /// QR output character encoding.
    pub encoding: Option<QrEncoding>,
}

impl ChartOptions {
    #[must_use]
    pub const fn is_set(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Width => self.width.is_some(),
            Attribute::Height => self.height.is_some(),
            Attribute::Data => self.data.is_some(),
            Attribute::YMin => self.y_min.is_some(),
            Attribute::YMax => self.y_max.is_some(),
            Attribute::Background => self.background.is_some(),
            Attribute::Margins => self.margins.is_some(),
            Attribute::Legend => self.legend.is_some(),
            Attribute::Title => self.title.is_some(),
            Attribute::DataEncoding => self.data_encoding.is_some(),
            Attribute::Orientation => self.orientation.is_some(),
            Attribute::Style => self.style.is_some(),
            Attribute::Grid => self.grid.is_some(),
            Attribute::Axis => self.axis.is_some(),
            Attribute::Labels => self.labels.is_some(),
            Attribute::BarWidth => self.bar_width.is_some(),
            Attribute::BarSpace => self.bar_space.is_some(),
            Attribute::BarGroupSpace => self.bar_group_space.is_some(),
            Attribute::Rotate => self.rotate.is_some(),
            Attribute::Colors => self.colors.is_some(),
            Attribute::Foreground => self.foreground.is_some(),
            Attribute::Region => self.region.is_some(),
            Attribute::EcLevel => self.ec_level.is_some(),
            Attribute::Margin => self.margin.is_some(),
            Attribute::Encoding => self.encoding.is_some(),
        }
    }

    /// Attributes that have a value, in declaration order.
    #[must_use]
    pub fn attributes(&self) -> Vec<Attribute> {
        Attribute::ALL
            .iter()
            .copied()
            .filter(|a| self.is_set(*a))
            .collect()
    }
}

/// Pixel margins around the plot area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Margins {
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub top: Option<u32>,
    pub bottom: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Legend {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub position: Option<LegendPosition>,
}

impl Legend {
    #[must_use]
    pub const fn has_dimensions(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Bottom,
    Top,
    Right,
    Left,
}

impl LegendPosition {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Bottom => "b",
            Self::Top => "t",
            Self::Right => "r",
            Self::Left => "l",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Shape-specific drawing style. Each chart type accepts a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    Grouped,
    Stacked,
    Flat,
    #[serde(rename = "3d")]
    ThreeD,
    Concentric,
    Filled,
}

impl ChartStyle {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grouped => "grouped",
            Self::Stacked => "stacked",
            Self::Flat => "flat",
            Self::ThreeD => "3d",
            Self::Concentric => "concentric",
            Self::Filled => "filled",
        }
    }
}

/// Grid lines: x steps counted in data points, y steps in data units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Grid {
    pub x: Option<GridStep>,
    pub y: Option<GridStep>,
    pub style: Option<LineStyle>,
    pub thickness: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridStep {
    pub every: Option<f64>,
    pub offset: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Axis {
    /// Sides that get an axis. An empty list hides the axes entirely.
    pub sides: Option<Vec<Side>>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Left => "y",
            Self::Right => "r",
            Self::Top => "t",
            Self::Bottom => "x",
        }
    }

    /// Top and bottom axes run along the data index.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisLabels {
    pub x: Option<IndexLabels>,
    pub y: Option<ValueLabels>,
}

/// Labels placed by data index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexLabels {
    pub every: Option<usize>,
    pub offset: Option<usize>,
    /// Label text in order; positions without text show their index.
    pub text: Option<Vec<String>>,
}

/// Labels placed by value, either at a fixed step or by nice numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValueLabels {
    pub every: Option<f64>,
    pub offset: Option<f64>,
    pub ticks: Option<usize>,
    pub style: Option<LabelStyle>,
    pub scale: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QrEncoding {
    #[default]
    Utf8,
    ShiftJis,
    Iso88591,
}

impl QrEncoding {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::ShiftJis => "Shift_JIS",
            Self::Iso88591 => "ISO-8859-1",
        }
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
