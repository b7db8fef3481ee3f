//! Chart shapes. Each shape is a static table the shared engine reads:
//! accepted attributes, type code, data extraction, parameter formatters
//! and validation steps.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Chart;
use super::axis;
use super::data::ChartData;
use super::map;
use super::options::{Attribute, ChartStyle, Orientation};
use super::params;
use crate::encoder::Series;
use crate::query::Param;
use crate::validation::{BASE_VALIDATIONS, DimensionLimit, Validation};
use crate::{Result, SmartChartError};

/// Produces the value of one parameter.
pub type Formatter = fn(&Chart) -> Option<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Line,
    Scatter,
    Bar,
    Radar,
    Pie,
    Map,
    QrCode,
}

impl Shape {
    pub const ALL: &'static [Self] = &[
        Self::Line,
        Self::Scatter,
        Self::Bar,
        Self::Radar,
        Self::Pie,
        Self::Map,
        Self::QrCode,
    ];

    #[must_use]
    pub const fn spec(self) -> &'static ShapeSpec {
        match self {
            Self::Line => &LINE,
            Self::Scatter => &SCATTER,
            Self::Bar => &BAR,
            Self::Radar => &RADAR,
            Self::Pie => &PIE,
            Self::Map => &MAP,
            Self::QrCode => &QR_CODE,
        }
    }

    /// Display name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.spec().name
    }

    /// Key used for this shape in chart definition files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Scatter => "scatter",
            Self::Bar => "bar",
            Self::Radar => "radar",
            Self::Pie => "pie",
            Self::Map => "map",
            Self::QrCode => "qr_code",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.key() == key)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the engine needs to know about one shape.
pub struct ShapeSpec {
    pub name: &'static str,
    pub attributes: &'static [Attribute],
    pub required: &'static [Attribute],
    pub type_code: fn(&Chart) -> String,
    pub data_values: fn(&Chart) -> Vec<Series>,
    /// Shared parameters in output order.
    pub base_params: &'static [(Param, Formatter)],
    /// Replacements for entries of `base_params`.
    pub overrides: &'static [(Param, Formatter)],
    /// Shape-only parameters, appended after the shared ones.
    pub extra_params: &'static [(Param, Formatter)],
    pub validations: &'static [Validation],
    pub dimensions: DimensionLimit,
    /// Values of the `style` attribute this shape understands.
    pub styles: &'static [ChartStyle],
    pub check_data_format: fn(&Chart) -> Result<()>,
    pub check_labels: fn(&Chart) -> Result<()>,
}

impl ShapeSpec {
    /// `(param, formatter)` pairs in output order, overrides applied.
    pub fn params(&self) -> impl Iterator<Item = (Param, Formatter)> + '_ {
        self.base_params
            .iter()
            .map(|(param, formatter)| {
                let formatter = self
                    .overrides
                    .iter()
                    .find(|(p, _)| p == param)
                    .map_or(*formatter, |(_, f)| *f);
                (*param, formatter)
            })
            .chain(self.extra_params.iter().copied())
    }

    #[must_use]
    pub fn accepts(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }
}

impl fmt::Debug for ShapeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeSpec")
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("validations", &self.validations)
            .finish_non_exhaustive()
    }
}

const REQUIRED: &[Attribute] = &[Attribute::Width, Attribute::Height, Attribute::Data];

const BASE_PARAMS: &[(Param, Formatter)] = &[
    (Param::Type, params::chart_type),
    (Param::Size, params::size),
    (Param::Data, params::data),
    (Param::Color, params::series_colors),
    (Param::Fill, params::fill),
    (Param::Labels, params::none),
    (Param::AxisType, axis::axis_type),
    (Param::AxisLabels, axis::axis_labels),
    (Param::AxisLabelPositions, axis::axis_label_positions),
    (Param::AxisStyle, axis::axis_style),
    (Param::Margins, params::margins),
    (Param::BarSpacing, params::none),
    (Param::ZeroLineOrRotation, params::none),
    (Param::LineStyles, params::none),
    (Param::GridLines, params::none),
    (Param::Title, params::title),
    (Param::Legend, params::legend),
    (Param::LegendPosition, params::legend_position),
];

const QR_PARAMS: &[(Param, Formatter)] = &[
    (Param::Type, params::chart_type),
    (Param::Size, params::size),
    (Param::Labels, params::qr_text),
    (Param::LabelData, params::qr_error_correction),
    (Param::BarcodeEncoding, params::qr_encoding),
];

const LINE_VALIDATIONS: &[Validation] = &[
    Validation::LineStyleNames,
    Validation::RequiredAttributes,
    Validation::Dimensions,
    Validation::DataFormat,
    Validation::Labels,
    Validation::Colors,
    Validation::UrlLength,
];

const GRAPH_ATTRIBUTES: &[Attribute] = &[
    Attribute::Width,
    Attribute::Height,
    Attribute::Data,
    Attribute::YMin,
    Attribute::YMax,
    Attribute::Background,
    Attribute::Margins,
    Attribute::Legend,
    Attribute::Title,
    Attribute::DataEncoding,
    Attribute::Grid,
    Attribute::Axis,
    Attribute::Labels,
];

const BAR_ATTRIBUTES: &[Attribute] = &[
    Attribute::Width,
    Attribute::Height,
    Attribute::Data,
    Attribute::YMin,
    Attribute::YMax,
    Attribute::Background,
    Attribute::Margins,
    Attribute::Legend,
    Attribute::Title,
    Attribute::DataEncoding,
    Attribute::Orientation,
    Attribute::Style,
    Attribute::Axis,
    Attribute::Labels,
    Attribute::BarWidth,
    Attribute::BarSpace,
    Attribute::BarGroupSpace,
];

const RADAR_ATTRIBUTES: &[Attribute] = &[
    Attribute::Width,
    Attribute::Height,
    Attribute::Data,
    Attribute::YMin,
    Attribute::YMax,
    Attribute::Background,
    Attribute::Margins,
    Attribute::Legend,
    Attribute::Title,
    Attribute::DataEncoding,
    Attribute::Style,
];

const PIE_ATTRIBUTES: &[Attribute] = &[
    Attribute::Width,
    Attribute::Height,
    Attribute::Data,
    Attribute::YMin,
    Attribute::YMax,
    Attribute::Background,
    Attribute::Margins,
    Attribute::Legend,
    Attribute::Title,
    Attribute::DataEncoding,
    Attribute::Style,
    Attribute::Rotate,
    Attribute::Colors,
];

const MAP_ATTRIBUTES: &[Attribute] = &[
    Attribute::Width,
    Attribute::Height,
    Attribute::Data,
    Attribute::YMin,
    Attribute::YMax,
    Attribute::Background,
    Attribute::Margins,
    Attribute::Legend,
    Attribute::Title,
    Attribute::DataEncoding,
    Attribute::Colors,
    Attribute::Foreground,
    Attribute::Region,
];

const QR_ATTRIBUTES: &[Attribute] = &[
    Attribute::Width,
    Attribute::Height,
    Attribute::Data,
    Attribute::EcLevel,
    Attribute::Margin,
    Attribute::Encoding,
];

static LINE: ShapeSpec = ShapeSpec {
    name: "Line",
    attributes: GRAPH_ATTRIBUTES,
    required: REQUIRED,
    type_code: line_type,
    data_values: sequence_values,
    base_params: BASE_PARAMS,
    overrides: &[
        (Param::LineStyles, params::line_styles),
        (Param::GridLines, axis::grid_lines),
    ],
    extra_params: &[],
    validations: LINE_VALIDATIONS,
    dimensions: DimensionLimit::Pixels(crate::MAX_PIXELS),
    styles: &[],
    check_data_format: require_sequence,
    check_labels: axis::check_value_labels,
};

static SCATTER: ShapeSpec = ShapeSpec {
    name: "Scatter",
    attributes: GRAPH_ATTRIBUTES,
    required: REQUIRED,
    type_code: scatter_type,
    data_values: sequence_values,
    base_params: BASE_PARAMS,
    overrides: &[
        (Param::LineStyles, params::line_styles),
        (Param::GridLines, axis::grid_lines),
    ],
    extra_params: &[],
    validations: LINE_VALIDATIONS,
    dimensions: DimensionLimit::Pixels(crate::MAX_PIXELS),
    styles: &[],
    check_data_format: require_sequence,
    check_labels: axis::check_value_labels,
};

static BAR: ShapeSpec = ShapeSpec {
    name: "Bar",
    attributes: BAR_ATTRIBUTES,
    required: REQUIRED,
    type_code: bar_type,
    data_values: sequence_values,
    base_params: BASE_PARAMS,
    overrides: &[(Param::BarSpacing, params::bar_spacing)],
    extra_params: &[],
    validations: BASE_VALIDATIONS,
    dimensions: DimensionLimit::Pixels(crate::MAX_PIXELS),
    styles: &[ChartStyle::Grouped, ChartStyle::Stacked],
    check_data_format: require_sequence,
    check_labels: axis::check_value_labels,
};

static RADAR: ShapeSpec = ShapeSpec {
    name: "Radar",
    attributes: RADAR_ATTRIBUTES,
    required: REQUIRED,
    type_code: radar_type,
    data_values: sequence_values,
    base_params: BASE_PARAMS,
    overrides: &[(Param::LineStyles, params::line_styles)],
    extra_params: &[],
    validations: LINE_VALIDATIONS,
    dimensions: DimensionLimit::Pixels(crate::MAX_PIXELS),
    styles: &[ChartStyle::Filled],
    check_data_format: require_sequence,
    check_labels: no_labels,
};

static PIE: ShapeSpec = ShapeSpec {
    name: "Pie",
    attributes: PIE_ATTRIBUTES,
    required: REQUIRED,
    type_code: pie_type,
    data_values: mapping_values,
    base_params: BASE_PARAMS,
    overrides: &[
        (Param::Color, params::pie_colors),
        (Param::Labels, params::pie_labels),
        (Param::ZeroLineOrRotation, params::pie_rotation),
    ],
    extra_params: &[],
    validations: BASE_VALIDATIONS,
    dimensions: DimensionLimit::Pixels(crate::MAX_PIXELS),
    styles: &[ChartStyle::Flat, ChartStyle::ThreeD, ChartStyle::Concentric],
    check_data_format: require_mapping,
    check_labels: no_labels,
};

static MAP: ShapeSpec = ShapeSpec {
    name: "Map",
    attributes: MAP_ATTRIBUTES,
    required: REQUIRED,
    type_code: map_type,
    data_values: mapping_values,
    base_params: BASE_PARAMS,
    overrides: &[(Param::Color, params::map_colors)],
    extra_params: &[
        (Param::MapRegion, params::map_region),
        (Param::LabelData, params::map_codes),
    ],
    validations: BASE_VALIDATIONS,
    dimensions: DimensionLimit::PerAxis {
        max_width: 440,
        max_height: 220,
    },
    styles: &[],
    check_data_format: require_map_data,
    check_labels: map_labels,
};

static QR_CODE: ShapeSpec = ShapeSpec {
    name: "QRCode",
    attributes: QR_ATTRIBUTES,
    required: REQUIRED,
    type_code: qr_type,
    data_values: no_values,
    base_params: QR_PARAMS,
    overrides: &[],
    extra_params: &[],
    validations: BASE_VALIDATIONS,
    dimensions: DimensionLimit::Pixels(crate::MAX_PIXELS),
    styles: &[],
    check_data_format: require_text,
    check_labels: no_labels,
};

// --- type codes ---

/// `ls` (sparkline) when axes are explicitly hidden.
fn line_type(chart: &Chart) -> String {
    let hidden = chart
        .options()
        .axis
        .as_ref()
        .and_then(|a| a.sides.as_ref())
        .is_some_and(Vec::is_empty);
    if hidden { "ls" } else { "lc" }.to_string()
}

fn scatter_type(_: &Chart) -> String {
    "s".to_string()
}

fn map_type(_: &Chart) -> String {
    "t".to_string()
}

fn qr_type(_: &Chart) -> String {
    "qr".to_string()
}

fn bar_type(chart: &Chart) -> String {
    let options = chart.options();
    let direction = match options.orientation.unwrap_or_default() {
        Orientation::Vertical => 'v',
        Orientation::Horizontal => 'h',
    };
    let grouping = if options.style == Some(ChartStyle::Stacked) {
        's'
    } else {
        'g'
    };
    format!("b{direction}{grouping}")
}

fn radar_type(chart: &Chart) -> String {
    if chart.options().style == Some(ChartStyle::Filled) {
        "rs"
    } else {
        "r"
    }
    .to_string()
}

fn pie_type(chart: &Chart) -> String {
    match chart.options().style {
        Some(ChartStyle::ThreeD) => "p3",
        Some(ChartStyle::Concentric) => "pc",
        _ => "p",
    }
    .to_string()
}

// --- data extraction ---

fn sequence_values(chart: &Chart) -> Vec<Series> {
    match chart.options().data.as_ref() {
        Some(data) if data.is_sequence() => data.series(),
        _ => Vec::new(),
    }
}

const fn no_values(_: &Chart) -> Vec<Series> {
    Vec::new()
}

fn mapping_values(chart: &Chart) -> Vec<Series> {
    match chart.options().data.as_ref() {
        Some(data @ ChartData::Mapping(_)) => data.series(),
        _ => Vec::new(),
    }
}

// --- data format and label checks ---

fn data_format_error(chart: &Chart, expected: &str) -> SmartChartError {
    let found = chart.options().data.as_ref().map_or("nothing", ChartData::kind);
    SmartChartError::DataFormat(format!(
        "{} data should be given as {expected}, got {found}",
        chart.shape().name()
    ))
}

fn require_sequence(chart: &Chart) -> Result<()> {
    match chart.options().data.as_ref() {
        Some(data) if data.is_sequence() => Ok(()),
        _ => Err(data_format_error(chart, "an array")),
    }
}

fn require_mapping(chart: &Chart) -> Result<()> {
    match chart.options().data.as_ref() {
        Some(ChartData::Mapping(_)) => Ok(()),
        _ => Err(data_format_error(chart, "a mapping of labels to values")),
    }
}

fn require_map_data(chart: &Chart) -> Result<()> {
    require_mapping(chart)?;
    map::check_region(
        chart
            .options()
            .region
            .as_deref()
            .unwrap_or(map::DEFAULT_REGION),
    )
}

fn require_text(chart: &Chart) -> Result<()> {
    if !matches!(chart.options().data, Some(ChartData::Text(_))) {
        return Err(data_format_error(chart, "a string"));
    }
    if let Some(level) = chart.options().ec_level.as_deref()
        && !matches!(level.to_uppercase().as_str(), "L" | "M" | "Q" | "H")
    {
        return Err(SmartChartError::DataFormat(format!(
            "Error correction level '{level}' is not valid; use L, M, Q, or H"
        )));
    }
    Ok(())
}

const fn no_labels(_: &Chart) -> Result<()> {
    Ok(())
}

fn map_labels(chart: &Chart) -> Result<()> {
    let Some(ChartData::Mapping(data)) = chart.options().data.as_ref() else {
        return Ok(());
    };
    let region = chart
        .options()
        .region
        .as_deref()
        .unwrap_or(map::DEFAULT_REGION);
    map::check_codes(region, data.keys().map(String::as_str))
}

#[cfg(test)]
#[path = "shape_tests.rs"]
mod tests;
