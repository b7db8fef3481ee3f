//! Chart configurations and their rendering.
//!
//! A [`Chart`] pairs a [`Shape`] with its [`ChartOptions`]. Construction
//! rejects attributes the shape does not accept; validation and rendering
//! go through the shape's static table in [`shape`].

pub mod axis;
pub mod data;
pub mod line_style;
pub mod map;
pub mod options;
pub mod params;
mod rules;
pub mod shape;

use std::collections::BTreeMap;

pub use data::{ChartData, DataSeries, DataSet, SeriesColor};
pub use line_style::LineStyle;
pub use options::{
    Attribute, Axis, AxisLabels, ChartOptions, ChartStyle, Grid, GridStep, IndexLabels, Legend,
    LegendPosition, Margins, Orientation, QrEncoding, Side, ValueLabels,
};
pub use shape::{Shape, ShapeSpec};

use crate::encoder::{Encoding, Series};
use crate::format::html_escape;
use crate::query::{QueryString, Separator};
use crate::validation::{self, Validation};
use crate::{BASE_URL, Result, SmartChartError};

/// How a chart is turned into a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Percent-encode parameter values.
    pub encode: bool,
    /// Run every validation first.
    pub validate: bool,
    pub separator: Separator,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            encode: true,
            validate: true,
            separator: Separator::Ampersand,
        }
    }
}

impl RenderOptions {
    /// Defaults with `&amp;` separators, for URLs placed in HTML.
    #[must_use]
    pub fn html() -> Self {
        Self {
            separator: Separator::HtmlAmpersand,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    shape: Shape,
    options: ChartOptions,
}

impl Chart {
    /// # Errors
    /// Returns [`SmartChartError::UnknownAttribute`] for the first set
    /// attribute `shape` does not accept.
    pub fn new(shape: Shape, options: ChartOptions) -> Result<Self> {
        check_attributes(shape, &options)?;
        Ok(Self { shape, options })
    }

    /// Builds a chart from attribute name/value pairs.
    ///
    /// Names are checked against the shape before any value is parsed.
    ///
    /// # Errors
    /// Returns [`SmartChartError::UnknownAttribute`] for an unrecognized name
    /// and [`SmartChartError::Config`] for a value of the wrong form.
    pub fn from_map(shape: Shape, map: serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        let spec = shape.spec();
        for key in map.keys() {
            if !Attribute::from_name(key).is_some_and(|a| spec.accepts(a)) {
                return Err(SmartChartError::UnknownAttribute {
                    chart: spec.name,
                    attribute: key.clone(),
                });
            }
        }
        let options: ChartOptions = serde_json::from_value(serde_json::Value::Object(map))
            .map_err(|e| SmartChartError::Config(format!("{} chart: {e}", spec.name)))?;
        Self::new(shape, options)
    }

    /// Changes attributes in place; the change is discarded if it sets an
    /// attribute the shape does not accept.
    ///
    /// # Errors
    /// Returns [`SmartChartError::UnknownAttribute`] as [`Chart::new`] does.
    pub fn update(&mut self, change: impl FnOnce(&mut ChartOptions)) -> Result<()> {
        let mut options = self.options.clone();
        change(&mut options);
        check_attributes(self.shape, &options)?;
        self.options = options;
        Ok(())
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub const fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub(crate) const fn spec(&self) -> &'static ShapeSpec {
        self.shape.spec()
    }

    /// Type code sent as `cht`.
    #[must_use]
    pub fn type_code(&self) -> String {
        (self.spec().type_code)(self)
    }

    /// Numeric series to be encoded.
    #[must_use]
    pub fn data_values(&self) -> Vec<Series> {
        (self.spec().data_values)(self)
    }

    /// Number of points along the x axis: the longest series.
    #[must_use]
    pub fn data_values_count(&self) -> usize {
        self.data_values().iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Explicit `y_min`, else the smallest present value.
    #[must_use]
    pub fn y_min(&self) -> Option<f64> {
        self.options
            .y_min
            .or_else(|| self.present_values().reduce(f64::min))
    }

    /// Explicit `y_max`, else the largest present value.
    #[must_use]
    pub fn y_max(&self) -> Option<f64> {
        self.options
            .y_max
            .or_else(|| self.present_values().reduce(f64::max))
    }

    fn present_values(&self) -> impl Iterator<Item = f64> {
        self.data_values().into_iter().flatten().flatten()
    }

    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.options.data_encoding.unwrap_or_default()
    }

    /// Parameter values in output order, without validation.
    #[must_use]
    pub fn parameters(&self) -> QueryString {
        let mut query = QueryString::new();
        for (param, formatter) in self.spec().params() {
            query.push(param, formatter(self));
        }
        tracing::debug!(chart = self.shape.name(), params = query.len(), "serialized chart");
        query
    }

    /// # Errors
    /// Returns the first validation error when `options.validate` is set.
    pub fn query_string(&self, options: &RenderOptions) -> Result<String> {
        if options.validate {
            self.validate()?;
        }
        Ok(self.parameters().render(options.encode, options.separator))
    }

    /// Service URL of the chart image.
    ///
    /// # Errors
    /// Returns the first validation error when `options.validate` is set.
    pub fn url(&self, options: &RenderOptions) -> Result<String> {
        Ok(format!("{BASE_URL}?{}", self.query_string(options)?))
    }

    /// Validated, encoded URL with `&` separators.
    ///
    /// # Errors
    /// Returns the first validation error.
    pub fn to_url(&self) -> Result<String> {
        self.url(&RenderOptions::default())
    }

    /// An `<img>` tag for the chart. `width` and `height` come from the
    /// chart; `attributes` may add to or replace them.
    ///
    /// # Errors
    /// Returns the first validation error when `options.validate` is set.
    pub fn to_html(&self, options: &RenderOptions, attributes: &[(&str, &str)]) -> Result<String> {
        Ok(self.img_tag(&self.url(options)?, attributes))
    }

    /// `<img>` tag for `src`, which is inserted as given.
    pub(crate) fn img_tag(&self, src: &str, attributes: &[(&str, &str)]) -> String {
        let mut attrs: BTreeMap<String, String> = BTreeMap::new();
        if let Some(width) = self.options.width {
            attrs.insert("width".to_string(), width.to_string());
        }
        if let Some(height) = self.options.height {
            attrs.insert("height".to_string(), height.to_string());
        }
        for (key, value) in attributes {
            attrs.insert((*key).to_string(), (*value).to_string());
        }
        let rendered: String = attrs
            .iter()
            .map(|(k, v)| format!(" {}=\"{}\"", html_escape(k), html_escape(v)))
            .collect();
        format!("<img src=\"{src}\"{rendered} />")
    }

    /// Runs every validation step.
    ///
    /// # Errors
    /// Returns the first failing step's error.
    pub fn validate(&self) -> Result<()> {
        validation::run(self, &[])
    }

    /// Runs every validation step not in `skip`.
    ///
    /// # Errors
    /// Returns the first failing step's error.
    pub fn validate_skipping(&self, skip: &[Validation]) -> Result<()> {
        validation::run(self, skip)
    }

    /// Whether the chart passes validation. Only validation failures count
    /// as `false`; any other error is returned.
    ///
    /// # Errors
    /// Returns errors outside the validation category.
    pub fn is_valid(&self) -> Result<bool> {
        match self.validate() {
            Ok(()) => Ok(true),
            Err(e) if e.is_validation() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

fn check_attributes(shape: Shape, options: &ChartOptions) -> Result<()> {
    let spec = shape.spec();
    match options.attributes().into_iter().find(|a| !spec.accepts(*a)) {
        Some(attribute) => Err(SmartChartError::UnknownAttribute {
            chart: spec.name,
            attribute: attribute.name().to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
