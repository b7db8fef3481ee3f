//! Chart validation pipeline.
//!
//! A chart declares an ordered list of [`Validation`] steps; [`run`] executes
//! them in order, skipping any the caller names, and stops at the first
//! failure. The rule checks shared by every chart type live here too.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::{MAX_PIXELS, Result, SmartChartError, URL_MAX_LENGTH};

static COLOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{6}$").expect("Invalid regex"));

/// A named validation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validation {
    LineStyleNames,
    RequiredAttributes,
    Dimensions,
    DataFormat,
    Labels,
    Colors,
    UrlLength,
}

impl Validation {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LineStyleNames => "line-style-names",
            Self::RequiredAttributes => "required-attributes",
            Self::Dimensions => "dimensions",
            Self::DataFormat => "data-format",
            Self::Labels => "labels",
            Self::Colors => "colors",
            Self::UrlLength => "url-length",
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Steps every chart runs, in order.
pub const BASE_VALIDATIONS: &[Validation] = &[
    Validation::RequiredAttributes,
    Validation::Dimensions,
    Validation::DataFormat,
    Validation::Labels,
    Validation::Colors,
    Validation::UrlLength,
];

/// Something that can be run through the pipeline.
pub trait Validate {
    /// Ordered steps for this target.
    fn validations(&self) -> Vec<Validation>;

    /// Runs a single step.
    ///
    /// # Errors
    /// Returns the categorized error for the failed rule.
    fn check(&self, step: Validation) -> Result<()>;
}

/// Runs every step of `target` except those in `skip`.
///
/// # Errors
/// Returns the error of the first failing step.
pub fn run<T: Validate + ?Sized>(target: &T, skip: &[Validation]) -> Result<()> {
    for step in target.validations() {
        if skip.contains(&step) {
            tracing::trace!(%step, "skipping validation");
            continue;
        }
        tracing::debug!(%step, "running validation");
        target.check(step)?;
    }
    Ok(())
}

/// Size limit of a rendered chart image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionLimit {
    /// `width * height` may not exceed this many pixels.
    Pixels(u64),
    /// Each side is checked on its own.
    PerAxis { max_width: u32, max_height: u32 },
}

impl Default for DimensionLimit {
    fn default() -> Self {
        Self::Pixels(MAX_PIXELS)
    }
}

/// Fails on the first attribute in `attributes` that is not set.
///
/// # Errors
/// Returns [`SmartChartError::MissingRequiredAttribute`] naming `chart` and the attribute.
pub fn check_required(chart: &'static str, attributes: &[(&'static str, bool)]) -> Result<()> {
    match attributes.iter().find(|(_, present)| !present) {
        Some((attribute, _)) => Err(SmartChartError::MissingRequiredAttribute { chart, attribute }),
        None => Ok(()),
    }
}

/// # Errors
/// Returns [`SmartChartError::Dimensions`] when a side is zero or `limit`
/// is exceeded.
pub fn check_dimensions(width: u32, height: u32, limit: DimensionLimit) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(SmartChartError::Dimensions(format!(
            "Width and height must be positive, got {width}x{height}"
        )));
    }
    match limit {
        DimensionLimit::Pixels(max) => {
            if u64::from(width) * u64::from(height) > max {
                return Err(SmartChartError::Dimensions(format!(
                    "Chart dimensions must result in at most {max} pixels, got {width}x{height}"
                )));
            }
        }
        DimensionLimit::PerAxis {
            max_width,
            max_height,
        } => {
            if width > max_width || height > max_height {
                return Err(SmartChartError::Dimensions(format!(
                    "Dimensions may not exceed {max_width}x{max_height} pixels, got {width}x{height}"
                )));
            }
        }
    }
    Ok(())
}

#[must_use]
pub fn is_valid_color(color: &str) -> bool {
    COLOR_PATTERN.is_match(color)
}

/// # Errors
/// Returns [`SmartChartError::ColorFormat`] unless `color` is six hex digits.
pub fn check_color(color: &str) -> Result<()> {
    if is_valid_color(color) {
        Ok(())
    } else {
        Err(SmartChartError::ColorFormat(color.to_string()))
    }
}

/// # Errors
/// Returns [`SmartChartError::ColorFormat`] for the first invalid color.
pub fn check_colors<'a>(colors: impl IntoIterator<Item = &'a str>) -> Result<()> {
    colors.into_iter().try_for_each(check_color)
}

/// # Errors
/// Returns [`SmartChartError::UrlLength`] when `url` exceeds [`URL_MAX_LENGTH`].
pub fn check_url_length(url: &str) -> Result<()> {
    let length = url.len();
    if length > URL_MAX_LENGTH {
        return Err(SmartChartError::UrlLength {
            length,
            max: URL_MAX_LENGTH,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
