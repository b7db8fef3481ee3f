//! Line dash patterns for series lines and grid lines.

use serde::{Deserialize, Serialize};

use crate::format::decimal_string;

/// `[thickness, solid, blank]` the service draws when no style is sent.
pub const DEFAULT_LINE_STYLE: [f64; 3] = [1.5, 1.0, 0.0];

/// Named patterns as `(name, solid, blank)` at thickness 1.
pub const NAMED_STYLES: &[(&str, f64, f64)] = &[
    ("solid", 1.0, 0.0),
    ("dotted", 1.0, 2.0),
    ("short", 2.0, 4.0),
    ("dashed", 4.0, 4.0),
    ("long", 6.0, 4.0),
];

/// A dash pattern: a predefined name or explicit segment lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineStyle {
    Named(String),
    Custom { solid: f64, blank: f64 },
}

impl LineStyle {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Name of a predefined style this refers to but which does not exist.
    #[must_use]
    pub fn unknown_name(&self) -> Option<&str> {
        match self {
            Self::Named(name) if named_segments(name, 1.0).is_none() => Some(name),
            _ => None,
        }
    }
}

/// Comma-separated list of the predefined style names.
#[must_use]
pub fn style_names() -> String {
    NAMED_STYLES
        .iter()
        .map(|(name, _, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn named_segments(name: &str, thickness: f64) -> Option<[f64; 2]> {
    NAMED_STYLES
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|(_, solid, blank)| [solid * thickness, blank * thickness])
}

/// Builds `[thickness, solid, blank]`. Named patterns scale with the
/// thickness; an unknown name falls back to a solid line.
#[must_use]
pub fn line_style_array(thickness: Option<f64>, style: Option<&LineStyle>) -> [f64; 3] {
    let thickness = thickness.unwrap_or(DEFAULT_LINE_STYLE[0]);
    let [solid, blank] = match style {
        Some(LineStyle::Custom { solid, blank }) => [*solid, *blank],
        Some(LineStyle::Named(name)) => named_segments(name, thickness)
            .unwrap_or([DEFAULT_LINE_STYLE[1], DEFAULT_LINE_STYLE[2]]),
        None => [DEFAULT_LINE_STYLE[1], DEFAULT_LINE_STYLE[2]],
    };
    [thickness, solid, blank]
}

#[must_use]
pub fn render_line_style(style: [f64; 3]) -> String {
    style
        .iter()
        .map(|v| decimal_string(*v))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
#[path = "line_style_tests.rs"]
mod tests;
