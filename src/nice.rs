//! "Nice numbers for graph labels" (Heckbert, Graphics Gems).
//!
//! Picks a tick spacing of 1, 2 or 5 times a power of ten so that roughly
//! `ticks` labels cover `[min, max]`.

use serde::{Deserialize, Serialize};

/// Tick count used when none is requested.
pub const DEFAULT_TICKS: usize = 5;

/// Most labels generated for one axis. More could never fit in a chart URL.
pub const MAX_LABELS: usize = 1000;

/// How the outermost labels relate to the data range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// First and last labels are the exact data min and max.
    #[default]
    Tight,
    /// First and last labels are the nice bounds enclosing the data.
    Loose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NiceOptions {
    /// Target number of labels; the result only approximates it.
    pub ticks: usize,
    /// Fractional digits in label text; chosen from the step when `None`.
    pub scale: Option<usize>,
    pub style: LabelStyle,
}

impl Default for NiceOptions {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_TICKS,
            scale: None,
            style: LabelStyle::Tight,
        }
    }
}

/// A label position and its rendered text.
#[derive(Debug, Clone, PartialEq)]
pub struct NiceLabel {
    pub value: f64,
    pub text: String,
}

/// A "nice" number close to `x`: rounded when `round`, otherwise the
/// smallest nice number not below `x`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn nice_number(x: f64, round: bool) -> f64 {
    let exp = x.log10().floor() as i32;
    let pow = 10f64.powi(exp);
    let f = x / pow;
    let nf = if round {
        if f < 1.5 {
            1.0
        } else if f < 3.0 {
            2.0
        } else if f < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if f <= 1.0 {
        1.0
    } else if f <= 2.0 {
        2.0
    } else if f <= 5.0 {
        5.0
    } else {
        10.0
    };
    nf * pow
}

/// Generates axis labels for `[min, max]`.
///
/// A range with no spread yields a single label at `min`. A range too wide
/// to step through yields its two ends.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn labels(min: f64, max: f64, options: NiceOptions) -> Vec<NiceLabel> {
    if max <= min || !min.is_finite() || !max.is_finite() {
        let scale = options.scale.unwrap_or(0);
        return vec![NiceLabel {
            value: min,
            text: format!("{min:.scale$}"),
        }];
    }

    let ticks = options.ticks.clamp(2, MAX_LABELS);
    let range = nice_number(max - min, false);
    let step = nice_number(range / (ticks - 1) as f64, true);
    let graph_min = (min / step).floor() * step;
    let graph_max = (max / step).ceil() * step;
    let count = ((graph_max - graph_min) / step).round() + 1.0;
    if !count.is_finite() || !step.is_finite() || step <= 0.0 {
        let scale = options.scale.unwrap_or(0);
        return [min, max]
            .into_iter()
            .map(|value| NiceLabel {
                value,
                text: format!("{value:.scale$}"),
            })
            .collect();
    }

    let scale = options
        .scale
        .unwrap_or_else(|| (-step.log10().floor()).max(0.0) as usize);

    let mut marks: Vec<f64> = (0..(count as usize).min(2 * MAX_LABELS))
        .map(|i| (i as f64).mul_add(step, graph_min))
        .collect();
    // Steps below the precision of large values land on the same mark.
    marks.dedup();

    if options.style == LabelStyle::Tight {
        if let Some(first) = marks.first_mut() {
            *first = min;
        }
        if let Some(last) = marks.last_mut() {
            *last = max;
        }
    }

    marks
        .into_iter()
        .map(|value| NiceLabel {
            value,
            text: format!("{value:.scale$}"),
        })
        .collect()
}

#[cfg(test)]
#[path = "nice_tests.rs"]
mod tests;
