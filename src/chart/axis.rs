//! Axis and grid position calculators.
//!
//! Positions sent to the service are percentages: along the x axis of the
//! data index, along the y axis of the active value range.

use super::Chart;
use super::line_style::line_style_array;
use super::options::{GridStep, IndexLabels, Side, ValueLabels};
use crate::format::decimal_string;
use crate::nice::{self, NiceOptions};
use crate::{Result, SmartChartError};

/// Percent of the width at data index `index` of `count` points.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn x_position(index: f64, count: usize) -> f64 {
    if count < 2 {
        return 0.0;
    }
    100.0 * index / (count - 1) as f64
}

/// Percent of the height at `value` within `[min, max]`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn y_position(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    100.0 * (value - min) / (max - min)
}

/// A label with its percent position on the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub position: f64,
}

/// Sides that get an axis, in output order.
///
/// Explicit `axis.sides` win; otherwise x labels imply a bottom axis and
/// y labels a left axis.
#[must_use]
pub fn sides(chart: &Chart) -> Vec<Side> {
    let options = chart.options();
    if let Some(sides) = options.axis.as_ref().and_then(|a| a.sides.clone()) {
        return sides;
    }
    let Some(labels) = options.labels.as_ref() else {
        return Vec::new();
    };
    let mut sides = Vec::new();
    if labels.x.is_some() {
        sides.push(Side::Bottom);
    }
    if labels.y.is_some() {
        sides.push(Side::Left);
    }
    sides
}

/// Labels along the data index.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn index_labels(labels: &IndexLabels, count: usize) -> Vec<AxisLabel> {
    let every = labels.every.unwrap_or(1).max(1);
    let offset = labels.offset.unwrap_or(0);
    (offset..count)
        .step_by(every)
        .enumerate()
        .map(|(n, index)| AxisLabel {
            text: labels
                .text
                .as_ref()
                .and_then(|t| t.get(n).cloned())
                .unwrap_or_else(|| index.to_string()),
            position: x_position(index as f64, count),
        })
        .collect()
}

/// Number of labels `every` apart from `start` through `max`, or `None`
/// when that would exceed [`nice::MAX_LABELS`].
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn fixed_step_count(start: f64, max: f64, every: f64) -> Option<usize> {
    // Tolerance keeps the last label when float steps land just past max.
    let steps = ((max - start) / every + 1e-9).floor();
    if !steps.is_finite() || steps >= nice::MAX_LABELS as f64 {
        return None;
    }
    Some(if steps < 0.0 { 0 } else { steps as usize + 1 })
}

/// Labels along the value range: a fixed step when `every` is given,
/// nice numbers otherwise. A fixed step that needs too many labels gives
/// none; the `labels` validation reports it.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn value_labels(labels: &ValueLabels, min: f64, max: f64) -> Vec<AxisLabel> {
    if let Some(every) = labels.every.filter(|e| *e > 0.0) {
        let start = min + labels.offset.unwrap_or(0.0);
        let count = fixed_step_count(start, max, every).unwrap_or(0);
        let mut out: Vec<AxisLabel> = (0..count)
            .map(|i| {
                let value = (i as f64).mul_add(every, start);
                AxisLabel {
                    text: decimal_string(value),
                    position: y_position(value, min, max),
                }
            })
            .collect();
        // Steps below the precision of large values repeat the same label.
        out.dedup_by(|a, b| a.text == b.text);
        return out;
    }

    let options = NiceOptions {
        ticks: labels.ticks.unwrap_or(nice::DEFAULT_TICKS),
        scale: labels.scale,
        style: labels.style.unwrap_or_default(),
    };
    nice::labels(min, max, options)
        .into_iter()
        .map(|label| AxisLabel {
            position: y_position(label.value, min, max),
            text: label.text,
        })
        .collect()
}

/// Labels for each axis side, skipping sides without labels.
fn side_labels(chart: &Chart) -> Vec<(usize, Vec<AxisLabel>)> {
    let Some(labels) = chart.options().labels.as_ref() else {
        return Vec::new();
    };
    let count = chart.data_values_count();
    let range = chart.y_min().zip(chart.y_max());

    sides(chart)
        .into_iter()
        .enumerate()
        .filter_map(|(i, side)| {
            let set = if side.is_horizontal() {
                index_labels(labels.x.as_ref()?, count)
            } else {
                let (min, max) = range?;
                value_labels(labels.y.as_ref()?, min, max)
            };
            (!set.is_empty()).then_some((i, set))
        })
        .collect()
}

/// Fails when fixed-step y labels cannot be placed within the value range.
pub fn check_value_labels(chart: &Chart) -> Result<()> {
    let Some(labels) = chart.options().labels.as_ref().and_then(|l| l.y.as_ref()) else {
        return Ok(());
    };
    let (Some(every), Some((min, max))) = (
        labels.every.filter(|e| *e > 0.0),
        chart.y_min().zip(chart.y_max()),
    ) else {
        return Ok(());
    };
    let start = min + labels.offset.unwrap_or(0.0);
    if fixed_step_count(start, max, every).is_none() {
        return Err(SmartChartError::DataFormat(format!(
            "Y axis labels every {} from {} to {} need more than {} labels",
            decimal_string(every),
            decimal_string(start),
            decimal_string(max),
            nice::MAX_LABELS
        )));
    }
    Ok(())
}

/// `chxt`: axis side codes.
pub fn axis_type(chart: &Chart) -> Option<String> {
    let codes: Vec<&str> = sides(chart).into_iter().map(Side::code).collect();
    (!codes.is_empty()).then(|| codes.join(","))
}

/// `chxl`: `index:|text|text` per labelled axis.
pub fn axis_labels(chart: &Chart) -> Option<String> {
    let groups: Vec<String> = side_labels(chart)
        .into_iter()
        .map(|(i, labels)| {
            let texts: Vec<String> = labels.into_iter().map(|l| l.text).collect();
            format!("{i}:|{}", texts.join("|"))
        })
        .collect();
    (!groups.is_empty()).then(|| groups.join("|"))
}

/// `chxp`: `index,position,position` per labelled axis.
pub fn axis_label_positions(chart: &Chart) -> Option<String> {
    let groups: Vec<String> = side_labels(chart)
        .into_iter()
        .map(|(i, labels)| {
            let mut parts = vec![i.to_string()];
            parts.extend(labels.iter().map(|l| decimal_string(l.position)));
            parts.join(",")
        })
        .collect();
    (!groups.is_empty()).then(|| groups.join("|"))
}

/// `chxs`: `index,color` for every axis when an axis color is set.
pub fn axis_style(chart: &Chart) -> Option<String> {
    let color = chart.options().axis.as_ref()?.color.as_ref()?;
    let styles: Vec<String> = (0..sides(chart).len())
        .map(|i| format!("{i},{color}"))
        .collect();
    (!styles.is_empty()).then(|| styles.join("|"))
}

/// `chg`: `x_step,y_step,solid,blank,x_offset,y_offset`.
pub fn grid_lines(chart: &Chart) -> Option<String> {
    let grid = chart.options().grid.as_ref()?;
    if grid.x.is_none() && grid.y.is_none() {
        return None;
    }
    let count = chart.data_values_count();
    let x = |pick: fn(&GridStep) -> Option<f64>| {
        grid.x
            .as_ref()
            .and_then(pick)
            .map_or_else(|| "0".to_string(), |v| decimal_string(x_position(v, count)))
    };
    let range = chart.y_max().zip(chart.y_min()).map(|(max, min)| max - min);
    let y = |pick: fn(&GridStep) -> Option<f64>| {
        grid.y
            .as_ref()
            .and_then(pick)
            .zip(range.filter(|r| *r != 0.0))
            .map_or_else(|| "0".to_string(), |(v, r)| decimal_string(100.0 * v / r))
    };
    let [_, solid, blank] = line_style_array(grid.thickness, grid.style.as_ref());

    Some(
        [
            x(|s| s.every),
            y(|s| s.every),
            decimal_string(solid),
            decimal_string(blank),
            x(|s| s.offset),
            y(|s| s.offset),
        ]
        .join(","),
    )
}

#[cfg(test)]
#[path = "axis_tests.rs"]
mod tests;
