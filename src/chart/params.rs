//! Parameter formatters. Each returns the value of one query parameter for
//! a chart, or `None` when the parameter should be left out.

use std::f64::consts::PI;

use super::Chart;
use super::data::{ChartData, SeriesColor};
use super::line_style::{DEFAULT_LINE_STYLE, line_style_array, render_line_style};
use super::map::DEFAULT_REGION;
use crate::format::decimal_string;

/// Foreground color of map regions without data.
pub const DEFAULT_MAP_FOREGROUND: &str = "FFFFFF";

/// Bar spacing in pixels used when none is given.
pub const DEFAULT_BAR_SPACE: u32 = 8;

/// QR error correction level and margin the service assumes.
pub const DEFAULT_EC_LEVEL: &str = "L";
pub const DEFAULT_QR_MARGIN: u32 = 4;

/// Placeholder for parameters a shape does not emit.
pub const fn none(_: &Chart) -> Option<String> {
    None
}

pub fn chart_type(chart: &Chart) -> Option<String> {
    Some(chart.type_code())
}

pub fn size(chart: &Chart) -> Option<String> {
    let options = chart.options();
    Some(format!("{}x{}", options.width?, options.height?))
}

pub fn data(chart: &Chart) -> Option<String> {
    chart.options().data.as_ref()?;
    let values = chart.data_values();
    Some(
        chart
            .encoding()
            .encode(&values, chart.y_min(), chart.y_max())
            .to_string(),
    )
}

/// Per-series colors joined by `,`.
pub fn series_colors(chart: &Chart) -> Option<String> {
    let colors: Vec<String> = chart
        .options()
        .data
        .as_ref()?
        .styled()
        .filter_map(|series| series.color.as_ref().map(SeriesColor::render))
        .collect();
    Some(colors.join(","))
}

pub fn fill(chart: &Chart) -> Option<String> {
    chart
        .options()
        .background
        .as_ref()
        .map(|bg| format!("bg,s,{bg}"))
}

/// `left,right,top,bottom`, followed by `|width,height` of the legend.
pub fn margins(chart: &Chart) -> Option<String> {
    let options = chart.options();
    let legend = options.legend.filter(|l| l.has_dimensions());
    if options.margins.is_none() && legend.is_none() {
        return None;
    }
    let m = options.margins.unwrap_or_default();
    let mut value = [m.left, m.right, m.top, m.bottom]
        .map(|v| v.unwrap_or(0).to_string())
        .join(",");
    if let Some(legend) = legend {
        value.push_str(&format!(
            "|{},{}",
            legend.width.unwrap_or(0),
            legend.height.unwrap_or(0)
        ));
    }
    Some(value)
}

pub fn title(chart: &Chart) -> Option<String> {
    chart
        .options()
        .title
        .as_ref()
        .map(|t| t.replace("\r\n", "|").replace('\n', "|"))
}

/// Series labels joined by `|`, when at least one series has a label.
pub fn legend(chart: &Chart) -> Option<String> {
    let ChartData::Sets(sets) = chart.options().data.as_ref()? else {
        return None;
    };
    let labels: Vec<Option<&str>> = sets
        .iter()
        .map(|set| set.styled().and_then(|s| s.label.as_deref()))
        .collect();
    if labels.iter().all(Option::is_none) {
        return None;
    }
    Some(
        labels
            .into_iter()
            .map(|l| l.unwrap_or_default())
            .collect::<Vec<_>>()
            .join("|"),
    )
}

pub fn legend_position(chart: &Chart) -> Option<String> {
    chart
        .options()
        .legend
        .and_then(|l| l.position)
        .map(|p| p.code().to_string())
}

/// `thickness,solid,blank` per series, omitted when every series draws
/// with the service default.
pub fn line_styles(chart: &Chart) -> Option<String> {
    let ChartData::Sets(sets) = chart.options().data.as_ref()? else {
        return None;
    };
    let lines: Vec<[f64; 3]> = sets
        .iter()
        .map(|set| {
            set.styled().map_or(DEFAULT_LINE_STYLE, |s| {
                line_style_array(s.thickness, s.style.as_ref())
            })
        })
        .collect();
    if lines.iter().all(|l| *l == DEFAULT_LINE_STYLE) {
        return None;
    }
    Some(
        lines
            .into_iter()
            .map(render_line_style)
            .collect::<Vec<_>>()
            .join("|"),
    )
}

/// `bar_width,bar_space,group_space`, sent once any spacing is set.
pub fn bar_spacing(chart: &Chart) -> Option<String> {
    let options = chart.options();
    if options.bar_width.is_none() && options.bar_space.is_none() && options.bar_group_space.is_none()
    {
        return None;
    }
    let width = options
        .bar_width
        .map_or_else(|| "a".to_string(), |w| w.to_string());
    let space = options.bar_space.unwrap_or(DEFAULT_BAR_SPACE);
    let group = options.bar_group_space.unwrap_or_else(|| {
        if chart.data_values().len() == 1 {
            space
        } else {
            DEFAULT_BAR_SPACE
        }
    });
    Some(format!("{width},{space},{group}"))
}

pub fn pie_colors(chart: &Chart) -> Option<String> {
    chart.options().colors.as_ref().map(|c| c.join(","))
}

/// Slice labels: the mapping keys in order.
pub fn pie_labels(chart: &Chart) -> Option<String> {
    match chart.options().data.as_ref()? {
        ChartData::Mapping(map) => Some(map.keys().cloned().collect::<Vec<_>>().join("|")),
        _ => None,
    }
}

/// Rotation in radians from 3 o'clock of `rotate` degrees from 12 o'clock.
pub fn pie_rotation(chart: &Chart) -> Option<String> {
    let degrees = chart.options().rotate.unwrap_or(0.0);
    let radians = decimal_string((degrees - 90.0).rem_euclid(360.0) * PI / 180.0);
    (radians != "0").then_some(radians)
}

/// Foreground color followed by the data colors.
pub fn map_colors(chart: &Chart) -> Option<String> {
    let options = chart.options();
    if options.foreground.is_none() && options.colors.is_none() {
        return None;
    }
    let mut colors = vec![
        options
            .foreground
            .clone()
            .unwrap_or_else(|| DEFAULT_MAP_FOREGROUND.to_string()),
    ];
    colors.extend(options.colors.iter().flatten().cloned());
    Some(colors.join(","))
}

pub fn map_region(chart: &Chart) -> Option<String> {
    Some(
        chart
            .options()
            .region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string()),
    )
}

/// Region codes concatenated in data order.
pub fn map_codes(chart: &Chart) -> Option<String> {
    match chart.options().data.as_ref()? {
        ChartData::Mapping(map) => Some(map.keys().map(String::as_str).collect()),
        _ => None,
    }
}

pub fn qr_text(chart: &Chart) -> Option<String> {
    match chart.options().data.as_ref()? {
        ChartData::Text(text) => Some(text.clone()),
        _ => None,
    }
}

/// `ec_level[|margin]`, only when either differs from the default.
pub fn qr_error_correction(chart: &Chart) -> Option<String> {
    let options = chart.options();
    let level = options
        .ec_level
        .as_deref()
        .unwrap_or(DEFAULT_EC_LEVEL)
        .to_uppercase();
    let margin = options.margin.unwrap_or(DEFAULT_QR_MARGIN);
    if level == DEFAULT_EC_LEVEL && margin == DEFAULT_QR_MARGIN {
        return None;
    }
    if margin == DEFAULT_QR_MARGIN {
        Some(level)
    } else {
        Some(format!("{level}|{margin}"))
    }
}

pub fn qr_encoding(chart: &Chart) -> Option<String> {
    Some(
        chart
            .options()
            .encoding
            .unwrap_or_default()
            .code()
            .to_string(),
    )
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
