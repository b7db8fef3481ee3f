//! Text formatting helpers shared by parameter formatters and HTML output.

/// Default number of fractional digits kept by [`decimal_string`].
pub const DEFAULT_FRACTION_DIGITS: usize = 3;

/// Formats `value` with at most `max_fraction_digits` digits after the point,
/// dropping trailing zeros and a trailing point (`5.000` → `5`, `5.250` → `5.25`).
#[must_use]
pub fn decimal_string_with(value: f64, max_fraction_digits: usize) -> String {
    let mut s = format!("{value:.max_fraction_digits$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}

/// [`decimal_string_with`] using [`DEFAULT_FRACTION_DIGITS`].
#[must_use]
pub fn decimal_string(value: f64) -> String {
    decimal_string_with(value, DEFAULT_FRACTION_DIGITS)
}

/// Escape HTML special characters.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
