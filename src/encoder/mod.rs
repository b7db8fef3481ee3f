//! Compact string encodings for numeric chart data.
//!
//! All three encodings share one mapping: a value `d` in `[min, max]` becomes
//! the symbol at index `floor((d - min) / (max - min) * (alphabet_size - 1))`.
//! They differ only in alphabet, missing-value token and delimiters:
//!
//! | encoding | token | alphabet                    | missing | within series | between series |
//! |----------|-------|-----------------------------|---------|---------------|----------------|
//! | simple   | `s`   | `A-Z a-z 0-9` (62)          | `_`     | none          | `,`            |
//! | text     | `t`   | `"0"` .. `"100"` (101)      | `-1`    | `,`           | `\|`           |
//! | extended | `e`   | pairs of `A-Z a-z 0-9 - .` (4096) | `__` | none        | `,`            |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered 62-character alphabet of the simple encoding.
const SIMPLE_DIGITS: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Ordered 64-character set the extended encoding pairs with itself.
const EXTENDED_DIGITS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-.";

/// Largest value of the text encoding's alphabet.
const TEXT_MAX: usize = 100;

/// One data series: samples in order, `None` marking a missing value.
pub type Series = Vec<Option<f64>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Simple,
    Text,
    Extended,
}

impl Encoding {
    /// Single-character name of the encoding as it appears in the data parameter.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Simple => 's',
            Self::Text => 't',
            Self::Extended => 'e',
        }
    }

    /// Number of symbols in the alphabet.
    #[must_use]
    pub const fn alphabet_size(self) -> usize {
        match self {
            Self::Simple => SIMPLE_DIGITS.len(),
            Self::Text => TEXT_MAX + 1,
            Self::Extended => EXTENDED_DIGITS.len() * EXTENDED_DIGITS.len(),
        }
    }

    #[must_use]
    pub const fn missing(self) -> &'static str {
        match self {
            Self::Simple => "_",
            Self::Text => "-1",
            Self::Extended => "__",
        }
    }

    /// Delimiter between values of one series.
    #[must_use]
    pub const fn delimiter(self) -> &'static str {
        match self {
            Self::Text => ",",
            Self::Simple | Self::Extended => "",
        }
    }

    /// Separator between series.
    #[must_use]
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Text => "|",
            Self::Simple | Self::Extended => ",",
        }
    }

    /// Appends the symbol at `index` (clamped to the alphabet) to `out`.
    fn push_symbol(self, index: usize, out: &mut String) {
        let index = index.min(self.alphabet_size() - 1);
        match self {
            Self::Simple => out.push(char::from(SIMPLE_DIGITS[index])),
            Self::Text => out.push_str(&index.to_string()),
            Self::Extended => {
                let base = EXTENDED_DIGITS.len();
                out.push(char::from(EXTENDED_DIGITS[index / base]));
                out.push(char::from(EXTENDED_DIGITS[index % base]));
            }
        }
    }

    /// Maps a present value onto an alphabet index.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        clippy::float_cmp
    )]
    fn index_of(self, value: f64, min: f64, max: f64) -> usize {
        // A single data point (or constant data) has no spread to divide by.
        if max == min {
            return self.alphabet_size() - 1;
        }
        let scaled = (value - min) / (max - min);
        let index = (scaled * (self.alphabet_size() - 1) as f64).floor();
        if index <= 0.0 { 0 } else { index as usize }
    }

    /// Encodes `sets` with this encoding.
    ///
    /// `min` and `max` default to the smallest and largest present value
    /// across every series.
    #[must_use]
    pub fn encode(self, sets: &[Series], min: Option<f64>, max: Option<f64>) -> EncodedData {
        let present = || sets.iter().flatten().filter_map(|v| *v);
        let min = min.or_else(|| present().reduce(f64::min));
        let max = max.or_else(|| present().reduce(f64::max));

        let mut payload = String::new();
        for (i, set) in sets.iter().enumerate() {
            if i > 0 {
                payload.push_str(self.separator());
            }
            for (j, value) in set.iter().enumerate() {
                if j > 0 {
                    payload.push_str(self.delimiter());
                }
                match (value, min, max) {
                    (Some(v), Some(lo), Some(hi)) => {
                        self.push_symbol(self.index_of(*v, lo, hi), &mut payload);
                    }
                    _ => payload.push_str(self.missing()),
                }
            }
        }

        EncodedData {
            encoding: self,
            payload,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Simple => "simple",
            Self::Text => "text",
            Self::Extended => "extended",
        };
        f.write_str(name)
    }
}

/// Encoded chart data, rendered as `<token>:<payload>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedData {
    encoding: Encoding,
    payload: String,
}

impl EncodedData {
    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl fmt::Display for EncodedData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.encoding.token(), self.payload)
    }
}

/// Encodes `sets` with `encoding`; see [`Encoding::encode`].
#[must_use]
pub fn encode(
    encoding: Encoding,
    sets: &[Series],
    min: Option<f64>,
    max: Option<f64>,
) -> EncodedData {
    encoding.encode(sets, min, max)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
