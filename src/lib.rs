pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod encoder;
pub mod error;
pub mod fetch;
pub mod format;
pub mod logging;
pub mod nice;
pub mod output;
pub mod query;
pub mod validation;

pub use chart::{Chart, ChartData, ChartOptions, DataSeries, DataSet, RenderOptions, Shape};
pub use encoder::{EncodedData, Encoding, Series, encode};
pub use error::{Result, SmartChartError};
pub use format::decimal_string;
pub use validation::Validation;

/// Chart service endpoint.
pub const BASE_URL: &str = "http://chart.apis.google.com/chart";

/// Longest URL the chart service accepts.
pub const URL_MAX_LENGTH: usize = 2074;

/// Largest `width * height` the chart service renders.
pub const MAX_PIXELS: u64 = 300_000;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID_CHART: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
