mod fetch;
mod render;
mod validate;

pub use fetch::{run_fetch, run_fetch_impl};
pub use render::{run_html, run_html_impl, run_url, run_url_impl};
pub use validate::{run_validate, run_validate_impl};

use std::path::Path;

use crate::chart::Chart;
use crate::cli::Cli;
use crate::config::{ChartLoader, FileChartLoader};
use crate::output::print_chart_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_INVALID_CHART, Result, SmartChartError};

/// Exit code for a failed command: validation failures are the chart's
/// fault, everything else is a configuration or runtime error.
#[must_use]
pub const fn exit_code_for(error: &SmartChartError) -> i32 {
    if error.is_validation() {
        EXIT_INVALID_CHART
    } else {
        EXIT_CONFIG_ERROR
    }
}

/// Prints `error` and maps it to an exit code.
fn fail(error: &SmartChartError, cli: &Cli) -> i32 {
    print_chart_error(error, cli.color.into());
    exit_code_for(error)
}

fn load_chart(path: &Path) -> Result<Chart> {
    FileChartLoader::new().load(path)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
