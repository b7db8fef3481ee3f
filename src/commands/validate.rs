use std::io::Write;
use std::path::Path;

use crate::cli::{Cli, ValidateArgs};
use crate::output::ErrorOutput;
use crate::{EXIT_SUCCESS, Result};

use super::{fail, load_chart};

#[must_use]
pub fn run_validate(args: &ValidateArgs, cli: &Cli) -> i32 {
    let output = ErrorOutput::new(cli.color.into());
    let mut stdout = std::io::stdout().lock();
    match run_validate_impl(&args.file, &output, cli.quiet, &mut stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => fail(&e, cli),
    }
}

/// Loads and validates the chart in `path`, reporting success on `out`.
///
/// # Errors
/// Returns load errors and the first validation failure.
pub fn run_validate_impl(
    path: &Path,
    output: &ErrorOutput,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let chart = load_chart(path)?;
    chart.validate()?;
    if !quiet {
        output.write_success(
            out,
            &format!("{} is a valid {} chart", path.display(), chart.shape().key()),
        );
    }
    Ok(())
}
