use std::fs;

use crate::chart::Chart;
use crate::cli::{Cli, FetchArgs};
use crate::fetch::{HttpClient, ReqwestClient, fetch_image_with_client};
use crate::{EXIT_SUCCESS, Result};

use super::{fail, load_chart};

#[must_use]
pub fn run_fetch(args: &FetchArgs, cli: &Cli) -> i32 {
    let result =
        load_chart(&args.file).and_then(|chart| run_fetch_impl(&chart, args, &ReqwestClient));
    match result {
        Ok(bytes) => {
            if !cli.quiet {
                println!("Wrote {bytes} bytes to {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => fail(&e, cli),
    }
}

/// Downloads the chart image into `args.output`, returning its size.
///
/// # Errors
/// Returns validation, fetch and file write errors.
pub fn run_fetch_impl(chart: &Chart, args: &FetchArgs, client: &impl HttpClient) -> Result<usize> {
    let image = fetch_image_with_client(chart, client)?;
    fs::write(&args.output, &image)?;
    Ok(image.len())
}
