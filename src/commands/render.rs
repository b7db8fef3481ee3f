use std::io::Write;

use crate::chart::{Chart, RenderOptions};
use crate::cli::{Cli, HtmlArgs, UrlArgs};
use crate::fetch::{HttpClient, ReqwestClient, embedded_html};
use crate::query::Separator;
use crate::{EXIT_SUCCESS, Result};

use super::{fail, load_chart};

#[must_use]
pub fn run_url(args: &UrlArgs, cli: &Cli) -> i32 {
    let result = load_chart(&args.file)
        .and_then(|chart| run_url_impl(&chart, args, &mut std::io::stdout().lock()));
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => fail(&e, cli),
    }
}

/// Writes the chart URL followed by a newline.
///
/// # Errors
/// Returns validation errors unless `--no-validate` was given, and write errors.
pub fn run_url_impl(chart: &Chart, args: &UrlArgs, out: &mut impl Write) -> Result<()> {
    let options = RenderOptions {
        encode: !args.no_encode,
        validate: !args.no_validate,
        separator: if args.html_safe {
            Separator::HtmlAmpersand
        } else {
            Separator::Ampersand
        },
    };
    writeln!(out, "{}", chart.url(&options)?)?;
    Ok(())
}

#[must_use]
pub fn run_html(args: &HtmlArgs, cli: &Cli) -> i32 {
    let result = load_chart(&args.file).and_then(|chart| {
        run_html_impl(&chart, args, &ReqwestClient, &mut std::io::stdout().lock())
    });
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => fail(&e, cli),
    }
}

/// Writes an `<img>` tag: with an `&amp;`-separated URL, or with the
/// fetched image inlined when `--embed` is given.
///
/// # Errors
/// Returns validation, fetch and write errors.
pub fn run_html_impl(
    chart: &Chart,
    args: &HtmlArgs,
    client: &impl HttpClient,
    out: &mut impl Write,
) -> Result<()> {
    let attributes: Vec<(&str, &str)> = args
        .attributes
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let html = if args.embed {
        embedded_html(chart, client, &attributes)?
    } else {
        chart.to_html(&RenderOptions::html(), &attributes)?
    };
    writeln!(out, "{html}")?;
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
