use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "smart-chart")]
#[command(author, version, about = "Build chart image URLs from chart definition files")]
#[command(long_about = "Turns TOML or JSON chart definitions into chart service URLs, \
    <img> tags or downloaded images.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Chart failed validation\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the chart URL
    Url(UrlArgs),

    /// Print an <img> tag for the chart
    Html(HtmlArgs),

    /// Check a chart definition against every validation
    Validate(ValidateArgs),

    /// Download the rendered chart image
    Fetch(FetchArgs),
}

#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Chart definition file (TOML, or JSON with a .json extension)
    pub file: PathBuf,

    /// Print parameter values without percent-encoding
    #[arg(long)]
    pub no_encode: bool,

    /// Skip validation
    #[arg(long)]
    pub no_validate: bool,

    /// Join parameters with &amp; for use inside HTML
    #[arg(long)]
    pub html_safe: bool,
}

#[derive(Args, Debug)]
pub struct HtmlArgs {
    /// Chart definition file
    pub file: PathBuf,

    /// Fetch the image and inline it as a data URI
    #[arg(long)]
    pub embed: bool,

    /// Extra tag attribute (repeatable), e.g. --attr alt=Sales
    #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_attribute)]
    pub attributes: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Chart definition file
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Chart definition file
    pub file: PathBuf,

    /// Where to write the PNG image
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Parses `key=value`.
///
/// # Errors
/// Returns a message when `=` is missing or the key is empty.
pub fn parse_attribute(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
