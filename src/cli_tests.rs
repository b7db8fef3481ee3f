use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn cli_url_defaults() {
    let cli = Cli::parse_from(["smart-chart", "url", "chart.toml"]);
    match cli.command {
        Commands::Url(args) => {
            assert_eq!(args.file, PathBuf::from("chart.toml"));
            assert!(!args.no_encode);
            assert!(!args.no_validate);
            assert!(!args.html_safe);
        }
        _ => panic!("Expected Url command"),
    }
    assert_eq!(cli.verbose, 0);
    assert_eq!(cli.color, ColorChoice::Auto);
}

#[test]
fn cli_url_flags() {
    let cli = Cli::parse_from([
        "smart-chart",
        "url",
        "chart.json",
        "--no-encode",
        "--no-validate",
        "--html-safe",
    ]);
    match cli.command {
        Commands::Url(args) => {
            assert!(args.no_encode);
            assert!(args.no_validate);
            assert!(args.html_safe);
        }
        _ => panic!("Expected Url command"),
    }
}

#[test]
fn cli_html_attributes() {
    let cli = Cli::parse_from([
        "smart-chart",
        "html",
        "chart.toml",
        "--attr",
        "alt=Monthly sales",
        "--attr",
        "class=chart",
        "--embed",
    ]);
    match cli.command {
        Commands::Html(args) => {
            assert!(args.embed);
            assert_eq!(
                args.attributes,
                vec![
                    ("alt".to_string(), "Monthly sales".to_string()),
                    ("class".to_string(), "chart".to_string())
                ]
            );
        }
        _ => panic!("Expected Html command"),
    }
}

#[test]
fn cli_html_rejects_malformed_attribute() {
    assert!(Cli::try_parse_from(["smart-chart", "html", "c.toml", "--attr", "novalue"]).is_err());
}

#[test]
fn cli_fetch_requires_output() {
    assert!(Cli::try_parse_from(["smart-chart", "fetch", "c.toml"]).is_err());
    let cli = Cli::parse_from(["smart-chart", "fetch", "c.toml", "-o", "out.png"]);
    match cli.command {
        Commands::Fetch(args) => assert_eq!(args.output, PathBuf::from("out.png")),
        _ => panic!("Expected Fetch command"),
    }
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["smart-chart", "validate", "c.toml", "-vv", "--color", "never"]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.color, ColorChoice::Never);
    assert_eq!(ColorMode::from(cli.color), ColorMode::Never);
}

#[test]
fn parse_attribute_splits_on_first_equals() {
    assert_eq!(
        parse_attribute("data-x=a=b"),
        Ok(("data-x".to_string(), "a=b".to_string()))
    );
    assert_eq!(parse_attribute("alt="), Ok(("alt".to_string(), String::new())));
    assert!(parse_attribute("=x").is_err());
    assert!(parse_attribute("x").is_err());
}
