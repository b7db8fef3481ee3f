use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::cli::FetchArgs;
use crate::fetch::HttpClient;
use crate::output::ErrorOutput;

struct StaticClient(&'static [u8]);

impl HttpClient for StaticClient {
    fn post_form(&self, _url: &str, _body: String) -> Result<Vec<u8>> {
        Ok(self.0.to_vec())
    }
}

fn write_chart(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const VALID: &str = "type = \"line\"\nwidth = 400\nheight = 200\ndata = [1, 2, 3]\n";

#[test]
fn exit_codes_by_category() {
    assert_eq!(
        exit_code_for(&SmartChartError::Dimensions("too big".to_string())),
        EXIT_INVALID_CHART
    );
    assert_eq!(
        exit_code_for(&SmartChartError::Config("bad".to_string())),
        EXIT_CONFIG_ERROR
    );
    assert_eq!(
        exit_code_for(&SmartChartError::Fetch("down".to_string())),
        EXIT_CONFIG_ERROR
    );
}

#[test]
fn validate_reports_success() {
    let dir = TempDir::new().unwrap();
    let path = write_chart(&dir, "line.toml", VALID);
    let mut out = Vec::new();
    run_validate_impl(&path, &ErrorOutput::with_colors(false), false, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("✔ "));
    assert!(text.contains("is a valid line chart"));
}

#[test]
fn validate_quiet_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let path = write_chart(&dir, "line.toml", VALID);
    let mut out = Vec::new();
    run_validate_impl(&path, &ErrorOutput::with_colors(false), true, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn validate_returns_validation_error() {
    let dir = TempDir::new().unwrap();
    let path = write_chart(
        &dir,
        "big.toml",
        "type = \"line\"\nwidth = 800\nheight = 600\ndata = [1, 2]\n",
    );
    let mut out = Vec::new();
    let err =
        run_validate_impl(&path, &ErrorOutput::with_colors(false), false, &mut out).unwrap_err();
    assert_eq!(exit_code_for(&err), EXIT_INVALID_CHART);
}

#[test]
fn fetch_writes_image_file() {
    let dir = TempDir::new().unwrap();
    let path = write_chart(&dir, "line.toml", VALID);
    let output = dir.path().join("chart.png");
    let args = FetchArgs {
        file: path.clone(),
        output: output.clone(),
    };
    let chart = load_chart(&path).unwrap();

    let written = run_fetch_impl(&chart, &args, &StaticClient(b"\x89PNG")).unwrap();

    assert_eq!(written, 4);
    assert_eq!(fs::read(&output).unwrap(), b"\x89PNG");
}
