#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the smart-chart binary.
#[macro_export]
macro_rules! smart_chart {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("smart-chart"))
    };
}

/// A temporary directory holding chart definition files.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Writes `content` to `relative_path` and returns the full path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A valid bar chart.
pub const BAR_CHART: &str = r#"
type = "bar"
width = 300
height = 100
data = [1, 5]
title = "Q1 sales"
"#;

/// A line chart with two styled series.
pub const LINE_CHART: &str = r#"
type = "line"
width = 400
height = 200
data = [
    { values = [10, 0, 20, 30, 40, 80], color = "552255" },
    { values = [0, 50, 30, 70, 60, 40], color = "225522" },
]
"#;

/// A map whose width exceeds the map limit.
pub const OVERSIZED_MAP: &str = r#"
type = "map"
width = 500
height = 200
data = { US = 1, CA = 2 }
"#;

/// A pie chart with an attribute pies do not accept.
pub const PIE_WITH_GRID: &str = r#"
type = "pie"
width = 300
height = 150
data = { a = 1, b = 2 }
grid = { x = { every = 1 } }
"#;
