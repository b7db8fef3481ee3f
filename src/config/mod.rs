//! Chart definition files.
//!
//! A definition is a TOML (or JSON, by extension) document whose `type` key
//! names the shape and whose other keys are chart attributes:
//!
//! ```toml
//! type = "line"
//! width = 400
//! height = 200
//! data = [2, 1, 3, 4, 5, 9]
//! ```

mod filesystem;
mod loader;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ChartFormat, ChartLoader, FileChartLoader, TYPE_KEY, parse_chart};
