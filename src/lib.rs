//! Render charts from crawler benchmark measurements: load a CSV
//! file or embedded trial values, average repeated trials, draw a
//! line chart, save it and hand it to a viewer.

pub mod chart;
pub mod config_file;
pub mod error;
pub mod get_terminal_width;
pub mod io_utils;
pub mod job;
pub mod presets;
pub mod sample_table;
pub mod series;
pub mod stats;
pub mod trials;
pub mod utillib;

pub const CRAWLBENCH_VERSION: &str = env!("CARGO_PKG_VERSION");
