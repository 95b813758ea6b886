use std::path::PathBuf;

use crate::stats::StatsError;

/// Everything that can go wrong between reading the measurements and
/// showing the chart. None of these are recovered from; they abort
/// the run.
#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    /// Missing column, ragged rows, undecodable CSV
    #[error("data format error in {source_name}: {message}")]
    DataFormat {
        source_name: String,
        message: String,
    },

    #[error(
        "parse error in {source_name}: column {column:?}, data row {row}: \
         {value:?} is not a finite number"
    )]
    Parse {
        source_name: String,
        column: String,
        /// 1-based, not counting the header
        row: usize,
        value: String,
    },

    #[error(
        "configuration mismatch: {x_len} independent-variable values \
         but {y_len} dependent-variable values"
    )]
    ConfigurationMismatch { x_len: usize, y_len: usize },

    #[error("configuration x = {x} has no usable trials: {reason}")]
    NoTrials { x: f64, reason: StatsError },

    #[error("render error: {0}")]
    Render(String),

    #[error("unsupported output file {path:?}: the extension must be `png` or `svg`")]
    UnsupportedOutput { path: PathBuf },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not start the viewer {program:?}")]
    Viewer {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl ChartError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        ChartError::Io {
            context: context.into(),
            source,
        }
    }
}
