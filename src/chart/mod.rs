//! Chart description, drawing and display.
//!
//! [`ChartMetadata`] is everything about a chart that does not depend
//! on the drawing backend: labels, axis ranges and size. It is
//! computed from the data alone, so rendering the same data twice
//! describes the same chart, even though the image file is simply
//! overwritten.

pub mod render;
pub mod viewer;

use std::ops::Range;

use crate::error::ChartError;

/// Figure of 10 by 6 inches at 100 dpi.
pub const DEFAULT_SIZE: (u32, u32) = (1000, 600);

pub const DEFAULT_OUTPUT_FILE: &str = "performance_over_thread_count.png";

/// Fraction of the data span added as margin on both sides of an
/// axis.
const AXIS_MARGIN: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// When given, a legend with this entry is drawn
    pub series_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartMetadata {
    pub labels: ChartLabels,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub size: (u32, u32),
    pub point_count: usize,
}

/// `vals` must be non-empty and finite. Fails when the padded range
/// does not fit into f64.
fn axis_range(axis: &str, vals: &[f64]) -> Result<Range<f64>, ChartError> {
    let (min, max) = vals
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });
    let span = max - min;
    let pad = if span > 0. {
        span * AXIS_MARGIN
    } else if min != 0. {
        min.abs() * AXIS_MARGIN
    } else {
        0.5
    };
    let range = (min - pad)..(max + pad);
    if !(range.start.is_finite() && range.end.is_finite()) {
        return Err(ChartError::Render(format!(
            "{axis} values from {min} to {max} are too large to draw"
        )));
    }
    Ok(range)
}

/// Checks that the two sequences can be drawn as one line: same
/// length, at least one point, finite values.
pub fn chart_metadata(
    xs: &[f64],
    ys: &[f64],
    labels: &ChartLabels,
    size: (u32, u32),
) -> Result<ChartMetadata, ChartError> {
    if xs.len() != ys.len() {
        return Err(ChartError::Render(format!(
            "got {} x values but {} y values",
            xs.len(),
            ys.len()
        )));
    }
    if xs.is_empty() {
        return Err(ChartError::Render("no data points to draw".into()));
    }
    if let Some(v) = xs.iter().chain(ys).find(|v| !v.is_finite()) {
        return Err(ChartError::Render(format!("cannot draw non-finite value {v}")));
    }
    let (width, height) = size;
    if width == 0 || height == 0 {
        return Err(ChartError::Render(format!("invalid chart size {width}x{height}")));
    }
    Ok(ChartMetadata {
        labels: labels.clone(),
        x_range: axis_range("x", xs)?,
        y_range: axis_range("y", ys)?,
        size,
        point_count: xs.len(),
    })
}
