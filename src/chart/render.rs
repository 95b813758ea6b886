//! Drawing with `plotters`: a blue line through the points, a marker
//! on each point, mesh gridlines, title and axis descriptions.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use plotters::{coord::Shift, prelude::*};

use crate::{
    chart::{ChartLabels, ChartMetadata, chart_metadata},
    debug,
    error::ChartError,
    info,
    io_utils::temporary_file::TemporaryFile,
};

const TITLE_FONT_SIZE: u32 = 28;
const AXIS_DESC_FONT_SIZE: u32 = 18;
const TICK_LABEL_FONT_SIZE: u32 = 14;
const LINE_WIDTH: u32 = 2;
const MARKER_RADIUS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self, ChartError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Ok(ImageFormat::Png),
            Some("svg") => Ok(ImageFormat::Svg),
            _ => Err(ChartError::UnsupportedOutput { path: path.into() }),
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    points: &[(f64, f64)],
    metadata: &ChartMetadata,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let ChartMetadata {
        labels:
            ChartLabels {
                title,
                x_label,
                y_label,
                series_label,
            },
        x_range,
        y_range,
        size: _,
        point_count: _,
    } = metadata;

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", TITLE_FONT_SIZE).into_font())
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(75)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(x_label.as_str())
        .y_desc(y_label.as_str())
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_DESC_FONT_SIZE))
        .draw()?;

    let line = chart.draw_series(LineSeries::new(
        points.iter().copied(),
        BLUE.stroke_width(LINE_WIDTH),
    ))?;
    if let Some(series_label) = series_label {
        line.label(series_label.as_str()).legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(LINE_WIDTH))
        });
    }

    chart.draw_series(
        points
            .iter()
            .map(|point| Circle::new(*point, MARKER_RADIUS, BLUE.filled())),
    )?;

    if series_label.is_some() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Where the image is drawn before being renamed to `output`: same
/// directory, so that the rename does not cross file systems.
fn temporary_path(output: &Path, format: ImageFormat) -> Result<PathBuf, ChartError> {
    let file_name = output
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ChartError::UnsupportedOutput {
            path: output.into(),
        })?;
    Ok(output.with_file_name(format!(
        ".{file_name}.{}.tmp.{}",
        std::process::id(),
        format.extension()
    )))
}

/// Draw `xs`/`ys` and write the image to `output`, replacing an
/// existing file. The format follows the extension of `output`. On
/// error, `output` is left untouched.
pub fn render_chart(
    xs: &[f64],
    ys: &[f64],
    labels: &ChartLabels,
    size: (u32, u32),
    output: &Path,
) -> Result<ChartMetadata, ChartError> {
    let metadata = chart_metadata(xs, ys, labels, size)?;
    debug!("chart metadata: {metadata:?}");
    let format = ImageFormat::from_path(output)?;

    let tmp_path = temporary_path(output, format)?;
    File::create(&tmp_path).map_err(|e| {
        ChartError::io(format!("output location {output:?} is not writable"), e)
    })?;
    let tmp = TemporaryFile::from(tmp_path);

    let points: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
    match format {
        ImageFormat::Png => {
            let root = BitMapBackend::new(tmp.path(), size).into_drawing_area();
            draw(&root, &points, &metadata).map_err(|e| ChartError::Render(e.to_string()))?;
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(tmp.path(), size).into_drawing_area();
            draw(&root, &points, &metadata).map_err(|e| ChartError::Render(e.to_string()))?;
        }
    }

    tmp.persist(output)
        .map_err(|e| ChartError::io(format!("moving the chart to {output:?}"), e))?;
    info!("wrote chart with {} points to {output:?}", metadata.point_count);
    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> ChartLabels {
        ChartLabels {
            title: "Web Crawler Performance with 24 Threads".into(),
            x_label: "Number of Links".into(),
            y_label: "Average Execution Time (seconds)".into(),
            series_label: None,
        }
    }

    #[test]
    fn t_format_from_path() {
        assert_eq!(
            ImageFormat::from_path(Path::new("performance_over_thread_count.png")).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(
            ImageFormat::from_path(Path::new("out/chart.SVG")).unwrap(),
            ImageFormat::Svg
        );
        assert!(matches!(
            ImageFormat::from_path(Path::new("chart.pdf")),
            Err(ChartError::UnsupportedOutput { .. })
        ));
        assert!(ImageFormat::from_path(Path::new("chart")).is_err());
    }

    #[test]
    fn t_temporary_path_is_sibling() {
        let p = temporary_path(Path::new("out/chart.png"), ImageFormat::Png).unwrap();
        assert_eq!(p.parent(), Some(Path::new("out")));
        assert_eq!(p.extension().and_then(|e| e.to_str()), Some("png"));
        assert_ne!(p, Path::new("out/chart.png"));
    }

    #[test]
    fn t_length_mismatch_is_render_error() {
        let out = std::env::temp_dir().join(format!(
            "crawlbench-{}-mismatch.png",
            std::process::id()
        ));
        let r = render_chart(&[1., 2.], &[3.], &labels(), (1000, 600), &out);
        assert!(matches!(r, Err(ChartError::Render(_))));
        assert!(!out.exists());
    }

    #[test]
    fn t_unwritable_output_is_io_error() {
        let out = Path::new("/nonexistent-crawlbench-dir/chart.png");
        let r = render_chart(&[1.], &[3.], &labels(), (1000, 600), out);
        assert!(matches!(r, Err(ChartError::Io { .. })));
    }

    /// Drawing text needs a system font; without one, rendering can
    /// only fail.
    fn have_font() -> bool {
        ("sans-serif", TICK_LABEL_FONT_SIZE)
            .into_font()
            .box_size("0")
            .is_ok()
    }

    #[test]
    fn t_overflowing_range_is_render_error() {
        let out = std::env::temp_dir().join(format!(
            "crawlbench-{}-overflow.png",
            std::process::id()
        ));
        let r = render_chart(&[1.79e308], &[1.], &labels(), (1000, 600), &out);
        assert!(matches!(r, Err(ChartError::Render(_))));
        assert!(!out.exists());
    }

    #[test]
    fn t_render_png_and_svg() {
        if !have_font() {
            eprintln!("no sans-serif font available, skipping t_render_png_and_svg");
            return;
        }
        for ext in ["png", "svg"] {
            let out = std::env::temp_dir().join(format!(
                "crawlbench-{}-render.{ext}",
                std::process::id()
            ));
            let _cleanup = TemporaryFile::from(out.clone());
            let m = render_chart(&[1., 2., 3.], &[78.4, 39.0, 25.5], &labels(), (1000, 600), &out)
                .unwrap();
            assert_eq!(m.point_count, 3);
            let first_len = std::fs::metadata(&out).unwrap().len();
            assert!(first_len > 0);
            // Overwritten silently
            let m = render_chart(&[500.], &[12.], &labels(), (1000, 600), &out).unwrap();
            assert_eq!(m.point_count, 1);
            assert!(std::fs::metadata(&out).unwrap().len() > 0);
            let tmp = temporary_path(&out, ImageFormat::from_path(&out).unwrap()).unwrap();
            assert!(!tmp.exists());
        }
    }
}
