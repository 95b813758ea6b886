//! A chart job: where the measurements come from and how the chart
//! is labelled. Running a job is the whole program: load, aggregate,
//! render, save, show.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    chart::{
        ChartLabels, ChartMetadata, DEFAULT_OUTPUT_FILE, DEFAULT_SIZE, render::render_chart,
        viewer::Viewer,
    },
    error::ChartError,
    info,
    sample_table::SampleTable,
    series::Series,
    trials::TrialsData,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum DataSource {
    /// A CSV file with a header row; relative paths are taken from
    /// the current working directory
    Csv {
        path: PathBuf,
        /// Column with the independent variable, e.g. "Threads"
        x_column: String,
        /// Column with the dependent variable, e.g.
        /// "AverageExecutionTime"
        y_column: String,
    },
    /// Embedded trial timings, averaged per configuration
    Trials(TrialsData),
}

impl DataSource {
    pub fn load(&self) -> Result<Series, ChartError> {
        match self {
            DataSource::Csv {
                path,
                x_column,
                y_column,
            } => SampleTable::read_file(path)?.series(x_column, y_column),
            DataSource::Trials(trials) => trials.aggregate(),
        }
    }
}

fn default_output() -> PathBuf {
    DEFAULT_OUTPUT_FILE.into()
}

fn default_size() -> (u32, u32) {
    DEFAULT_SIZE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartJob {
    pub source: DataSource,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// When given, a legend with this entry is drawn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_label: Option<String>,
    /// Image path, `.png` or `.svg`
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Width and height in pixels
    #[serde(default = "default_size")]
    pub size: (u32, u32),
}

/// What a run may change about a job without editing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOpts {
    pub output: Option<PathBuf>,
    pub viewer: Viewer,
}

impl Default for RunOpts {
    fn default() -> Self {
        RunOpts {
            output: None,
            viewer: Viewer::SystemDefault,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub series: Series,
    pub metadata: ChartMetadata,
    pub output: PathBuf,
}

impl ChartJob {
    pub fn labels(&self) -> ChartLabels {
        ChartLabels {
            title: self.title.clone(),
            x_label: self.x_label.clone(),
            y_label: self.y_label.clone(),
            series_label: self.series_label.clone(),
        }
    }

    pub fn output_path<'s>(&'s self, opts: &'s RunOpts) -> &'s Path {
        opts.output.as_deref().unwrap_or(&self.output)
    }
}

/// Load, render, save, show. Loading happens completely before the
/// output file is touched.
pub fn run(job: &ChartJob, opts: &RunOpts) -> Result<RunOutcome, ChartError> {
    let series = job.source.load()?;
    info!("loaded {} points for {:?}", series.len(), job.title);
    let output = job.output_path(opts);
    let metadata = render_chart(series.xs(), series.ys(), &job.labels(), job.size, output)?;
    opts.viewer.show(output)?;
    Ok(RunOutcome {
        series,
        metadata,
        output: output.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use crate::config_file::ConfigBackend;

    use super::*;

    #[test]
    fn t_job_defaults_from_json5() {
        let job: ChartJob = ConfigBackend::Json5
            .from_str_as(
                r#"{
                    source: { Csv: { path: "crawler_results_links.csv",
                                     x_column: "Links",
                                     y_column: "AverageExecutionTime" } },
                    title: "Web Crawler Performance with 24 Threads",
                    x_label: "Number of Links",
                    y_label: "Average Execution Time (seconds)",
                }"#,
            )
            .unwrap();
        assert_eq!(job.output, Path::new(DEFAULT_OUTPUT_FILE));
        assert_eq!(job.size, (1000, 600));
        assert_eq!(job.series_label, None);
        assert_eq!(
            job.output_path(&RunOpts::default()),
            Path::new(DEFAULT_OUTPUT_FILE)
        );
        let opts = RunOpts {
            output: Some("links.svg".into()),
            viewer: Viewer::Disabled,
        };
        assert_eq!(job.output_path(&opts), Path::new("links.svg"));
    }

    #[test]
    fn t_trials_job_roundtrip() -> anyhow::Result<()> {
        let job = ChartJob {
            source: DataSource::Trials(TrialsData {
                x: vec![1., 2.],
                trials: vec![vec![77.97, 82.46, 74.68], vec![36.25, 44.12, 36.65]],
            }),
            title: "Effect of Thread Count on Web Crawling Performance".into(),
            x_label: "Number of Threads".into(),
            y_label: "Time Taken (seconds)".into(),
            series_label: Some("Time taken".into()),
            output: "trials.svg".into(),
            size: (800, 480),
        };
        for backend in [ConfigBackend::Json5, ConfigBackend::Ron, ConfigBackend::Yaml] {
            let s = backend.to_string_as(&job)?;
            let back: ChartJob = backend.from_str_as(&s)?;
            assert_eq!(back, job, "{backend:?}: {s}");
        }
        let series = job.source.load()?;
        assert_eq!(series.xs(), [1., 2.]);
        Ok(())
    }

    #[test]
    fn t_unknown_field_rejected() {
        let r: anyhow::Result<ChartJob> = ConfigBackend::Json5.from_str_as(
            r#"{ source: { Trials: { x: [1], trials: [[1]] } },
                 title: "t", x_label: "x", y_label: "y", colour: "red" }"#,
        );
        assert!(r.is_err());
    }
}
