//! The three built-in charts. Each is just a [`ChartJob`]; running
//! one without options reproduces the original benchmark plots,
//! including the shared output file name.

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::{
    chart::{DEFAULT_OUTPUT_FILE, DEFAULT_SIZE},
    job::{ChartJob, DataSource},
    trials::TrialsData,
};

const AVERAGE_EXECUTION_TIME: &str = "AverageExecutionTime";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab_case")]
pub enum Preset {
    /// Average crawl time of 500 links against thread count, from
    /// `crawler_results_1-26_500.csv`
    Threads,
    /// Average crawl time with 24 threads against link count, from
    /// `crawler_results_links.csv`
    Links,
    /// Embedded trial timings against thread count
    Trials,
}

/// Thread counts of the embedded measurements.
const TRIAL_THREAD_COUNTS: [f64; 15] = [
    1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 20., 26., 30.,
];

/// Seconds per trial, one slice per entry of `TRIAL_THREAD_COUNTS`.
/// The third run for 12 threads is missing, and 26 and 30 threads
/// were measured once.
const TRIAL_TIMES: [&[f64]; 15] = [
    &[77.9711, 82.4579, 74.6788],
    &[36.2507, 44.1183, 36.6512],
    &[26.2699, 25.924, 24.2386],
    &[18.7436, 19.3316, 20.266],
    &[16.1017, 16.5613, 15.5087],
    &[13.1539, 13.8555, 13.9808],
    &[12.235, 11.4089, 11.8179],
    &[11.4152, 11.5848, 10.5358],
    &[9.41789, 9.48107, 9.35198],
    &[9.24799, 8.71289, 8.5526],
    &[8.40758, 8.75149, 8.63837],
    &[7.9138, 8.39428],
    &[5.83298, 7.07914, 8.91058],
    &[8.20441],
    &[8.10531],
];

pub fn embedded_trials() -> TrialsData {
    TrialsData {
        x: TRIAL_THREAD_COUNTS.to_vec(),
        trials: TRIAL_TIMES.iter().map(|t| t.to_vec()).collect(),
    }
}

impl Preset {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = Preset> {
        Preset::iter()
    }

    pub fn job(self) -> ChartJob {
        let csv = |path: &str, x_column: &str| DataSource::Csv {
            path: path.into(),
            x_column: x_column.into(),
            y_column: AVERAGE_EXECUTION_TIME.into(),
        };
        let (source, title, x_label, y_label, series_label) = match self {
            Preset::Threads => (
                csv("crawler_results_1-26_500.csv", "Threads"),
                "Web Crawler Performance Over Thread Count to Crawl 500 Links",
                "Number of Threads",
                "Average Execution Time (seconds)",
                None,
            ),
            Preset::Links => (
                csv("crawler_results_links.csv", "Links"),
                "Web Crawler Performance with 24 Threads",
                "Number of Links",
                "Average Execution Time (seconds)",
                None,
            ),
            Preset::Trials => (
                DataSource::Trials(embedded_trials()),
                "Effect of Thread Count on Web Crawling Performance",
                "Number of Threads",
                "Time Taken (seconds)",
                Some("Time taken"),
            ),
        };
        ChartJob {
            source,
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series_label: series_label.map(String::from),
            output: DEFAULT_OUTPUT_FILE.into(),
            size: DEFAULT_SIZE,
        }
    }
}
