use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use crawlbench::{
    CRAWLBENCH_VERSION,
    chart::viewer::Viewer,
    config_file::{load_config_file, save_config_file},
    get_terminal_width::get_terminal_width,
    info,
    job::{ChartJob, RunOpts, run},
    presets::Preset,
    utillib::logging::{LogLevelOpt, set_log_level},
};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const PROGRAM_NAME: &str = "crawlbench";

#[derive(clap::Parser, Debug)]
#[command(
    next_line_help = true,
    term_width = get_terminal_width(4),
    bin_name = PROGRAM_NAME,
)]
/// Plot web crawler benchmark results: execution time against thread
/// or link count.
struct Opts {
    #[clap(flatten)]
    log_level: LogLevelOpt,

    /// The subcommand to run. Use `--help` after the sub-command to
    /// get a list of the allowed options there.
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct RenderOpts {
    /// Write the chart here instead of the job's output path
    /// (`performance_over_thread_count.png` for the built-in charts).
    /// The extension selects the format, `png` or `svg`.
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Only save the chart, do not open it in a viewer
    #[clap(long)]
    no_show: bool,

    /// The program to show the chart with (it gets the image path as
    /// its argument, and is waited for). By default, the system's
    /// viewer for the file type is used; on Linux that is `xdg-open`,
    /// which often returns right away. Give a viewer that stays in the
    /// foreground, e.g. `eog` or `feh`, to wait until the chart is
    /// closed.
    #[clap(long, conflicts_with = "no_show")]
    viewer: Option<String>,
}

impl From<RenderOpts> for RunOpts {
    fn from(value: RenderOpts) -> Self {
        let RenderOpts {
            output,
            no_show,
            viewer,
        } = value;
        let viewer = match (no_show, viewer) {
            (true, _) => Viewer::Disabled,
            (false, Some(program)) => Viewer::Program(program),
            (false, None) => Viewer::SystemDefault,
        };
        RunOpts { output, viewer }
    }
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print version
    Version,

    /// Average execution time for crawling 500 links, against the
    /// number of threads, from `crawler_results_1-26_500.csv`
    Threads {
        #[clap(flatten)]
        render_opts: RenderOpts,
    },

    /// Average execution time with 24 threads, against the number of
    /// links, from `crawler_results_links.csv`
    Links {
        #[clap(flatten)]
        render_opts: RenderOpts,
    },

    /// Time taken against the number of threads, from the built-in
    /// trial measurements (mean of the trials per thread count)
    Trials {
        #[clap(flatten)]
        render_opts: RenderOpts,
    },

    /// Run a chart job described in a config file (.json5, .json,
    /// .ron, .yml or .yaml); see `export-preset` for examples
    Job {
        #[clap(flatten)]
        render_opts: RenderOpts,

        /// Path to the job file
        path: PathBuf,
    },

    /// List the built-in charts
    Presets,

    /// Write a built-in chart as a job file, as a starting point for
    /// custom charts
    ExportPreset {
        /// threads, links or trials
        preset: Preset,

        /// Where to write the job file; the extension selects the
        /// format
        path: PathBuf,
    },
}

fn run_job(job: &ChartJob, render_opts: RenderOpts) -> Result<()> {
    let opts: RunOpts = render_opts.into();
    let outcome = run(job, &opts)?;
    info!(
        "done: {} points, x in {:?}, y in {:?}, saved to {:?}",
        outcome.metadata.point_count,
        outcome.metadata.x_range,
        outcome.metadata.y_range,
        outcome.output
    );
    Ok(())
}

fn main() -> Result<()> {
    let Opts {
        log_level,
        command,
    } = Opts::parse();

    set_log_level(log_level.try_into()?);

    match command {
        Command::Version => println!("{PROGRAM_NAME} version {CRAWLBENCH_VERSION}"),

        Command::Threads { render_opts } => run_job(&Preset::Threads.job(), render_opts)?,
        Command::Links { render_opts } => run_job(&Preset::Links.job(), render_opts)?,
        Command::Trials { render_opts } => run_job(&Preset::Trials.job(), render_opts)?,

        Command::Job { render_opts, path } => {
            let job: ChartJob = load_config_file(&path)?;
            run_job(&job, render_opts)?
        }

        Command::Presets => {
            for preset in Preset::all() {
                println!("{}\t{}", preset.name(), preset.job().title);
            }
        }

        Command::ExportPreset { preset, path } => {
            save_config_file(&path, &preset.job())
                .map_err(|e| anyhow!("exporting preset {:?}: {e:#}", preset.name()))?;
            info!("wrote preset {:?} to {path:?}", preset.name());
        }
    }

    Ok(())
}
