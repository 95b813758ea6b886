//! Leveled diagnostics on stderr, each line prefixed with a local
//! RFC 3339 timestamp, the level and the source location.

use std::{
    io::{StderrLock, Write, stderr},
    sync::atomic::{AtomicU8, Ordering},
    time::SystemTime,
};

use anyhow::{Result, bail};
use chrono::{DateTime, Local};

pub fn system_time_to_rfc3339(t: SystemTime) -> String {
    let t: DateTime<Local> = DateTime::from(t);
    t.to_rfc3339()
}

/// Locks stderr and writes the line prefix; the caller writes the
/// message and the newline.
pub fn write_prefix(level: LogLevel, file: &str, line: u32) -> StderrLock<'static> {
    let t_str = system_time_to_rfc3339(SystemTime::now());
    let mut lock = stderr().lock();
    write!(&mut lock, "{t_str}\t{}\t{file}:{line}\t", level.tag()).expect("stderr must not fail");
    lock
}

#[doc(hidden)]
#[macro_export]
macro_rules! log_at {
    { $level:expr, $($arg:tt)* } => {
        if $crate::utillib::logging::log_level() >= $level {
            use std::io::Write;
            let mut lock = $crate::utillib::logging::write_prefix($level, file!(), line!());
            writeln!(&mut lock, $($arg)*).expect("stderr must not fail");
        }
    }
}

#[macro_export]
macro_rules! warn {
    { $($arg:tt)* } => {
        $crate::log_at!($crate::utillib::logging::LogLevel::Warn, $($arg)*)
    }
}

#[macro_export]
macro_rules! info {
    { $($arg:tt)* } => {
        $crate::log_at!($crate::utillib::logging::LogLevel::Info, $($arg)*)
    }
}

#[macro_export]
macro_rules! debug {
    { $($arg:tt)* } => {
        $crate::log_at!($crate::utillib::logging::LogLevel::Debug, $($arg)*)
    }
}

// Do *not* make the fields public here to force going through `TryFrom`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LogLevelOpt {
    /// Show what is being done (files read and written, viewer
    /// started)
    #[clap(short, long)]
    verbose: bool,

    /// Show information that helps debug this program, like the
    /// computed chart metadata (implies `--verbose`)
    #[clap(short, long)]
    debug: bool,

    /// Disable warnings. Conflicts with `--verbose` and `--debug`.
    #[clap(short, long)]
    quiet: bool,
}

impl TryFrom<LogLevelOpt> for LogLevel {
    type Error = anyhow::Error;

    fn try_from(value: LogLevelOpt) -> Result<Self> {
        let LogLevelOpt {
            verbose,
            debug,
            quiet,
        } = value;
        match (quiet, debug, verbose) {
            (true, false, false) => Ok(LogLevel::Quiet),
            (true, _, _) => {
                bail!("option `--quiet` conflicts with the options `--verbose` and `--debug`")
            }
            (false, true, _) => Ok(LogLevel::Debug),
            (false, false, true) => Ok(LogLevel::Info),
            (false, false, false) => Ok(LogLevel::Warn),
        }
    }
}

/// Ordered from least to most output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    /// Do not log anything
    Quiet = 0,
    /// The default, only `warn!` statements output anything
    Warn = 1,
    /// Tell the user what is going on
    Info = 2,
    /// For debugging this program
    Debug = 3,
}

impl LogLevel {
    fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(LogLevel::Quiet),
            1 => Some(LogLevel::Warn),
            2 => Some(LogLevel::Info),
            3 => Some(LogLevel::Debug),
            _ => None,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            LogLevel::Quiet => "",
            LogLevel::Warn => "W",
            LogLevel::Info => "I",
            LogLevel::Debug => "D",
        }
    }
}

static LOGLEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warn as u8);

pub fn set_log_level(val: LogLevel) {
    LOGLEVEL.store(val as u8, Ordering::Relaxed);
}

#[inline]
pub fn log_level() -> LogLevel {
    let level = LOGLEVEL.load(Ordering::Relaxed);
    LogLevel::from_level(level).expect("only valid levels are ever stored")
}
