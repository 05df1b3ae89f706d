//! # CLI Argument Definitions
//!
//! Command-line interface of the `slicer` binary, defined with `clap`.

use clap::{ArgAction, Parser, ValueEnum};
use slicer_logger::{LevelFilter, Rotation};
use std::ffi::OsString;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "slicer")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scaffold vertical-slice feature directories (mod.rs, cli.rs, handler.rs)")]
#[command(
    long_about = "Creates one directory per feature name in the current directory, each holding \
                  empty mod.rs, cli.rs and handler.rs files. Existing directories and files are \
                  left untouched. Run it from inside your `features` directory."
)]
pub struct Cli {
    /// Names of the features to create
    #[arg(value_name = "FEATURE", value_parser = clap::value_parser!(OsString))]
    pub names: Vec<OsString>,

    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print warnings and failures
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write rolling log files into this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// How often log files are rotated
    #[arg(long, value_enum, default_value_t = LogRotation::Daily, requires = "log_dir")]
    pub log_rotation: LogRotation,

    /// How many rotated log files to keep
    #[arg(long, value_name = "N", default_value_t = 7, requires = "log_dir")]
    pub log_keep: usize,
}

/// Rotation schedule for `--log-dir` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(value: LogRotation) -> Self {
        match value {
            LogRotation::Hourly => Self::HOURLY,
            LogRotation::Daily => Self::DAILY,
            LogRotation::Never => Self::NEVER,
        }
    }
}

impl Cli {
    /// Maps `-v` occurrences onto a default log level; `RUST_LOG` still wins.
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::ERROR,
            1 => LevelFilter::WARN,
            2 => LevelFilter::INFO,
            3 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
