#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stdout, clippy::print_stderr)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::features;
use crate::models::args::Cli;

use anyhow::Result;
use clap::Parser;
use slicer_logger::{Logger, LoggerErrorExt};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(cli.log_level());
    let _logger = match &cli.log_dir {
        Some(dir) => builder
            .path(dir)
            .rotation(cli.log_rotation.into())
            .max_files(cli.log_keep)
            .init()
            .context(format!("--log-dir {}", dir.display()))?,
        None => builder.init()?,
    };

    features::create_features(&cli.names, cli.quiet)
}
