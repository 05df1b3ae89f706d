use crate::services::console::ConsoleObserver;
use anyhow::Result;
use slicer_scaffold::{BatchReport, Scaffolder};
use std::ffi::OsString;
use std::process::ExitCode;

pub const USAGE_HINT: &str = "Pass a feature name to this tool (see `slicer --help`).";

/// Scaffolds every feature in `names` under the working directory.
///
/// # Result
/// Returns [`ExitCode::SUCCESS`] when every feature was created (or nothing was
/// requested) and [`ExitCode::FAILURE`] when at least one feature failed. Failing
/// names never stop the remaining ones.
///
/// # Errors
/// Returns an error if the working directory cannot be determined.
pub fn create_features(names: &[OsString], quiet: bool) -> Result<ExitCode> {
    if names.is_empty() {
        println!("{USAGE_HINT}");
        return Ok(ExitCode::SUCCESS);
    }

    let scaffolder = Scaffolder::current_dir()?.with_observer(ConsoleObserver::new(quiet));
    tracing::debug!(
        root = %scaffolder.root().display(),
        count = names.len(),
        "Scaffolding features"
    );
    let report = scaffolder.create_all(names);

    Ok(summarize(&report, quiet))
}

fn summarize(report: &BatchReport, quiet: bool) -> ExitCode {
    if !quiet {
        for feature in report.succeeded() {
            if feature.is_unchanged() {
                println!("✅ Feature '{}' already up to date", feature.name);
            } else {
                println!("✅ Created feature '{}' in '{}'", feature.name, feature.directory.display());
            }
        }
    }

    let failed = report.failures().count();
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        println!("❌ {failed} of {} feature(s) failed", report.len());
        ExitCode::FAILURE
    }
}
