use slicer_scaffold::{FeatureName, LocationWarning, ScaffoldError, ScaffoldObserver, TemplateFile};
use std::path::Path;

/// Prints scaffolding progress to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver {
    quiet: bool,
}

impl ConsoleObserver {
    /// With `quiet` set only warnings and failures are printed.
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ScaffoldObserver for ConsoleObserver {
    fn location_mismatch(&self, warning: &LocationWarning) {
        println!("{warning}");
    }

    fn creating(&self, _feature: &FeatureName, file: TemplateFile, _path: &Path) {
        if !self.quiet {
            println!("creating {}...", file.file_name());
        }
    }

    fn feature_failed(&self, raw_name: &str, error: &ScaffoldError) {
        println!("Failed to create feature '{raw_name}': {error}");
    }
}
