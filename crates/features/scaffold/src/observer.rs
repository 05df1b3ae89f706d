use crate::error::ScaffoldError;
use crate::location::LocationWarning;
use crate::name::FeatureName;
use crate::template::TemplateFile;
use std::path::Path;

/// Receives progress notifications from a [`Scaffolder`](crate::Scaffolder).
///
/// Lets a front end decide how to present progress (plain stdout, a TUI, nothing
/// at all) without the scaffolding logic knowing about it. Every method defaults
/// to a no-op.
pub trait ScaffoldObserver {
    /// The base directory is not named `features`.
    fn location_mismatch(&self, _warning: &LocationWarning) {}

    /// Called right before `file` is created at `path`.
    fn creating(&self, _feature: &FeatureName, _file: TemplateFile, _path: &Path) {}

    /// A feature from a batch failed; the batch continues.
    fn feature_failed(&self, _raw_name: &str, _error: &ScaffoldError) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScaffoldObserver for NoopObserver {}

impl<O: ScaffoldObserver + ?Sized> ScaffoldObserver for &O {
    fn location_mismatch(&self, warning: &LocationWarning) {
        (**self).location_mismatch(warning);
    }

    fn creating(&self, feature: &FeatureName, file: TemplateFile, path: &Path) {
        (**self).creating(feature, file, path);
    }

    fn feature_failed(&self, raw_name: &str, error: &ScaffoldError) {
        (**self).feature_failed(raw_name, error);
    }
}
