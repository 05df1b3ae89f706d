//! Outcomes of scaffolding runs.

use crate::error::ScaffoldError;
use crate::name::FeatureName;
use crate::template::TemplateFile;
use std::path::{Path, PathBuf};

/// What happened to one template file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// The file did not exist and was created empty.
    Created,
    /// The file already existed and was left untouched.
    Preserved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldedFile {
    pub template: TemplateFile,
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Result of a successful `create_feature` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureReport {
    pub name: FeatureName,
    pub directory: PathBuf,
    /// `false` when the directory already existed.
    pub directory_created: bool,
    /// One entry per template file, in creation order.
    pub files: Vec<ScaffoldedFile>,
}

impl FeatureReport {
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Number of files that were newly created.
    #[must_use]
    pub fn created_count(&self) -> usize {
        self.files.iter().filter(|f| f.status == FileStatus::Created).count()
    }

    /// `true` when nothing had to be created.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        !self.directory_created && self.created_count() == 0
    }
}

/// The per-name result of a batch run.
#[derive(Debug)]
pub struct FeatureOutcome {
    /// The name exactly as supplied by the caller.
    pub name: String,
    pub result: Result<FeatureReport, ScaffoldError>,
}

/// Results of a batch run, in the order the names were supplied.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<FeatureOutcome>,
}

impl BatchReport {
    pub(crate) const fn new(outcomes: Vec<FeatureOutcome>) -> Self {
        Self { outcomes }
    }

    #[must_use]
    pub fn outcomes(&self) -> &[FeatureOutcome] {
        &self.outcomes
    }

    /// Successfully scaffolded features.
    pub fn succeeded(&self) -> impl Iterator<Item = &FeatureReport> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Failed names with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &ScaffoldError)> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err().map(|e| (o.name.as_str(), e)))
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| o.result.is_err())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
