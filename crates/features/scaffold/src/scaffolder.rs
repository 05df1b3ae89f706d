use crate::error::{ScaffoldError, ScaffoldErrorExt};
use crate::location::check_location;
use crate::name::FeatureName;
use crate::observer::{NoopObserver, ScaffoldObserver};
use crate::report::{BatchReport, FeatureOutcome, FeatureReport, FileStatus, ScaffoldedFile};
use crate::template::TemplateFile;
use std::ffi::OsStr;
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use strum::EnumCount;
use tracing::{debug, info, instrument, warn};

/// Creates feature slices under a fixed base directory.
///
/// Every operation is idempotent: existing directories are reused and existing
/// files are never opened for writing, so a repeated run only fills in what is
/// missing.
#[derive(Debug, Clone)]
pub struct Scaffolder<O = NoopObserver> {
    root: PathBuf,
    observer: O,
}

impl Scaffolder {
    /// Scaffolder rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), observer: NoopObserver }
    }

    /// Scaffolder rooted at the process working directory.
    ///
    /// # Errors
    /// Returns [`ScaffoldError::Io`] if the working directory cannot be determined
    /// (e.g., it was deleted).
    pub fn current_dir() -> Result<Self, ScaffoldError> {
        let root = std::env::current_dir().context("Failed to determine the working directory")?;
        Ok(Self::new(root))
    }
}

impl<O> Scaffolder<O> {
    /// Replaces the progress observer.
    pub fn with_observer<P: ScaffoldObserver>(self, observer: P) -> Scaffolder<P> {
        Scaffolder { root: self.root, observer }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl<O: ScaffoldObserver> Scaffolder<O> {
    /// Creates `<root>/<name>/` and the template files inside it.
    ///
    /// A location warning is reported (never raised) when the root is not named
    /// `features`.
    ///
    /// # Errors
    /// Returns [`ScaffoldError::NotADirectory`] if a non-directory already sits at
    /// the feature path, or [`ScaffoldError::Io`] for any filesystem failure. Files
    /// created before the failure are left in place.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn create_feature(&self, name: &FeatureName) -> Result<FeatureReport, ScaffoldError> {
        if let Some(warning) = check_location(&self.root) {
            warn!(parent = %warning.parent, "Not running from a features directory");
            self.observer.location_mismatch(&warning);
        }

        let directory = self.root.join(name);
        let directory_created = ensure_dir(&directory)?;
        debug!(
            directory = %directory.display(),
            created = directory_created,
            "Feature directory ready"
        );

        let mut files = Vec::with_capacity(TemplateFile::COUNT);
        for template in TemplateFile::all() {
            let path = directory.join(template.file_name());
            self.observer.creating(name, template, &path);

            let status = touch(&path)?;
            debug!(file = %path.display(), ?status, "Template file ready");

            files.push(ScaffoldedFile { template, path, status });
        }

        let report = FeatureReport { name: name.clone(), directory, directory_created, files };
        info!(created = report.created_count(), "Feature scaffolded");

        Ok(report)
    }

    /// Validates `raw` and scaffolds it.
    ///
    /// # Errors
    /// Returns [`ScaffoldError::InvalidName`] for unusable names, otherwise the
    /// errors of [`Scaffolder::create_feature`].
    pub fn create_named(&self, raw: &str) -> Result<FeatureReport, ScaffoldError> {
        let name = FeatureName::parse(raw)?;
        self.create_feature(&name)
    }

    /// Scaffolds every name in order. A failing name, including one that is not
    /// valid UTF-8, is reported to the observer and recorded in the returned
    /// report; the remaining names still run.
    pub fn create_all<I, S>(&self, names: I) -> BatchReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let outcomes = names
            .into_iter()
            .map(|raw| {
                let raw = raw.as_ref();
                let lossy = raw.to_string_lossy();
                let result =
                    FeatureName::parse_os(raw).and_then(|name| self.create_feature(&name));
                if let Err(e) = &result {
                    warn!(feature = %lossy, error = %e, "Feature scaffolding failed");
                    self.observer.feature_failed(&lossy, e);
                }
                FeatureOutcome { name: lossy.into_owned(), result }
            })
            .collect();

        BatchReport::new(outcomes)
    }
}

/// Creates a single directory level. Returns `false` if it already existed.
fn ensure_dir(path: &Path) -> Result<bool, ScaffoldError> {
    match fs::create_dir(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if path.is_dir() {
                Ok(false)
            } else {
                Err(ScaffoldError::NotADirectory { path: path.to_path_buf(), context: None })
            }
        },
        Err(e) => Err(e).context(format!("Failed to create directory {}", path.display())),
    }
}

/// Creates an empty file unless something already exists at `path`.
///
/// Uses create-new semantics so existing content is never truncated.
fn touch(path: &Path) -> Result<FileStatus, ScaffoldError> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(FileStatus::Created),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if path.is_dir() {
                Err(io::Error::from(ErrorKind::IsADirectory))
                    .context(format!("Expected a file at {}", path.display()))
            } else {
                Ok(FileStatus::Preserved)
            }
        },
        Err(e) => Err(e).context(format!("Failed to create file {}", path.display())),
    }
}
