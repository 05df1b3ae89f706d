use std::borrow::Cow;
use std::path::PathBuf;

/// A specialized [`ScaffoldError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// The feature name cannot be used as a single directory name.
    #[error("Invalid feature name '{name}'{}: {message}", format_context(.context))]
    InvalidName { name: String, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Something other than a directory already occupies the feature path.
    #[error("Path exists but is not a directory{}: {}", format_context(.context), .path.display())]
    NotADirectory { path: PathBuf, context: Option<Cow<'static, str>> },

    /// Filesystem failure (permission denied, disk full, path too long, ...).
    #[error("Filesystem error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

/// Attaches human-readable context to a [`ScaffoldError`] result.
pub trait ScaffoldErrorExt<T> {
    /// Replaces the context of the contained error, if any.
    ///
    /// # Errors
    /// Returns the original error with the context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ScaffoldError>;
}

impl<T> ScaffoldErrorExt<T> for Result<T, ScaffoldError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                ScaffoldError::InvalidName { context: c, .. }
                | ScaffoldError::NotADirectory { context: c, .. }
                | ScaffoldError::Io { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> ScaffoldErrorExt<T> for Result<T, std::io::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ScaffoldError> {
        self.map_err(|source| ScaffoldError::Io { source, context: Some(context.into()) })
    }
}

impl From<std::io::Error> for ScaffoldError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
