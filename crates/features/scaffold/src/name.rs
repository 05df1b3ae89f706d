//! Validated feature names.

use crate::error::ScaffoldError;
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Longest name most filesystems accept for a single path segment, in bytes.
pub const MAX_NAME_LEN: usize = 255;

const FORBIDDEN_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// A feature name that is safe to use verbatim as one directory name.
///
/// Parsing rejects anything that would escape the base directory or that common
/// filesystems refuse, so later filesystem calls never see a traversal segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureName(String);

impl FeatureName {
    /// Validates `raw` and wraps it.
    ///
    /// # Errors
    /// Returns [`ScaffoldError::InvalidName`] when `raw` is blank, is `.` or `..`,
    /// contains a path separator, a control character or one of `<>:"|?*`, ends
    /// with a dot or a space, or is longer than [`MAX_NAME_LEN`] bytes.
    pub fn parse(raw: &str) -> Result<Self, ScaffoldError> {
        let invalid = |message: &'static str| ScaffoldError::InvalidName {
            name: raw.to_owned(),
            message: message.into(),
            context: None,
        };

        if raw.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if raw == "." || raw == ".." {
            return Err(invalid("name refers to the current or parent directory"));
        }
        if raw.len() > MAX_NAME_LEN {
            return Err(invalid("name is longer than 255 bytes"));
        }
        if raw.chars().any(|c| c == '/' || c == '\\') {
            return Err(invalid("name must be a single path segment"));
        }
        if raw.chars().any(char::is_control) {
            return Err(invalid("name contains a control character"));
        }
        if raw.contains(FORBIDDEN_CHARS) {
            return Err(invalid(r#"name contains one of < > : " | ? *"#));
        }
        if raw.ends_with('.') || raw.ends_with(' ') {
            return Err(invalid("name ends with a dot or a space"));
        }

        Ok(Self(raw.to_owned()))
    }

    /// Validates a raw command-line argument.
    ///
    /// # Errors
    /// Returns [`ScaffoldError::InvalidName`] when `raw` is not valid UTF-8 (the
    /// error carries its lossy rendering), otherwise the errors of
    /// [`FeatureName::parse`].
    pub fn parse_os(raw: &OsStr) -> Result<Self, ScaffoldError> {
        raw.to_str().map_or_else(
            || {
                Err(ScaffoldError::InvalidName {
                    name: raw.to_string_lossy().into_owned(),
                    message: "name is not valid UTF-8".into(),
                    context: None,
                })
            },
            Self::parse,
        )
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for FeatureName {
    type Error = ScaffoldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&OsStr> for FeatureName {
    type Error = ScaffoldError;

    fn try_from(value: &OsStr) -> Result<Self, Self::Error> {
        Self::parse_os(value)
    }
}

impl FromStr for FeatureName {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<Path> for FeatureName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl AsRef<str> for FeatureName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
