//! Advisory check that slicer runs from inside a `features` directory.

use std::fmt;
use std::path::{Path, PathBuf};

/// Directory name feature slices are expected to live under.
pub const FEATURES_DIR: &str = "features";

/// Emitted when the base directory is not named [`FEATURES_DIR`]. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationWarning {
    /// The directory features would be created in.
    pub cwd: PathBuf,
    /// Final segment of `cwd`'s parent, empty when `cwd` has no named parent.
    pub parent: String,
}

impl fmt::Display for LocationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: present working dir {} is not a {FEATURES_DIR} dir (parent: {}); \
             run slicer from inside {FEATURES_DIR}/",
            self.cwd.display(),
            if self.parent.is_empty() { "/" } else { &self.parent },
        )
    }
}

/// Returns a warning unless the last segment of `dir` is exactly `features`.
#[must_use]
pub fn check_location(dir: &Path) -> Option<LocationWarning> {
    if dir.file_name().is_some_and(|name| name == FEATURES_DIR) {
        return None;
    }

    let parent = dir
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Some(LocationWarning { cwd: dir.to_path_buf(), parent })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_dir_is_silent() {
        assert_eq!(check_location(Path::new("/work/app/src/features")), None);
    }

    #[test]
    fn other_dir_names_parent_segment() {
        let warning = check_location(Path::new("/work/app/src")).unwrap();
        assert_eq!(warning.parent, "app");
        assert_eq!(warning.cwd, PathBuf::from("/work/app/src"));
        assert!(warning.to_string().contains("/work/app/src"));
        assert!(warning.to_string().contains("(parent: app)"));
    }

    #[test]
    fn similar_names_still_warn() {
        assert!(check_location(Path::new("/work/Features")).is_some());
        assert!(check_location(Path::new("/work/features-old")).is_some());
    }

    #[test]
    fn filesystem_root_has_no_parent_name() {
        let warning = check_location(Path::new("/")).unwrap();
        assert!(warning.parent.is_empty());
        assert!(warning.to_string().contains("(parent: /)"));
    }
}
