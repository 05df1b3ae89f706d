//! The fixed boilerplate created inside every feature directory.

use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter, IntoStaticStr};

/// Extension shared by every template file.
pub const TEMPLATE_EXTENSION: &str = "rs";

/// One boilerplate file of a feature slice, in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum TemplateFile {
    /// Module root wiring the slice together.
    Mod,
    /// Command-line arguments of the slice.
    Cli,
    /// The slice's business logic.
    Handler,
}

impl TemplateFile {
    /// File name without extension (`mod`, `cli`, `handler`).
    #[must_use]
    pub fn stem(self) -> &'static str {
        self.into()
    }

    /// File name as written to disk, e.g. `handler.rs`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.{TEMPLATE_EXTENSION}", self.stem())
    }

    /// Every template file in creation order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}
