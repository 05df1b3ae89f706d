//! # Scaffold
//!
//! Bootstraps vertical-slice ("feature slice") layouts: for each feature name a
//! directory is created under a base directory, holding a fixed set of empty
//! boilerplate files.
//!
//! ```text
//! <root>/<feature>/
//!   mod.rs
//!   cli.rs
//!   handler.rs
//! ```
//!
//! * **Idempotent**: existing directories are reused, existing files are left
//!   byte-for-byte untouched.
//! * **Validated input**: [`FeatureName`] rejects traversal segments and characters
//!   common filesystems refuse before anything touches the disk.
//! * **Partial batches**: [`Scaffolder::create_all`] keeps going after a failing
//!   name and reports every outcome in a [`BatchReport`].
//! * **Advisory location check**: a [`LocationWarning`] is reported when the base
//!   directory is not named `features`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use slicer_scaffold::Scaffolder;
//!
//! let report = Scaffolder::current_dir()?.create_all(["billing", "orders"]);
//! assert!(!report.has_failures());
//! # Ok::<(), slicer_scaffold::ScaffoldError>(())
//! ```

mod error;
pub mod location;
mod name;
mod observer;
mod report;
mod scaffolder;
pub mod template;

pub use crate::error::{ScaffoldError, ScaffoldErrorExt};
pub use crate::location::{FEATURES_DIR, LocationWarning, check_location};
pub use crate::name::{FeatureName, MAX_NAME_LEN};
pub use crate::observer::{NoopObserver, ScaffoldObserver};
pub use crate::report::{BatchReport, FeatureOutcome, FeatureReport, FileStatus, ScaffoldedFile};
pub use crate::scaffolder::Scaffolder;
pub use crate::template::{TEMPLATE_EXTENSION, TemplateFile};
