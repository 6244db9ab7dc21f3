/// extgroup core: traversal, filtering, and extension grouping.
///
/// This crate contains all business logic with zero UI dependencies.
/// Frontends (the bundled CLI, or any other caller) gather parameters and
/// call [`scanner::categorize`] or [`scanner::scan`] directly.
///
/// # Modules
///
/// - [`model`]: File records, extension keys, and the result mapping.
/// - [`filter`]: Size / date / extension predicates and raw-input parsing.
/// - [`scanner`]: Root validation and the recursive directory walk.
/// - [`analysis`]: Post-scan per-extension statistics.
/// - [`error`]: Error and warning types surfaced to callers.
pub mod analysis;
pub mod error;
pub mod filter;
pub mod model;
pub mod scanner;

pub use error::{FilterWarning, ScanError, ScanIssue};
pub use filter::{FilterInput, ScanFilters, SkipReason};
pub use model::{ExtensionMap, FileRecord};
pub use scanner::{categorize, scan, validate, ScanReport, ScanSummary};
