/// Scanner module: validates the root and walks the tree beneath it.
///
/// The walk is single-threaded and synchronous: [`scan`] returns only once
/// every reachable entry has been visited. Validation failures are the only
/// errors returned; per-entry filesystem errors are collected into the
/// report as [`ScanIssue`]s and the walk continues.
pub mod summary;
pub mod walk;

pub use summary::ScanSummary;

use crate::error::{ScanError, ScanIssue};
use crate::filter::ScanFilters;
use crate::model::ExtensionMap;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Everything a completed scan produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub files: ExtensionMap,
    pub summary: ScanSummary,
    pub issues: Vec<ScanIssue>,
}

/// Check that `root` exists and is a directory.
///
/// Any failure to stat the path (missing, or unreachable) is reported as
/// [`ScanError::NotFound`]. Symlinks are followed, so a link to a directory
/// is a valid root.
pub fn validate(root: &Path) -> Result<(), ScanError> {
    let meta = fs::metadata(root).map_err(|_| ScanError::NotFound {
        path: root.to_path_buf(),
    })?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

/// Validate `root`, walk it, and group every file that passes `filters`
/// by extension key.
pub fn scan(root: &Path, filters: &ScanFilters) -> Result<ScanReport, ScanError> {
    if let Err(err) = validate(root) {
        warn!("Rejected scan root: {err}");
        return Err(err);
    }

    info!("Starting scan of {}", root.display());
    let (files, summary, issues) = walk::walk(root, filters);

    info!(
        files_found = summary.files_found,
        files_kept = summary.files_kept,
        skipped = summary.skipped_total(),
        errors = summary.error_count,
        extensions = files.len(),
        "Scan of {} complete in {:?}",
        root.display(),
        summary.duration
    );

    Ok(ScanReport {
        root: root.to_path_buf(),
        files,
        summary,
        issues,
    })
}

/// Group the files under `root` by extension key.
///
/// Same walk as [`scan`], returning only the mapping.
pub fn categorize(root: &Path, filters: &ScanFilters) -> Result<ExtensionMap, ScanError> {
    scan(root, filters).map(|report| report.files)
}
