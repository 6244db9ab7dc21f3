/// The directory walk itself, built on `jwalk` in serial mode.
///
/// Directory listings are sorted by name so repeated scans of an unchanged
/// tree yield identical per-key ordering. Links are not followed while
/// descending; non-directory entries are stat'ed through links, so a link to
/// a file counts as a file and a link to a directory is neither descended
/// nor counted.
use crate::error::ScanIssue;
use crate::filter::ScanFilters;
use crate::model::{ExtensionMap, FileRecord};
use crate::scanner::ScanSummary;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

pub fn walk(root: &Path, filters: &ScanFilters) -> (ExtensionMap, ScanSummary, Vec<ScanIssue>) {
    let start = Instant::now();
    let mut files = ExtensionMap::new();
    let mut summary = ScanSummary::default();
    let mut issues: Vec<ScanIssue> = Vec::new();

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let mut entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // An entry jwalk could not stat at all.
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                record_issue(&mut summary, &mut issues, path, err.to_string());
                continue;
            }
        };

        if entry.file_type().is_dir() {
            // jwalk yields a directory it failed to list as `Ok`, carrying
            // the listing error; its contents are lost.
            if let Some(err) = entry.read_children_error.take() {
                record_issue(&mut summary, &mut issues, entry.path(), err.to_string());
            }
            continue;
        }

        let path = entry.path();
        let meta = match fs::metadata(&path) {
            Ok(m) => m,
            Err(err) => {
                // Dangling link, or the file vanished after listing.
                record_issue(&mut summary, &mut issues, path, err.to_string());
                continue;
            }
        };
        if meta.is_dir() {
            debug!("Not descending into linked directory {}", path.display());
            continue;
        }

        summary.files_found += 1;
        let modified = meta.modified().ok().map(DateTime::<Local>::from);
        let record = FileRecord::new(path, meta.len(), modified);
        let key = record.extension_key();

        match filters.check(&record, &key) {
            Ok(()) => {
                info!("Categorised file: {} as '{key}'", record.path.display());
                summary.files_kept += 1;
                files.push(key, record);
            }
            Err(reason) => {
                info!("Skipped file: {} ({reason})", record.path.display());
                summary.record_skip(reason);
            }
        }
    }

    summary.duration = start.elapsed();
    (files, summary, issues)
}

fn record_issue(
    summary: &mut ScanSummary,
    issues: &mut Vec<ScanIssue>,
    path: PathBuf,
    message: String,
) {
    warn!("Skipping unreadable entry {}: {message}", path.display());
    summary.error_count += 1;
    issues.push(ScanIssue { path, message });
}
