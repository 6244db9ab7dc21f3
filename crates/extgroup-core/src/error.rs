/// Error types for the core crate.
///
/// Only root validation is fatal. Everything that goes wrong after the walk
/// has started is recorded as a [`ScanIssue`] and the walk carries on.
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised before any traversal starts.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root path does not exist.
    #[error("'{}' does not exist.", path.display())]
    NotFound { path: PathBuf },

    /// The root path exists but is a file or some other non-directory entry.
    #[error("'{}' is not a directory.", path.display())]
    NotADirectory { path: PathBuf },
}

/// Non-fatal problems found while parsing raw filter input.
///
/// Each warning disables only the filter it names; the scan still runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterWarning {
    #[error("invalid minimum size '{0}' (expected a whole number of bytes); size filter disabled")]
    InvalidMinSize(String),

    #[error("invalid date '{0}' (expected YYYY-MM-DD or DD.MM.YYYY); date filter disabled")]
    InvalidDate(String),
}

/// A filesystem error hit mid-walk (permission denied, file vanished, ...).
#[derive(Debug, Clone, Serialize)]
pub struct ScanIssue {
    pub path: PathBuf,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_path() {
        let err = ScanError::NotFound {
            path: PathBuf::from("missing_dir"),
        };
        assert_eq!(err.to_string(), "'missing_dir' does not exist.");
    }

    #[test]
    fn not_a_directory_message_names_the_path() {
        let err = ScanError::NotADirectory {
            path: PathBuf::from("notes.txt"),
        };
        assert_eq!(err.to_string(), "'notes.txt' is not a directory.");
    }

    #[test]
    fn filter_warning_mentions_raw_input() {
        let w = FilterWarning::InvalidDate("yesterday".into());
        assert!(w.to_string().contains("'yesterday'"));
    }
}
