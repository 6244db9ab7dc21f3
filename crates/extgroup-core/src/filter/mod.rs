/// Per-file predicates applied during a scan.
///
/// [`ScanFilters`] is passed explicitly to every scan call; nothing is kept
/// between calls. All set filters must pass for a file to be kept.
pub mod input;

pub use input::FilterInput;

use crate::model::FileRecord;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::fmt;

/// Optional size, date, and extension criteria. `None` means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanFilters {
    /// Files strictly smaller than this many bytes are skipped.
    pub min_size: Option<u64>,

    /// Files last modified strictly before local midnight at the start of
    /// this day are skipped.
    pub modified_after: Option<NaiveDate>,

    /// Files whose extension key is not exactly this (case-sensitive,
    /// leading `.` included) are skipped.
    pub extension: Option<String>,
}

/// Why a file was left out of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    TooSmall,
    TooOld,
    WrongExtension,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TooSmall => "below minimum size",
            Self::TooOld => "modified before cutoff date",
            Self::WrongExtension => "extension does not match",
        })
    }
}

impl ScanFilters {
    /// No filters: every file is kept.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_min_size(mut self, bytes: u64) -> Self {
        self.min_size = Some(bytes);
        self
    }

    pub fn with_modified_after(mut self, date: NaiveDate) -> Self {
        self.modified_after = Some(date);
        self
    }

    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = Some(ext.into());
        self
    }

    /// `true` when at least one filter is set.
    pub fn is_active(&self) -> bool {
        self.min_size.is_some() || self.modified_after.is_some() || self.extension.is_some()
    }

    /// Evaluate every set filter against `record`.
    ///
    /// Filters are checked size, then date, then extension; the first one
    /// that rejects the file is returned. A file with no known modification
    /// time cannot satisfy a date filter.
    pub fn check(&self, record: &FileRecord, ext_key: &str) -> Result<(), SkipReason> {
        if let Some(min) = self.min_size {
            if record.size < min {
                return Err(SkipReason::TooSmall);
            }
        }

        if let Some(date) = self.modified_after {
            let cutoff = date.and_time(NaiveTime::MIN);
            match record.modified {
                Some(m) if m.naive_local() >= cutoff => {}
                _ => return Err(SkipReason::TooOld),
            }
        }

        if let Some(ext) = &self.extension {
            if ext_key != ext {
                return Err(SkipReason::WrongExtension);
            }
        }

        Ok(())
    }
}
