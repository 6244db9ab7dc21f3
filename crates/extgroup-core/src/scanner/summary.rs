/// Counters gathered during one walk.
use crate::filter::SkipReason;
use serde::{Serialize, Serializer};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Files discovered, before filtering.
    pub files_found: u64,
    /// Files that passed every filter and were grouped.
    pub files_kept: u64,
    pub skipped_too_small: u64,
    pub skipped_too_old: u64,
    pub skipped_wrong_extension: u64,
    /// Entries that could not be read and were left out.
    pub error_count: u64,
    #[serde(rename = "duration_ms", serialize_with = "as_millis")]
    pub duration: Duration,
}

impl ScanSummary {
    pub fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::TooSmall => self.skipped_too_small += 1,
            SkipReason::TooOld => self.skipped_too_old += 1,
            SkipReason::WrongExtension => self.skipped_wrong_extension += 1,
        }
    }

    pub fn skipped_total(&self) -> u64 {
        self.skipped_too_small + self.skipped_too_old + self.skipped_wrong_extension
    }
}

fn as_millis<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_are_counted_per_reason() {
        let mut s = ScanSummary::default();
        s.record_skip(SkipReason::TooSmall);
        s.record_skip(SkipReason::TooSmall);
        s.record_skip(SkipReason::TooOld);
        s.record_skip(SkipReason::WrongExtension);

        assert_eq!(s.skipped_too_small, 2);
        assert_eq!(s.skipped_too_old, 1);
        assert_eq!(s.skipped_wrong_extension, 1);
        assert_eq!(s.skipped_total(), 4);
    }
}
