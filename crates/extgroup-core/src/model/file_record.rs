/// A single discovered file and the extension key it is grouped under.
use chrono::{DateTime, Local};
use compact_str::CompactString;
use serde::Serialize;
use std::ffi::OsStr;
use std::fmt::Write as _;
use std::path::PathBuf;

/// `day.month.year` with two-digit day and month and a four-digit year.
pub const DATE_DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// One kept file. Created once per discovered file and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Full path as produced by the walk (root path joined with the
    /// relative components below it).
    pub path: PathBuf,

    /// Size in bytes, following symlinks.
    pub size: u64,

    /// Last-modified time in local time. `None` when the platform could not
    /// report it.
    pub modified: Option<DateTime<Local>>,
}

impl FileRecord {
    pub fn new(path: PathBuf, size: u64, modified: Option<DateTime<Local>>) -> Self {
        Self {
            path,
            size,
            modified,
        }
    }

    /// Modification date as `dd.mm.yyyy`, or an empty string if unknown.
    pub fn modified_display(&self) -> String {
        self.modified
            .map(|m| m.format(DATE_DISPLAY_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Extension key of this record's file name.
    pub fn extension_key(&self) -> CompactString {
        self.path
            .file_name()
            .map(extension_key_os)
            .unwrap_or_default()
    }
}

/// Compute the grouping key for a file name.
///
/// The key is the suffix starting at the last `.`, separator included.
/// Leading dots belong to the stem, so dotfiles such as `.bashrc` have no
/// extension and map to the empty key. Case is preserved.
pub fn extension_key(file_name: &str) -> CompactString {
    extension_key_os(OsStr::new(file_name))
}

/// [`extension_key`] for names that may not be valid UTF-8.
///
/// The separator is located on the raw bytes, so invalid bytes in the stem
/// do not affect the key. Invalid bytes inside the extension are written as
/// `\xNN` escapes, keeping distinct raw extensions under distinct keys.
pub fn extension_key_os(file_name: &OsStr) -> CompactString {
    let bytes = file_name.as_encoded_bytes();
    let stem_start = bytes.iter().position(|&b| b != b'.').unwrap_or(bytes.len());
    let rest = &bytes[stem_start..];
    match rest.iter().rposition(|&b| b == b'.') {
        Some(dot) => escape_invalid(&rest[dot..]),
        None => CompactString::default(),
    }
}

fn escape_invalid(bytes: &[u8]) -> CompactString {
    let mut key = CompactString::default();
    for chunk in bytes.utf8_chunks() {
        key.push_str(chunk.valid());
        for b in chunk.invalid() {
            let _ = write!(key, "\\x{b:02X}");
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn key_includes_leading_separator() {
        assert_eq!(extension_key("report.txt"), ".txt");
    }

    #[test]
    fn key_uses_last_separator_only() {
        assert_eq!(extension_key("archive.tar.gz"), ".gz");
    }

    #[test]
    fn extensionless_file_has_empty_key() {
        assert_eq!(extension_key("Makefile"), "");
    }

    /// Dotfiles are names, not extensions.
    #[test]
    fn dotfiles_have_empty_key() {
        assert_eq!(extension_key(".bashrc"), "");
        assert_eq!(extension_key("..."), "");
    }

    #[test]
    fn dotfile_with_extension_keeps_suffix() {
        assert_eq!(extension_key(".config.json"), ".json");
    }

    #[test]
    fn trailing_dot_is_its_own_key() {
        assert_eq!(extension_key("name."), ".");
    }

    #[test]
    fn key_preserves_case() {
        assert_eq!(extension_key("PHOTO.JPG"), ".JPG");
    }

    #[test]
    fn record_key_comes_from_file_name_not_directory() {
        let rec = FileRecord::new(PathBuf::from("some.dir/README"), 1, None);
        assert_eq!(rec.extension_key(), "");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_stem_does_not_affect_key() {
        use std::os::unix::ffi::OsStrExt;
        assert_eq!(extension_key_os(OsStr::from_bytes(b"caf\xe9.txt")), ".txt");
    }

    /// Distinct invalid extensions must not collapse into one key.
    #[cfg(unix)]
    #[test]
    fn non_utf8_extensions_keep_distinct_keys() {
        use std::os::unix::ffi::OsStrExt;
        let a = extension_key_os(OsStr::from_bytes(b"a.t\xffx"));
        let b = extension_key_os(OsStr::from_bytes(b"b.t\xfex"));
        assert_eq!(a, ".t\\xFFx");
        assert_eq!(b, ".t\\xFEx");
        assert_ne!(a, b);
        assert_ne!(a, ".txt");
    }

    #[cfg(unix)]
    #[test]
    fn record_key_uses_raw_file_name() {
        use std::os::unix::ffi::OsStrExt;
        let path = PathBuf::from(OsStr::from_bytes(b"dir/report.c\xffsv"));
        let rec = FileRecord::new(path, 1, None);
        assert_eq!(rec.extension_key(), ".c\\xFFsv");
    }

    #[test]
    fn modified_display_is_day_month_year() {
        let when = Local.with_ymd_and_hms(2024, 3, 7, 15, 30, 0).unwrap();
        let rec = FileRecord::new(PathBuf::from("a.txt"), 1, Some(when));
        assert_eq!(rec.modified_display(), "07.03.2024");
    }

    #[test]
    fn modified_display_empty_when_unknown() {
        let rec = FileRecord::new(PathBuf::from("a.txt"), 1, None);
        assert_eq!(rec.modified_display(), "");
    }
}
