/// JSON output: `{ root, extensions: { ext: [entry, ...] }, summary, issues }`.
use extgroup_core::{ScanIssue, ScanReport, ScanSummary};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    extensions: BTreeMap<&'a str, Vec<JsonEntry<'a>>>,
    summary: &'a ScanSummary,
    issues: &'a [ScanIssue],
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    path: &'a Path,
    size: u64,
    /// `dd.mm.yyyy`, or null when unknown.
    modified: Option<String>,
}

pub fn render<W: Write>(report: &ScanReport, out: &mut W) -> io::Result<()> {
    let extensions = report
        .files
        .iter()
        .map(|(ext, records)| {
            let entries = records
                .iter()
                .map(|r| JsonEntry {
                    path: &r.path,
                    size: r.size,
                    modified: r.modified.map(|_| r.modified_display()),
                })
                .collect();
            (ext, entries)
        })
        .collect();

    let view = JsonReport {
        root: &report.root,
        extensions,
        summary: &report.summary,
        issues: &report.issues,
    };
    serde_json::to_writer_pretty(&mut *out, &view)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use extgroup_core::{ExtensionMap, FileRecord};
    use std::path::PathBuf;

    #[test]
    fn groups_entries_under_extension_keys() {
        let when = Local.with_ymd_and_hms(2023, 12, 1, 12, 0, 0).unwrap();
        let mut files = ExtensionMap::new();
        files.push(
            ".txt".into(),
            FileRecord::new(PathBuf::from("r/a.txt"), 5, Some(when)),
        );
        files.push("".into(), FileRecord::new(PathBuf::from("r/LICENSE"), 7, None));
        let report = ScanReport {
            root: PathBuf::from("r"),
            files,
            summary: ScanSummary::default(),
            issues: Vec::new(),
        };

        let mut out = Vec::new();
        render(&report, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["root"], "r");
        assert_eq!(value["extensions"][".txt"][0]["path"], "r/a.txt");
        assert_eq!(value["extensions"][".txt"][0]["size"], 5);
        assert_eq!(value["extensions"][".txt"][0]["modified"], "01.12.2023");
        assert!(value["extensions"][""][0]["modified"].is_null());
        assert_eq!(value["summary"]["files_kept"], 0);
        assert!(value["issues"].as_array().unwrap().is_empty());
    }
}
