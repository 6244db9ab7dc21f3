/// CSV output: one row per kept file.
use extgroup_core::ScanReport;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct CsvRow<'a> {
    extension: &'a str,
    path: String,
    size: u64,
    modified: String,
}

pub fn render<W: Write>(report: &ScanReport, out: &mut W) -> io::Result<()> {
    let mut writer = ::csv::Writer::from_writer(out);
    for (ext, records) in report.files.iter() {
        for record in records {
            writer
                .serialize(CsvRow {
                    extension: ext,
                    path: record.path.to_string_lossy().into_owned(),
                    size: record.size,
                    modified: record.modified_display(),
                })
                .map_err(io::Error::other)?;
        }
    }
    writer.flush()
}
