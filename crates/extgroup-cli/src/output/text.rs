/// Human-readable listing, one block per extension.
use crate::output::RenderOptions;
use extgroup_core::analysis::extension_stats;
use extgroup_core::model::size::{format_count, format_size};
use extgroup_core::ScanReport;
use std::io::{self, Write};

pub fn render<W: Write>(report: &ScanReport, options: &RenderOptions, out: &mut W) -> io::Result<()> {
    if report.files.is_empty() {
        writeln!(out, "No files matched.")?;
    }

    for (ext, records) in report.files.iter() {
        writeln!(out, "\nFiles with extension '{ext}':")?;
        for record in records {
            if options.show_dates {
                let date = record.modified_display();
                let date = if date.is_empty() { "unknown".into() } else { date };
                writeln!(out, "{}  ({date})", record.path.display())?;
            } else {
                writeln!(out, "{}", record.path.display())?;
            }
        }
    }

    if options.summary {
        render_summary(report, out)?;
    }
    Ok(())
}

fn render_summary<W: Write>(report: &ScanReport, out: &mut W) -> io::Result<()> {
    let stats = extension_stats(&report.files);
    let width = stats
        .iter()
        .map(|s| display_key(&s.extension).len())
        .max()
        .unwrap_or(0)
        .max("Extension".len());

    writeln!(out, "\nSummary:")?;
    writeln!(out, "  {:<width$}  {:>8}  {:>10}", "Extension", "Files", "Size")?;
    for s in &stats {
        writeln!(
            out,
            "  {:<width$}  {:>8}  {:>10}",
            display_key(&s.extension),
            format_count(s.file_count),
            format_size(s.total_size)
        )?;
    }

    let sum = &report.summary;
    writeln!(
        out,
        "\n{} of {} file(s) kept, {} in total",
        format_count(sum.files_kept),
        format_count(sum.files_found),
        format_size(report.files.total_size())
    )?;
    if sum.skipped_total() > 0 {
        writeln!(
            out,
            "Skipped: {} below minimum size, {} too old, {} other extension",
            sum.skipped_too_small, sum.skipped_too_old, sum.skipped_wrong_extension
        )?;
    }
    if sum.error_count > 0 {
        writeln!(out, "Unreadable entries: {}", sum.error_count)?;
    }
    Ok(())
}

fn display_key(ext: &str) -> &str {
    if ext.is_empty() {
        "(none)"
    } else {
        ext
    }
}
