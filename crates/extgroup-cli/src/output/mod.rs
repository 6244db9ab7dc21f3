/// Result renderers: plain text, JSON, and CSV.
pub mod csv;
pub mod json;
pub mod text;

use crate::args::OutputFormat;
use extgroup_core::ScanReport;
use std::io::{self, Write};

/// Presentation switches that only the text renderer honours; JSON and CSV
/// always carry dates and leave totals to the consumer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub show_dates: bool,
    pub summary: bool,
}

pub fn render<W: Write>(
    report: &ScanReport,
    format: OutputFormat,
    options: &RenderOptions,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => text::render(report, options, out),
        OutputFormat::Json => json::render(report, out),
        OutputFormat::Csv => csv::render(report, out),
    }
}
