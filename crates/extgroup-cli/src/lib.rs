/// extgroup CLI: command-line frontend.
///
/// Gathers parameters (arguments, or a prompt when no path is given),
/// configures logging, and renders the result of a core scan. Business
/// logic lives in `extgroup-core`.
pub mod args;
pub mod logging;
pub mod output;

pub use args::{Args, OutputFormat};

use anyhow::{Context, Result};
use extgroup_core::{scan, ScanReport};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Run one categorisation with `args`, writing results to stdout.
///
/// Filter warnings go to stderr and the run continues.
pub fn run(args: &Args) -> Result<()> {
    let root = match &args.path {
        Some(path) => path.clone(),
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            prompt_for_path(&mut stdin.lock(), &mut stdout)?
        }
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    execute(&root, args, &mut out)?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Scan `root` with the filters in `args` and render the report to `out`.
pub fn execute<W: Write>(root: &Path, args: &Args, out: &mut W) -> Result<ScanReport> {
    let (filters, warnings) = args.filter_input().parse();
    for warning in &warnings {
        eprintln!("Warning: {warning}");
    }

    let report = scan(root, &filters)?;
    output::render(&report, args.format, &args.render_options(), out)
        .context("failed to write results")?;

    info!(
        "Rendered {} file(s) under {} extension(s) as {:?}",
        report.files.file_count(),
        report.files.len(),
        args.format
    );
    Ok(report)
}

/// Ask for the folder to scan on `output` and read one line from `input`.
pub fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    write!(output, "Enter the folder path: ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read folder path")?;
    Ok(PathBuf::from(line.trim()))
}
