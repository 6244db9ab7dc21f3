//! extgroup: group the files under a directory by extension.
//!
//! Thin binary entry point. All logic lives in the `extgroup-core`
//! and `extgroup-cli` crates.

use clap::Parser;
use extgroup_cli::logging::init_logging;
use extgroup_cli::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    // Logging is best-effort: an unwritable log file must not stop a scan.
    if let Err(e) = init_logging(&args.log_config()) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    tracing::info!("extgroup {} starting", env!("CARGO_PKG_VERSION"));

    match extgroup_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
