/// Command-line arguments.
///
/// Filter values are taken as raw strings so that malformed input can be
/// reported as a warning instead of aborting argument parsing.
use crate::logging::{LogConfig, DEFAULT_LOG_BACKUPS, DEFAULT_LOG_FILE, DEFAULT_LOG_MAX_BYTES};
use crate::output::RenderOptions;
use clap::{Parser, ValueEnum};
use extgroup_core::FilterInput;
use std::path::PathBuf;

/// Group the files under a directory by extension.
#[derive(Debug, Parser)]
#[command(name = "extgroup", author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan (prompted for when omitted)
    pub path: Option<PathBuf>,

    /// Skip files smaller than this many bytes
    #[arg(short = 's', long, value_name = "BYTES")]
    pub min_size: Option<String>,

    /// Skip files last modified before this day (YYYY-MM-DD or DD.MM.YYYY)
    #[arg(short = 'a', long, value_name = "DATE")]
    pub modified_after: Option<String>,

    /// Keep only files with exactly this extension, e.g. ".txt"
    #[arg(short, long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Show each file's last-modified date (text output)
    #[arg(short = 'd', long)]
    pub show_dates: bool,

    /// Append per-extension totals (text output)
    #[arg(long)]
    pub summary: bool,

    /// Log file path
    #[arg(long, value_name = "FILE", env = "EXTGROUP_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Rotate the log once it reaches this many bytes
    #[arg(long, value_name = "BYTES", env = "EXTGROUP_LOG_MAX_BYTES", default_value_t = DEFAULT_LOG_MAX_BYTES)]
    pub log_max_bytes: usize,

    /// Number of rotated log files to keep
    #[arg(long, value_name = "N", env = "EXTGROUP_LOG_BACKUPS", default_value_t = DEFAULT_LOG_BACKUPS)]
    pub log_backups: usize,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl Args {
    pub fn filter_input(&self) -> FilterInput {
        FilterInput {
            min_size: self.min_size.clone(),
            modified_after: self.modified_after.clone(),
            extension: self.extension.clone(),
        }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            path: self.log_file.clone(),
            max_bytes: self.log_max_bytes,
            backups: self.log_backups,
            level: self.log_level.clone(),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_dates: self.show_dates,
            summary: self.summary,
        }
    }
}
