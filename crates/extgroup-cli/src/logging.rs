/// Log sink setup: `tracing` events go to a size-rotated file.
///
/// The active file is `path`; once it has grown past `max_bytes` it is
/// renamed to `path.1` (older segments shift up) and a fresh file is
/// started before the next record. Records are never split across
/// segments. At most `backups` rotated segments are kept.
use anyhow::{anyhow, Context, Result};
use file_rotate::compression::Compression;
use file_rotate::suffix::AppendCount;
use file_rotate::{ContentLimit, FileRotate};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILE: &str = "extgroup.log";
pub const DEFAULT_LOG_MAX_BYTES: usize = 5_000_000;
pub const DEFAULT_LOG_BACKUPS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub path: PathBuf,
    pub max_bytes: usize,
    pub backups: usize,
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_FILE),
            max_bytes: DEFAULT_LOG_MAX_BYTES,
            backups: DEFAULT_LOG_BACKUPS,
            level: "info".into(),
        }
    }
}

/// Open the rotating writer described by `config`, creating the log
/// directory if needed.
pub fn open_log_writer(config: &LogConfig) -> Result<FileRotate<AppendCount>> {
    if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    Ok(FileRotate::new(
        &config.path,
        AppendCount::new(config.backups),
        ContentLimit::BytesSurpassed(config.max_bytes),
        Compression::None,
        #[cfg(unix)]
        None,
    ))
}

/// Install the global `tracing` subscriber. Call once, at startup.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let writer = open_log_writer(config)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("invalid log level '{}'", config.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(writer))
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn default_config_keeps_five_segments_of_five_megabytes() {
        let cfg = LogConfig::default();
        assert_eq!(cfg.max_bytes, 5_000_000);
        assert_eq!(cfg.backups, 5);
        assert_eq!(cfg.path, PathBuf::from("extgroup.log"));
    }

    #[test]
    fn writer_creates_missing_log_directory() {
        let tmp = TempDir::new().unwrap();
        let cfg = LogConfig {
            path: tmp.path().join("nested/logs/run.log"),
            ..LogConfig::default()
        };
        let mut writer = open_log_writer(&cfg).unwrap();
        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();

        assert!(cfg.path.exists());
    }

    /// Writing past `max_bytes` rotates the active file to `<path>.1`, and
    /// every segment holds whole records only.
    #[test]
    fn writer_rotates_when_size_limit_is_reached() {
        let tmp = TempDir::new().unwrap();
        let cfg = LogConfig {
            path: tmp.path().join("run.log"),
            max_bytes: 100,
            backups: 2,
            ..LogConfig::default()
        };
        let mut writer = open_log_writer(&cfg).unwrap();
        // One write per record, as the fmt subscriber does: 60 bytes each.
        for i in 0..5 {
            let record = format!("record-{i}-{}\n", "x".repeat(50));
            assert_eq!(record.len(), 60);
            writer.write_all(record.as_bytes()).unwrap();
        }
        writer.flush().unwrap();

        assert!(tmp.path().join("run.log").exists());
        assert!(tmp.path().join("run.log.1").exists());
        // Only `backups` rotated segments survive.
        assert!(!tmp.path().join("run.log.3").exists());

        for name in ["run.log", "run.log.1", "run.log.2"] {
            let path = tmp.path().join(name);
            if !path.exists() {
                continue;
            }
            let contents = fs::read_to_string(&path).unwrap();
            if contents.is_empty() {
                continue;
            }
            assert!(contents.ends_with('\n'), "{name} ends mid-record: {contents:?}");
            for line in contents.lines() {
                assert!(
                    line.starts_with("record-") && line.len() == 59,
                    "{name} holds a split record: {line:?}"
                );
            }
        }
    }
}
