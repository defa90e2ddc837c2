//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() -> anyhow::Result<()> {
    init_logger_with_file(None, None, None)
}

/// Initialize the logger with optional JSON format and file output
///
/// `RUST_LOG` takes precedence over `log_level`. File output rolls daily and
/// is only enabled when `log_dir` exists.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: Option<bool>,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir
        .map(Path::new)
        .filter(|dir| dir.exists())
        .map(|dir| tracing_appender::rolling::daily(dir, "seating-server"));

    let result = match (json.unwrap_or(false), file_appender) {
        (true, Some(writer)) => subscriber.json().with_writer(writer).try_init(),
        (true, None) => subscriber.json().try_init(),
        (false, Some(writer)) => subscriber.with_ansi(false).with_writer(writer).try_init(),
        (false, None) => subscriber.try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to initialize logger: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_files(dir: &Path) -> Vec<std::path::PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("seating-server"))
            })
            .collect()
    }

    #[test]
    fn test_json_logs_roll_into_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap().to_string();

        let installed = init_logger_with_file(Some("info"), Some(true), Some(&dir_str));

        // The daily appender opens its file as soon as it is built
        let files = log_files(dir.path());
        assert_eq!(files.len(), 1, "expected one rolling log file: {files:?}");

        if installed.is_ok() {
            tracing::error!(table_id = 7, "logger smoke line");
            let contents = std::fs::read_to_string(&files[0]).unwrap();
            let line = contents
                .lines()
                .find(|l| l.contains("logger smoke line"))
                .unwrap_or_else(|| panic!("log line missing from {contents:?}"));
            let json: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(json["level"], "ERROR");
            assert_eq!(json["fields"]["table_id"], 7);

            // Only one global subscriber per process
            assert!(init_logger().is_err());
        }
    }

    #[test]
    fn test_missing_log_dir_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");

        let _ = init_logger_with_file(None, Some(false), missing.to_str());
        assert!(!missing.exists());
    }
}
