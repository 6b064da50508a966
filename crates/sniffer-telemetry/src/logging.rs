//! Subscriber installation.
//!
//! JSON lines carry `timestamp`, `level`, `target`, the message and any
//! structured fields; the human format is the default `fmt` layout.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{LogOutput, TelemetryConfig, TelemetryError};

/// Install the global `tracing` subscriber described by `config`.
///
/// Fails if the filter directive is invalid, the log file cannot be opened,
/// or a global subscriber is already set.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(&config.log_level)?;
    let (writer, ansi) = make_writer(&config.output)?;

    if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(writer);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(ansi)
            .with_writer(writer);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    }

    tracing::info!(
        service = %config.service_name,
        json = config.json_logs,
        "Logging initialized"
    );

    Ok(())
}

fn build_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|e| TelemetryError::Config(e.to_string()))
}

fn make_writer(output: &LogOutput) -> Result<(BoxMakeWriter, bool), TelemetryError> {
    match output {
        LogOutput::Stdout => Ok((BoxMakeWriter::new(std::io::stdout), true)),
        LogOutput::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| TelemetryError::Output {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
            Ok((BoxMakeWriter::new(Mutex::new(file)), false))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directives() {
        assert!(build_filter("info").is_ok());
        assert!(build_filter("scan_service=debug,tower_http=info").is_ok());
    }

    #[test]
    fn test_build_filter_rejects_garbage() {
        assert!(matches!(
            build_filter("scan_service=notalevel"),
            Err(TelemetryError::Config(_))
        ));
    }

    #[test]
    fn test_file_writer_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.log");
        let (_writer, ansi) = make_writer(&LogOutput::File(path.clone())).unwrap();
        assert!(!ansi);
        assert!(path.exists());
    }

    #[test]
    fn test_file_writer_reports_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("dashboard.log");
        assert!(matches!(
            make_writer(&LogOutput::File(path)),
            Err(TelemetryError::Output { .. })
        ));
    }
}
