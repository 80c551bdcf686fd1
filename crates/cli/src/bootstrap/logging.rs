use goalgate_domain::{PollerError, Settings};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{info, Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// `[YYYY-MM-DD HH:MM:SS] [LEVEL] message`, local time.
pub struct LogLineFormat;

impl LogLineFormat {
    pub fn label(level: &Level) -> &'static str {
        if *level == Level::ERROR {
            "ERROR"
        } else if *level == Level::WARN {
            "WARNING"
        } else if *level == Level::INFO {
            "INFO"
        } else {
            "DEBUG"
        }
    }
}

impl<S, N> FormatEvent<S, N> for LogLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(writer, "[{}] [{}] ", now, Self::label(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Maps the configured level onto a filter directive. `warning` is accepted
/// as an alias of `warn`.
pub fn filter_directive(level: &str) -> String {
    match level.trim().to_ascii_lowercase().as_str() {
        "warning" => "warn".to_string(),
        "" => "info".to_string(),
        other => other.to_string(),
    }
}

/// Installs the global subscriber: the append-only log file plus an
/// optional stdout mirror, both in the same line format.
pub fn init_logging(settings: &Settings) -> Result<PathBuf, PollerError> {
    let log_path = settings.paths.log_file_path();

    if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            PollerError::Logging(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| {
            PollerError::Logging(format!("Failed to open {}: {}", log_path.display(), e))
        })?;

    let filter = EnvFilter::try_new(filter_directive(&settings.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .event_format(LogLineFormat)
        .with_writer(Mutex::new(file));

    let stdout_layer = settings.logging.stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .event_format(LogLineFormat)
            .with_writer(std::io::stdout)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| PollerError::Logging(format!("Failed to install subscriber: {}", e)))?;

    info!(level = %settings.logging.level, path = %log_path.display(), "Logging initialized");
    Ok(log_path)
}
