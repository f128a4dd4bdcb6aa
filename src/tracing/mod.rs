use std::path::Path;

use tracing::Event;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::FormatFields;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use crate::config::LoggingConfig;

#[derive(Clone)]
struct MuraqibFormat {
    engine_name: String,
}

impl<S, N> FormatEvent<S, N> for MuraqibFormat
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S");

        write!(
            writer,
            "{} {}::{}::{}::{}::",
            metadata.level(),
            timestamp,
            self.engine_name,
            metadata.file().unwrap_or("unknown"),
            metadata.line().unwrap_or(0),
        )?;

        // Format the actual message
        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Install the global subscriber: terminal output always, plus a daily
/// rolling log file when a directory is configured. The returned guard keeps
/// the non-blocking file writer alive and must be held by the caller.
pub fn setup_tracing(
    engine_name: &str,
    logging: &LoggingConfig,
) -> Option<WorkerGuard> {
    // RUST_LOG wins; INFO is the default
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let format = MuraqibFormat {
        engine_name: engine_name.to_string(),
    };

    let terminal_layer = tracing_subscriber::fmt::Layer::default()
        .with_ansi(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .event_format(format.clone());

    let (file_layer, guard) = match &logging.directory {
        Some(directory) => {
            let logs_dir = Path::new(directory);
            match std::fs::create_dir_all(logs_dir) {
                Ok(()) => {
                    let (layer, guard) = make_file_layer(engine_name, logs_dir, format.clone());
                    (Some(layer), Some(guard))
                },
                Err(e) => {
                    eprintln!("Failed to create logs directory {}: {}", logs_dir.display(), e);
                    (None, None)
                },
            }
        },
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(terminal_layer)
        .with(file_layer);

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error setting up logging: {}", e);
    }

    guard
}

fn make_file_layer<S>(
    engine_name: &str,
    logs_dir: &Path,
    format: MuraqibFormat,
) -> (Box<dyn Layer<S> + Send + Sync>, WorkerGuard)
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup> + Send + Sync + 'static,
{
    let appender = RollingFileAppender::new(Rotation::DAILY, logs_dir, format!("{}.log", engine_name));
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::Layer::default()
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .event_format(format)
        .with_writer(non_blocking)
        .boxed();

    (layer, guard)
}
