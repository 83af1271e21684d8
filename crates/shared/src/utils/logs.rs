use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Card service crates log at `info`; dependencies only surface warnings.
const FILE_DIRECTIVES: &str = "warn,card=info,shared=info";

/// Same as the file, minus the driver and exporter chatter that would loop
/// back into the exporter.
const OTEL_DIRECTIVES: &str = "warn,card=info,shared=info,sqlx=off,opentelemetry=off";

fn log_dir(is_dev: bool) -> &'static str {
    if is_dev { "./logs" } else { "/var/log/card-service" }
}

/// Daily rotation appends the date, e.g. `card-service.log.2024-03-01`.
fn log_file_name(component: &str) -> String {
    format!("{component}.log")
}

/// Installs the global subscriber. Keep the returned value alive for the
/// lifetime of the process: dropping it flushes and stops the file writer.
pub struct Logger {
    _guard: WorkerGuard,
    provider: Option<SdkLoggerProvider>,
}

impl Logger {
    pub fn new(component: &str, is_dev: bool) -> Self {
        let appender =
            RollingFileAppender::new(Rotation::DAILY, log_dir(is_dev), log_file_name(component));
        let (writer, guard) = non_blocking(appender);

        let file_layer = fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(EnvFilter::new(FILE_DIRECTIVES));

        // Console output is opt-in through RUST_LOG.
        let console_layer = fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")));

        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        let provider = (!is_dev).then(|| SdkLoggerProvider::builder().build());

        match &provider {
            Some(provider) => registry
                .with(
                    OpenTelemetryTracingBridge::new(provider)
                        .with_filter(EnvFilter::new(OTEL_DIRECTIVES)),
                )
                .init(),
            None => registry.init(),
        }

        Self {
            _guard: guard,
            provider,
        }
    }

    pub fn shutdown(self) {
        if let Some(Err(e)) = self.provider.as_ref().map(SdkLoggerProvider::shutdown) {
            eprintln!("Failed to shut down log provider: {e}");
        }
    }
}
