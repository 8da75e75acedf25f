use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::configuration::{LogFormat, LoggerSettings};

const LOG_FILE_NAME: &str = "login-demo.log";

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level.
///
/// The returned guard flushes the file writer on drop; keep it alive for as
/// long as the process logs.
pub fn init(logger: &LoggerSettings) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logger.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // console layer for tracing-subscriber
    let json_console = (logger.format == LogFormat::Json).then(|| {
        fmt::Layer::new()
            .with_span_events(FmtSpan::CLOSE)
            .json()
    });
    let pretty_console = (logger.format == LogFormat::Pretty).then(|| fmt::Layer::new().pretty());

    // file appender layer for tracing-subscriber
    let (file, guard) = match &logger.file {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::Layer::new().with_writer(non_blocking).json();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_console)
        .with(pretty_console)
        .with(file)
        .init();
    guard
}
