use std::path::Path;

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE_PREFIX: &str = "lead_quality.log";

/// Daily rolling appender under `log_dir`; fails if the directory cannot be created
pub fn file_appender(log_dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir)
}

/// Initializes logging with a console layer and a JSON file layer.
///
/// Console output goes to stderr so stdout only carries the run summary.
/// If `log_dir` is unusable, only the console layer is installed.
/// The returned guard must stay alive until exit for file logs to flush.
pub fn init_logging(log_dir: &Path) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lead_quality=info"));
    match file_appender(log_dir) {
        Ok(appender) => {
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().json().with_writer(non_blocking_writer);
            let console_layer = fmt::layer().with_writer(std::io::stderr);

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .with(console_layer)
                .init();

            Some(guard)
        }
        Err(e) => {
            let console_layer = fmt::layer().with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .init();

            warn!(log_dir = %log_dir.display(), error = %e, "File logging disabled");
            None
        }
    }
}
