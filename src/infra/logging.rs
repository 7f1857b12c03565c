use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const LOG_FILE_NAME: &str = "chatmenu.log";

/// Routes tracing output to `<log_dir>/chatmenu.log`; the terminal belongs to the TUI.
pub fn init(config: &LogConfig, log_dir: &Path) -> Result<(), AppError> {
    let writer = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)
        .map_err(|error| AppError::LoggingInit(Box::new(error)))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)
}
