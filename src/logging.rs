//! Logging configuration using tracing
//!
//! The TUI owns the terminal, so diagnostics only ever go to a file.

use std::path::PathBuf;
use anyhow::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV_VAR: &str = "DAPP_FORM_LOG";
const DEFAULT_FILTER: &str = "dapp_form=info,warn";
const LOG_FILE_NAME: &str = "dapp-form.log";

/// Initialize the logging subsystem
///
/// Logs are written to `<data_local_dir>/dapp-form/logs/`. The level comes
/// from `DAPP_FORM_LOG`, then `config_filter`, then the built-in default.
///
/// # Examples
/// ```bash
/// DAPP_FORM_LOG=debug dapp-form
/// ```
pub fn init(config_filter: Option<&str>) -> Result<PathBuf> {
    init_in(get_log_directory(), config_filter)
}

/// Same as [`init`] with an explicit directory. Fails before installing
/// anything when the directory cannot be created.
pub fn init_in(log_dir: PathBuf, config_filter: Option<&str>) -> Result<PathBuf> {
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config_filter.unwrap_or(DEFAULT_FILTER)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("dapp-form {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(log_dir)
}

fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("dapp-form").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_app_scoped() {
        let dir = get_log_directory();
        assert!(dir.ends_with("dapp-form/logs"));
    }

    #[test]
    fn test_uncreatable_directory_is_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = init_in(file.path().join("logs"), None);
        assert!(result.is_err());
    }
}
