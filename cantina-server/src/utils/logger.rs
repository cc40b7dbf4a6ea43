//! Logging Infrastructure
//!
//! - Console output, pretty in development and JSON otherwise
//! - Optional daily rotating files under `LOG_DIR`:
//!   `app/` for application logs, `access/` for the `http_access` target

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, filter, fmt, layer::SubscriberExt, prelude::*};

const ACCESS_TARGET: &str = "http_access";

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level used when `RUST_LOG` is unset (e.g. "info", "debug")
/// * `json_format` - JSON console output
/// * `log_dir` - Optional directory for daily rotated log files
///
/// ```no_run
/// cantina_server::init_logger("debug", false, None)?;
/// cantina_server::init_logger("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (json_console, pretty_console) = if json_format {
        let layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true);
        (None, Some(layer))
    };

    let (app_file, access_file) = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            let app_log_dir = log_dir.join("app");
            let access_log_dir = log_dir.join("access");
            fs::create_dir_all(&app_log_dir)?;
            fs::create_dir_all(&access_log_dir)?;

            let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
            let app_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::sync::Mutex::new(app_log))
                .with_filter(filter::filter_fn(|meta| meta.target() != ACCESS_TARGET));

            let access_log = RollingFileAppender::new(Rotation::DAILY, access_log_dir, "access");
            let access_layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(access_log))
                .with_filter(filter::filter_fn(|meta| meta.target() == ACCESS_TARGET));

            (Some(app_layer), Some(access_layer))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_console)
        .with(pretty_console)
        .with(app_file)
        .with(access_file)
        .try_init()?;

    Ok(())
}
