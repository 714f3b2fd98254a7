//! Logging Infrastructure
//!
//! Tracing events go to the in-app log pane (tui-logger) and, when a log
//! directory is configured and exists, to a daily rolling file.

use roster_core::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logger
///
/// `RUST_LOG` wins over the configured level.
pub fn init_logger(config: &Config) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let file_layer = config.log_dir.as_deref().and_then(|dir| {
        let log_path = Path::new(dir);
        if !log_path.is_dir() {
            return None;
        }
        let file_appender = tracing_appender::rolling::daily(log_path, "roster");
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(false)
                .boxed(),
        )
    });

    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(file_layer)
        .with(env_filter)
        .try_init()?;

    // log crate adapter for anything that logs through `log`
    let level = config
        .log_level
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Info);
    tui_logger::init_logger(level).ok();
    tui_logger::set_default_level(level);

    Ok(())
}
