use anyhow::Context;
use std::fs::OpenOptions;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a level name, falling back to INFO on garbage.
pub fn parse_level(name: &str) -> Level {
    Level::from_str(name).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using INFO level.", name);
        Level::INFO
    })
}

/// Logs go to stderr so stdout only ever carries the description.
pub fn init_logging(log_level: Level, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level_filter = LevelFilter::from_level(log_level);
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file));
        tracing_subscriber::registry()
            .with(stderr_layer.with_filter(level_filter))
            .with(file_layer.with_filter(level_filter))
            .try_init()
            .context("failed to install tracing subscriber")?;
    } else {
        tracing_subscriber::registry()
            .with(stderr_layer.with_filter(level_filter))
            .try_init()
            .context("failed to install tracing subscriber")?;
    }
    Ok(())
}
