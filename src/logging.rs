//! Console logging setup.

use crate::Config;
use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

/// Map a `JEEVES_LOG_LEVEL` value onto a tracing level. Unknown values mean `INFO`.
pub fn max_level(log_level: &str) -> Level {
    log_level.trim().parse().unwrap_or(Level::INFO)
}

/// Only this crate's events reach the console; HTTP internals stay silent.
pub fn filter(log_level: &str) -> Targets {
    Targets::new().with_target("jeeves", max_level(log_level))
}

/// Install a stdout subscriber at the configured level.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init(config: &Config) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter(&config.log_level))
        .with(fmt_layer)
        .try_init();
}
