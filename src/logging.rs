//! Installs the process-wide `tracing` subscriber.
//!
//! The subscriber is configured once at startup from a [`LogConfig`];
//! nothing below reads logging toggles from global state.
use tracing_subscriber::EnvFilter;


/// Logging settings chosen by the hosting program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Emit job, batch and partition progress.
    pub verbose: bool,
}


impl LogConfig {
    /// Returns the default filter directive.
    pub fn directive(&self) -> &'static str {
        if self.verbose { "parboost=debug" } else { "parboost=warn" }
    }
}


/// Installs a fmt subscriber writing to stderr.
/// `RUST_LOG` takes precedence over `config`.
/// Calling this more than once keeps the first subscriber.
pub fn init(config: LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
