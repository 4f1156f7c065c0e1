//! # royal-front-desk
//!
//! Terminal front desk for Royal Stay: loads configuration, installs the
//! tracing subscriber, and drives the scripted scenarios in [`scenarios`]
//! against a [`royal_core::FrontDesk`].

pub mod config;
pub mod error;
pub mod scenarios;

pub use config::FrontDeskConfig;
pub use error::{AppError, AppResult, ConfigError, ConfigResult};
pub use scenarios::{Scenario, ScenarioReport};

use tracing_subscriber::EnvFilter;

/// Level used before the configuration has been read.
pub const BOOTSTRAP_LOG_LEVEL: &str = "info";

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Installs the global subscriber. `RUST_LOG` wins over `level`.
///
/// Logs go to stderr so scenario reports on stdout stay clean.
pub fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs `f` under a temporary stderr subscriber at [`BOOTSTRAP_LOG_LEVEL`].
///
/// Config loading happens before the configured level is known; its
/// warnings go through here instead of being dropped.
pub fn with_bootstrap_logging<T>(f: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(BOOTSTRAP_LOG_LEVEL))
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_logging_surfaces_rejected_override() {
        let (loaded, rejected) = with_bootstrap_logging(|| {
            let mut loaded = FrontDeskConfig::default();
            let rejected = loaded.apply_overrides(|key| {
                (key == crate::config::ENV_BOOKING_POLICY).then(|| "strikt".to_string())
            });
            (loaded, rejected)
        });
        assert_eq!(loaded, FrontDeskConfig::default());
        assert_eq!(rejected.len(), 1);
    }
}
