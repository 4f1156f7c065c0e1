//! # Front Desk Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (--policy)               (highest priority)            │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     ROYAL_STAY_HOTEL_NAME=Royal Stay Downtown                          │
//! │     ROYAL_STAY_BOOKING_POLICY=strict                                   │
//! │     ROYAL_STAY_LOG_LEVEL=debug                                         │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/front-desk/front-desk.toml (Linux)                       │
//! │     ~/Library/Application Support/com.royalstay.front-desk/ (macOS)    │
//! │                                                                         │
//! │  4. Default Values                        (lowest priority)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # front-desk.toml
//! [hotel]
//! name = "Royal Stay"
//! booking_policy = "permissive"  # permissive | strict
//!
//! [logging]
//! level = "info"  # any tracing EnvFilter directive, e.g. "royal_core=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use royal_core::BookingPolicy;

use crate::error::{ConfigError, ConfigResult};

pub const ENV_HOTEL_NAME: &str = "ROYAL_STAY_HOTEL_NAME";
pub const ENV_BOOKING_POLICY: &str = "ROYAL_STAY_BOOKING_POLICY";
pub const ENV_LOG_LEVEL: &str = "ROYAL_STAY_LOG_LEVEL";

// =============================================================================
// Hotel Settings
// =============================================================================

/// Settings describing the hotel itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelSettings {
    /// Name printed in report headers.
    #[serde(default = "default_hotel_name")]
    pub name: String,

    /// Whether bookings are checked for occupancy and input validity.
    #[serde(default)]
    pub booking_policy: BookingPolicy,
}

fn default_hotel_name() -> String {
    "Royal Stay".to_string()
}

impl Default for HotelSettings {
    fn default() -> Self {
        HotelSettings {
            name: default_hotel_name(),
            booking_policy: BookingPolicy::default(),
        }
    }
}

// =============================================================================
// Logging Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: default_log_level(),
        }
    }
}

// =============================================================================
// Front Desk Configuration
// =============================================================================

/// Complete configuration for the front desk binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontDeskConfig {
    #[serde(default)]
    pub hotel: HotelSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl FrontDeskConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (front-desk.toml)
    /// 3. Environment variables
    ///
    /// An explicitly given path must exist; the default path may be absent.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if explicit || path.exists() {
                info!(?path, "Loading front desk config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        // Rejected overrides are logged and leave the file value in place.
        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load_with_fallback(config_path).0
    }

    /// Like [`FrontDeskConfig::load_or_default`], but also hands back the
    /// error that forced the fallback.
    pub fn load_with_fallback(config_path: Option<PathBuf>) -> (Self, Option<ConfigError>) {
        match Self::load(config_path) {
            Ok(config) => (config, None),
            Err(e) => {
                warn!("Failed to load front desk config: {}. Using defaults.", e);
                (Self::default(), Some(e))
            }
        }
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.hotel.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "hotel.name must not be empty".into(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "logging.level must not be empty".into(),
            ));
        }

        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::InvalidValue(format!(
                "logging.level '{}' is not a valid filter: {}",
                self.logging.level, e
            )));
        }

        Ok(())
    }

    /// Applies overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Vec<ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup. Returns the overrides that
    /// were rejected and left the setting unchanged.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rejected = Vec::new();

        if let Some(name) = lookup(ENV_HOTEL_NAME) {
            debug!(name = %name, "Overriding hotel name from environment");
            self.hotel.name = name;
        }

        if let Some(policy) = lookup(ENV_BOOKING_POLICY) {
            match policy.parse::<BookingPolicy>() {
                Ok(parsed) => {
                    debug!(policy = %policy, "Overriding booking policy from environment");
                    self.hotel.booking_policy = parsed;
                }
                Err(e) => {
                    warn!(policy = %policy, error = %e, "Unknown booking policy in environment");
                    rejected.push(ConfigError::InvalidValue(format!(
                        "{}='{}': {}",
                        ENV_BOOKING_POLICY, policy, e
                    )));
                }
            }
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }

        rejected
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "royalstay", "front-desk")
            .map(|dirs| dirs.config_dir().join("front-desk.toml"))
    }

    pub fn booking_policy(&self) -> BookingPolicy {
        self.hotel.booking_policy
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = FrontDeskConfig::default();
        assert_eq!(config.hotel.name, "Royal Stay");
        assert_eq!(config.booking_policy(), BookingPolicy::Permissive);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_file() {
        let config = FrontDeskConfig::from_toml_str(
            r#"
            [hotel]
            name = "Royal Stay Downtown"
            booking_policy = "strict"

            [logging]
            level = "royal_core=debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.hotel.name, "Royal Stay Downtown");
        assert_eq!(config.booking_policy(), BookingPolicy::Strict);
        assert_eq!(config.logging.level, "royal_core=debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = FrontDeskConfig::from_toml_str("[hotel]\nname = \"Annex\"\n").unwrap();
        assert_eq!(config.hotel.name, "Annex");
        assert_eq!(config.booking_policy(), BookingPolicy::Permissive);
        assert_eq!(config.logging, LoggingSettings::default());
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let result = FrontDeskConfig::from_toml_str("[hotel]\nbooking_policy = \"lax\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_validation() {
        let mut config = FrontDeskConfig::default();
        config.hotel.name = "   ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));

        let mut config = FrontDeskConfig::default();
        config.logging.level = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));

        let mut config = FrontDeskConfig::default();
        config.logging.level = "royal_core=loud".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_overrides() {
        let mut config = FrontDeskConfig::default();
        let rejected = config.apply_overrides(lookup_from(&[
            (ENV_HOTEL_NAME, "Royal Stay Uptown"),
            (ENV_BOOKING_POLICY, "STRICT"),
            (ENV_LOG_LEVEL, "warn"),
        ]));

        assert!(rejected.is_empty());
        assert_eq!(config.hotel.name, "Royal Stay Uptown");
        assert_eq!(config.booking_policy(), BookingPolicy::Strict);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_bad_policy_override_is_reported() {
        let mut config = FrontDeskConfig::default();
        config.hotel.booking_policy = BookingPolicy::Strict;
        let rejected = config.apply_overrides(lookup_from(&[(ENV_BOOKING_POLICY, "strikt")]));

        assert_eq!(config.booking_policy(), BookingPolicy::Strict);
        assert_eq!(rejected.len(), 1);
        match &rejected[0] {
            ConfigError::InvalidValue(msg) => {
                assert!(msg.contains(ENV_BOOKING_POLICY));
                assert!(msg.contains("strikt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_file_fallback_is_reported() {
        let dir = std::env::temp_dir().join(format!("royal-stay-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("front-desk.toml");
        std::fs::write(&path, "[hotel]\nbooking_policy = \"lax\"\n").unwrap();

        let (config, fallback) = FrontDeskConfig::load_with_fallback(Some(path.clone()));
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(matches!(fallback, Some(ConfigError::Parse(_))));
        assert_eq!(config, FrontDeskConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let path = std::env::temp_dir().join("royal-stay-does-not-exist/front-desk.toml");
        assert!(matches!(
            FrontDeskConfig::load(Some(path.clone())),
            Err(ConfigError::Io(_))
        ));

        let (config, fallback) = FrontDeskConfig::load_with_fallback(Some(path));
        assert_eq!(config.hotel.name, "Royal Stay");
        assert!(matches!(fallback, Some(ConfigError::Io(_))));
    }

    #[test]
    fn test_toml_serialization() {
        let config = FrontDeskConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("booking_policy = \"permissive\""));
        let parsed = FrontDeskConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }
}
