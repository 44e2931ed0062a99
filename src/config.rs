//! Application configuration loaded from environment variables.

use serde::Deserialize;

use crate::profile::Activation;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Route Activation ===
    /// Activation selector naming the active route group
    /// ("typeone" or "typetwo"). Unset or unrecognized means no
    /// group is registered.
    #[serde(default)]
    pub active_profile: Option<String>,

    // === Server Configuration ===
    /// HTTP server listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Resolve the route-group activation from the selector.
    ///
    /// An unset or unrecognized selector is not a configuration error;
    /// it resolves to [`Activation::Neither`].
    pub fn activation(&self) -> Activation {
        Activation::from_selector(self.active_profile.as_deref())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            active_profile: None,
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_port(), 8080);
        assert_eq!(default_log_level(), "info");

        let config = Config::default();
        assert!(config.active_profile.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn activation_resolves_from_selector() {
        let config = Config {
            active_profile: Some("typeone".to_string()),
            ..Config::default()
        };
        assert_eq!(config.activation(), Activation::TypeOne);

        let config = Config {
            active_profile: Some("typetwo".to_string()),
            ..Config::default()
        };
        assert_eq!(config.activation(), Activation::TypeTwo);
    }

    #[test]
    fn missing_selector_resolves_to_neither() {
        let config = Config::default();
        assert_eq!(config.activation(), Activation::Neither);
    }

    #[test]
    fn unknown_selector_resolves_to_neither() {
        let config = Config {
            active_profile: Some("staging".to_string()),
            ..Config::default()
        };
        assert_eq!(config.activation(), Activation::Neither);
    }
}
