use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables read as configuration
pub const ENV_PREFIX: &str = "WEBPIFY_";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Colourise status lines when writing to a terminal
    pub color_enabled: bool,
    /// Print a per-run summary line
    pub summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color_enabled: true,
            summary: true,
        }
    }
}

impl AppConfig {
    /// Apply CLI argument overrides to the configuration
    pub fn apply_cli_overrides(&mut self, no_color: bool) {
        if no_color {
            self.output.color_enabled = false;
        }
    }
}

/// Loads layered configuration: environment over defaults
///
/// There is no configuration file; `WEBPIFY_OUTPUT__SUMMARY=false` style
/// variables are the only way to change the defaults.
pub struct ConfigManager {
    env_prefix: String,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Create a ConfigManager reading a different variable prefix (for testing)
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            env_prefix: prefix.to_string(),
        }
    }

    pub fn figment(&self) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Env::prefixed(&self.env_prefix).split("__"))
    }

    pub fn load(&self) -> Result<AppConfig> {
        self.figment()
            .extract()
            .context("Failed to load configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_environment() {
        let manager = ConfigManager::with_prefix("WEBPIFY_UNIT_TEST_UNSET_");
        let config = manager.load().unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(config.output.color_enabled);
        assert!(config.output.summary);
    }

    #[test]
    fn test_no_color_override() {
        let mut config = AppConfig::default();
        config.apply_cli_overrides(false);
        assert!(config.output.color_enabled);

        config.apply_cli_overrides(true);
        assert!(!config.output.color_enabled);
    }

    #[test]
    fn test_serialized_layer_round_trips_nested_keys() {
        let figment = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Serialized::default("output.summary", false));

        let config: AppConfig = figment.extract().unwrap();
        assert!(!config.output.summary);
        assert!(config.output.color_enabled);
    }
}
