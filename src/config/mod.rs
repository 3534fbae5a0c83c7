//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! and optional TOML files using the `config` and `dotenvy` crates. Configuration
//! is loaded with the `TALENT_AHP` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use talent_ahp::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Strict consistency: {}", config.engine.strict_consistency);
//! ```

mod engine;
mod error;
mod logging;
mod talent;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use talent::{TalentConfig, TalentMapping};

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "TALENT_AHP";
const ENV_SEPARATOR: &str = "__";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Weight solving and reporting
    #[serde(default)]
    pub engine: EngineConfig,

    /// Talent labels
    #[serde(default)]
    pub talent: TalentConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TALENT_AHP` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TALENT_AHP__ENGINE__STRICT_CONSISTENCY=true` -> `engine.strict_consistency = true`
    /// - `TALENT_AHP__LOGGING__FILTER=debug` -> `logging.filter = "debug"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a TOML file, with environment overrides
    ///
    /// Environment variables take precedence over file values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, malformed, or values
    /// cannot be parsed into expected types.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let path = path.as_ref().to_string_lossy();
        let config = config::Config::builder()
            .add_source(config::File::new(&path, config::FileFormat::Toml))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.talent.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    fn environment() -> config::Environment {
        config::Environment::default()
            .prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("TALENT_AHP__ENGINE__STRICT_CONSISTENCY");
        env::remove_var("TALENT_AHP__ENGINE__TOP_N");
        env::remove_var("TALENT_AHP__ENGINE__CONSISTENCY_THRESHOLD");
        env::remove_var("TALENT_AHP__LOGGING__JSON");
    }

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_uses_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(config.talent.fallback_label, "General Talent");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_reads_nested_environment_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TALENT_AHP__ENGINE__STRICT_CONSISTENCY", "true");
        env::set_var("TALENT_AHP__ENGINE__TOP_N", "10");
        env::set_var("TALENT_AHP__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.engine.strict_consistency);
        assert_eq!(config.engine.top_n, 10);
        assert!(config.logging.json);
    }

    #[test]
    fn load_from_file_reads_all_sections() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let file = write_toml(
            r#"
            [engine]
            consistency_threshold = 0.05
            strict_consistency = true

            [talent]
            fallback_label = "Umum"
            labels = [{ criterion = "Robotika", label = "Engineering" }]

            [logging]
            filter = "warn"
            "#,
        );

        let config = AppConfig::load_from_file(file.path()).unwrap();

        assert_eq!(config.engine.consistency_threshold, 0.05);
        assert!(config.engine.strict_consistency);
        assert_eq!(config.engine.top_n, 5);
        assert_eq!(config.talent.fallback_label, "Umum");
        assert_eq!(
            config.talent.labels,
            vec![TalentMapping {
                criterion: "Robotika".to_string(),
                label: "Engineering".to_string(),
            }]
        );
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let file = write_toml("[engine]\ntop_n = 3\n");
        env::set_var("TALENT_AHP__ENGINE__TOP_N", "7");
        let result = AppConfig::load_from_file(file.path());
        clear_env();

        assert_eq!(result.unwrap().engine.top_n, 7);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from_file(dir.path().join("absent.toml"));

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn validate_reports_first_bad_section() {
        let mut config = AppConfig::default();
        config.engine.top_n = 0;
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTopN)));
    }
}
