use crate::constants::{DEFAULT_REFRESH_INTERVAL_SECONDS, LOG_FILE_NAME, env_vars};
use crate::dashboard::Section;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Section opened when no `--section` is given.
    #[serde(default)]
    pub default_section: Section,
    /// Division selected when no `--division` is given.
    #[serde(default = "default_division")]
    pub default_division: String,
    /// How often the interactive view redraws with fresh placeholder data.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_seconds: u64,
}

fn default_division() -> String {
    "north".to_string()
}

fn default_refresh_interval() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file_path: None,
            default_section: Section::default(),
            default_division: default_division(),
            refresh_interval_seconds: default_refresh_interval(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file means defaults; nothing is written until a setting is
    /// changed from the command line.
    ///
    /// # Environment Variables
    /// - `IPFL_LOG_FILE` - Override log file path
    /// - `IPFL_DEFAULT_SECTION` - Override the default section
    /// - `IPFL_REFRESH_INTERVAL` - Override the refresh interval in seconds
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Unreadable or invalid config file
    pub fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path)?
        } else {
            tracing::debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Overrides file values with environment variables when they are set
    /// and parse. Unparsable values are logged and ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(section) = std::env::var(env_vars::DEFAULT_SECTION) {
            match section.parse::<Section>() {
                Ok(section) => self.default_section = section,
                Err(e) => tracing::warn!("Ignoring {}: {e}", env_vars::DEFAULT_SECTION),
            }
        }

        if let Ok(interval) = std::env::var(env_vars::REFRESH_INTERVAL) {
            match interval.parse::<u64>() {
                Ok(interval) => self.refresh_interval_seconds = interval,
                Err(e) => tracing::warn!("Ignoring {}: {e}", env_vars::REFRESH_INTERVAL),
            }
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.log_file_path,
            &self.default_division,
            self.refresh_interval_seconds,
        )
    }

    /// Saves current configuration to the default config file location.
    ///
    /// # Notes
    /// - Creates config directory if it doesn't exist
    /// - Uses TOML format for storage
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        let config = if Path::new(&config_path).exists() {
            Config::load()?
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Showing defaults)");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        };

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Default Section:");
        println!("{} ({})", config.default_section, config.default_section.label());
        println!("────────────────────────────────────");
        println!("Default Division:");
        println!("{}", config.default_division);
        println!("────────────────────────────────────");
        println!("Refresh Interval:");
        println!("{} seconds", config.refresh_interval_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        tracing::info!("Saved configuration to {path}");
        Ok(())
    }

    /// Loads configuration from a custom file path without applying
    /// environment overrides.
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::DEFAULT_SECTION);
            std::env::remove_var(env_vars::REFRESH_INTERVAL);
        }
    }

    #[test]
    fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
log_file_path = "/custom/log/path"
default_section = "standings"
default_division = "south"
refresh_interval_seconds = 30
"#;
        fs::write(&config_path, config_content).unwrap();

        let config = Config::load_from_path(&config_path_str).unwrap();

        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.default_section, Section::Standings);
        assert_eq!(config.default_division, "south");
        assert_eq!(config.refresh_interval_seconds, 30);
    }

    #[test]
    fn test_config_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("dir").join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let original_config = Config {
            log_file_path: Some("/var/log/ipfl.log".to_string()),
            default_section: Section::Live,
            default_division: "east".to_string(),
            refresh_interval_seconds: 120,
        };
        original_config.save_to_path(&config_path_str).unwrap();
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("default_section = \"live\""));

        let loaded_config = Config::load_from_path(&config_path_str).unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_config_without_log_file_path_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(!toml_string.contains("log_file_path"));
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("ipfl_teletext"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("ipfl_teletext"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[test]
    fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.toml");
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[test]
    fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("malformed_config.toml");

        let malformed_content = r#"
default_section = "home"
[invalid_section
malformed = "data
"#;
        fs::write(&config_path, malformed_content).unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy());
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_config_unknown_section_value_rejected() {
        let result: Result<Config, _> = toml::from_str("default_section = \"weather\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation_valid_configs() {
        let temp_dir = tempdir().unwrap();
        let valid_configs = vec![
            Config::default(),
            Config {
                default_division: "Восток".to_string(),
                ..Config::default()
            },
            Config {
                log_file_path: Some(
                    temp_dir
                        .path()
                        .join("logs")
                        .join("ipfl.log")
                        .to_string_lossy()
                        .to_string(),
                ),
                refresh_interval_seconds: 5,
                ..Config::default()
            },
        ];

        for config in valid_configs {
            assert!(config.validate().is_ok(), "Config should be valid: {config:?}");
        }
    }

    #[test]
    fn test_config_validation_invalid_configs() {
        let invalid_configs = vec![
            Config {
                log_file_path: Some(String::new()),
                ..Config::default()
            },
            Config {
                default_division: "atlantis".to_string(),
                ..Config::default()
            },
            Config {
                refresh_interval_seconds: 1,
                ..Config::default()
            },
            Config {
                refresh_interval_seconds: 86_400,
                ..Config::default()
            },
        ];

        for config in invalid_configs {
            assert!(
                matches!(config.validate(), Err(AppError::Config(_))),
                "Config should be invalid: {config:?}"
            );
        }
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::LOG_FILE, "/env/log/path.log");
            std::env::set_var(env_vars::DEFAULT_SECTION, "schedule");
            std::env::set_var(env_vars::REFRESH_INTERVAL, "15");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.log_file_path, Some("/env/log/path.log".to_string()));
        assert_eq!(config.default_section, Section::Schedule);
        assert_eq!(config.refresh_interval_seconds, 15);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_environment_values_are_ignored() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::DEFAULT_SECTION, "weather");
            std::env::set_var(env_vars::REFRESH_INTERVAL, "soon");
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config, Config::default());

        clear_env();
    }
}
