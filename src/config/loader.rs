//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable prefix for credential overrides.
const ENV_PREFIX: &str = "MEDIACAT_";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration.
///
/// Reads the TOML file when a path is given, otherwise starts from defaults,
/// then applies environment overrides and validates. Validation failures,
/// most importantly a missing API key, are surfaced here before any probe
/// or construction attempt can run.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay credential fields from the environment.
///
/// Only the credential surface is overridable this way; tuning knobs stay in
/// the file.
fn apply_env_overrides(config: &mut AppConfig) {
    let fields: [(&str, &mut String); 6] = [
        ("API_KEY", &mut config.backend.api_key),
        ("AUTH_DOMAIN", &mut config.backend.auth_domain),
        ("PROJECT_ID", &mut config.backend.project_id),
        ("STORAGE_BUCKET", &mut config.backend.storage_bucket),
        ("MESSAGING_SENDER_ID", &mut config.backend.messaging_sender_id),
        ("APP_ID", &mut config.backend.app_id),
    ];

    for (suffix, slot) in fields {
        if let Ok(value) = std::env::var(format!("{}{}", ENV_PREFIX, suffix)) {
            *slot = value;
        }
    }
}
