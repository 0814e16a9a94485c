use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("GALLEON_").split("_"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    validate_config(&config)?;
    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    let config: Config =
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate settings figment cannot catch on its own
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.search.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "search.base_url must not be empty".to_string(),
        ));
    }
    if !config.search.base_url.starts_with("http://")
        && !config.search.base_url.starts_with("https://")
    {
        return Err(ConfigError::ValidationError(format!(
            "search.base_url must be an http(s) URL, got {:?}",
            config.search.base_url
        )));
    }
    if config.search.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "search.timeout_secs must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
