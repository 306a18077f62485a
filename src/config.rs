use crate::constants;
use crate::errors::{ConciergeError, ConciergeResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rules_source: String,
    pub typing_interval_ms: u64,
    pub reply_delay_ms: u64,
    pub no_match_delay_ms: u64,
    pub link_delay_ms: u64,
    pub greeting_delay_ms: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_source: constants::DEFAULT_RULES_SOURCE.to_string(),
            typing_interval_ms: constants::TYPING_INTERVAL_MS,
            reply_delay_ms: constants::REPLY_DELAY_MS,
            no_match_delay_ms: constants::NO_MATCH_DELAY_MS,
            link_delay_ms: constants::LINK_DELAY_MS,
            greeting_delay_ms: constants::GREETING_DELAY_MS,
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> ConciergeResult<()> {
    let config_path = get_config_path()?;

    // If config exists, load it
    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)
            .map_err(|e| ConciergeError::config_error(format!("Failed to read config file: {}", e)))?;

        let mut config: Config = serde_json::from_str(&config_str)
            .map_err(|e| ConciergeError::config_error(format!("Failed to parse config: {}", e)))?;

        apply_env_overrides(&mut config);
        validate_config(&config)?;

        *CONFIG.write().unwrap() = config;
    } else {
        // Create default config
        let mut config = Config::default();
        apply_env_overrides(&mut config);

        fs::create_dir_all(config_path.parent().unwrap()).map_err(|e| {
            ConciergeError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| ConciergeError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, config_str)
            .map_err(|e| ConciergeError::config_error(format!("Failed to write config file: {}", e)))?;

        *CONFIG.write().unwrap() = config;
    }

    Ok(())
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(source) = env::var("CONCIERGE_RULES_SOURCE") {
        config.rules_source = source;
    }
}

fn get_config_path() -> ConciergeResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ConciergeError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("concierge").join("config.json"))
}

fn validate_config(config: &Config) -> ConciergeResult<()> {
    if config.rules_source.is_empty() {
        return Err(ConciergeError::config_error("rules_source is required"));
    }

    if config.typing_interval_ms == 0 {
        return Err(ConciergeError::config_error(
            "typing_interval_ms must be greater than 0",
        ));
    }

    if config.log_level.is_empty() {
        return Err(ConciergeError::config_error("log_level is required"));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

pub fn update_config(updated_config: Config) -> ConciergeResult<()> {
    validate_config(&updated_config)?;

    let config_path = get_config_path()?;
    let config_str = serde_json::to_string_pretty(&updated_config)
        .map_err(|e| ConciergeError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(&config_path, config_str)
        .map_err(|e| ConciergeError::config_error(format!("Failed to write config file: {}", e)))?;

    *CONFIG.write().unwrap() = updated_config;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_empty_rules_source() {
        let mut config = Config::default();
        config.rules_source = "".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_zero_typing_interval() {
        let mut config = Config::default();
        config.typing_interval_ms = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config::default();
        let serialized = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed.rules_source, config.rules_source);
        assert_eq!(parsed.typing_interval_ms, config.typing_interval_ms);
    }
}
