//! Configuration manager.
//!
//! Keeps named forecast configurations in memory, seeded with the standard
//! presets.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{ConfigError, ConfigResult, Validate};
use crate::forecast::ForecastConfig;

/// Registry of named forecast configurations.
///
/// # Example
///
/// ```rust
/// use sensorcast_config::ConfigManager;
///
/// let manager = ConfigManager::new();
/// let names = manager.list().unwrap();
/// assert!(names.contains(&"UNIT.1HZ".to_string()));
///
/// // Presets cannot be removed
/// assert!(manager.delete("UNIT.1HZ").is_err());
/// ```
pub struct ConfigManager {
    configs: RwLock<HashMap<String, ForecastConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Creates a manager holding the standard presets.
    pub fn new() -> Self {
        let manager = Self::empty();
        manager.load_standard_configs();
        manager
    }

    /// Creates a manager with no configurations.
    pub fn empty() -> Self {
        Self {
            configs: RwLock::new(HashMap::new()),
        }
    }

    fn load_standard_configs(&self) {
        for preset in [ForecastConfig::weather_station(), ForecastConfig::unit_rate()] {
            let name = preset.name.clone();
            let registered = self.register(preset);
            debug_assert!(
                registered.is_ok(),
                "standard config {name} rejected: {registered:?}"
            );
        }
    }

    fn read(&self) -> ConfigResult<RwLockReadGuard<'_, HashMap<String, ForecastConfig>>> {
        self.configs
            .read()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {}", e)))
    }

    fn write(&self) -> ConfigResult<RwLockWriteGuard<'_, HashMap<String, ForecastConfig>>> {
        self.configs
            .write()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {}", e)))
    }

    /// Registers a configuration, replacing any writable one of the same name.
    pub fn register(&self, config: ForecastConfig) -> ConfigResult<()> {
        config.validate_or_error()?;

        let mut configs = self.write()?;
        if let Some(existing) = configs.get(&config.name) {
            if existing.read_only {
                return Err(ConfigError::ReadOnly {
                    key: config.name.clone(),
                });
            }
        }

        configs.insert(config.name.clone(), config);
        Ok(())
    }

    /// Gets a configuration by name.
    pub fn get(&self, name: &str) -> ConfigResult<ForecastConfig> {
        self.read()?
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::NotFound {
                key: name.to_string(),
            })
    }

    /// Lists configuration names in sorted order.
    pub fn list(&self) -> ConfigResult<Vec<String>> {
        let mut names: Vec<String> = self.read()?.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Deletes a configuration. Returns `false` if it did not exist.
    pub fn delete(&self, name: &str) -> ConfigResult<bool> {
        let mut configs = self.write()?;

        if let Some(config) = configs.get(name) {
            if config.read_only {
                return Err(ConfigError::ReadOnly {
                    key: name.to_string(),
                });
            }
        }

        Ok(configs.remove(name).is_some())
    }

    /// Parses and registers a JSON configuration, returning its name.
    pub fn load_json(&self, json: &str) -> ConfigResult<String> {
        let config = ForecastConfig::from_json(json)?;
        let name = config.name.clone();
        self.register(config)?;
        Ok(name)
    }

    /// Parses and registers a TOML configuration, returning its name.
    pub fn load_toml(&self, text: &str) -> ConfigResult<String> {
        let config = ForecastConfig::from_toml(text)?;
        let name = config.name.clone();
        self.register(config)?;
        Ok(name)
    }
}
