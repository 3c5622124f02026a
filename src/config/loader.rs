// src/config/loader.rs
//! TOML configuration loader
//!
//! Files are merged over the built-in defaults, so a file only needs the
//! keys it wants to change.

use crate::config::EmulatorConfig;
use crate::error::{EmulatorError, EmulatorResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads [`EmulatorConfig`] from an optional TOML file
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader that yields the built-in defaults
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Loader that merges the given file over the defaults
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load and validate the configuration
    pub fn load(&self) -> EmulatorResult<EmulatorConfig> {
        let mut merged = toml::Value::try_from(EmulatorConfig::default())
            .map_err(|e| EmulatorError::Configuration(e.to_string()))?;

        if let Some(path) = &self.config_path {
            let overlay = Self::load_config_file(path)?;
            Self::merge_toml_values(&mut merged, overlay);
            info!(path = %path.display(), "loaded configuration file");
        } else {
            debug!("no configuration file given, using built-in defaults");
        }

        let config: EmulatorConfig = merged.try_into().map_err(|e: toml::de::Error| {
            EmulatorError::Configuration(format!("Failed to deserialize config: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Write a configuration out as pretty TOML
    pub fn export_config<P: AsRef<Path>>(config: &EmulatorConfig, path: P) -> EmulatorResult<()> {
        let toml_content = toml::to_string_pretty(config)
            .map_err(|e| EmulatorError::Configuration(e.to_string()))?;

        std::fs::write(path, toml_content)?;
        Ok(())
    }

    fn load_config_file(path: &Path) -> EmulatorResult<toml::Value> {
        if !path.exists() {
            return Err(EmulatorError::Configuration(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let value: toml::Value = toml::from_str(&content)?;
        Ok(value)
    }

    fn merge_toml_values(base: &mut toml::Value, overlay: toml::Value) {
        match (base, overlay) {
            (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
                for (key, value) in overlay_table {
                    if let Some(base_value) = base_table.get_mut(&key) {
                        Self::merge_toml_values(base_value, value);
                    } else {
                        base_table.insert(key, value);
                    }
                }
            }
            (base_value, overlay_value) => {
                *base_value = overlay_value;
            }
        }
    }
}
