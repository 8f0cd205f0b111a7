use std::{fs, path::Path};

use tracing::{debug, info, instrument};

use super::{Config, ConfigPaths, StoreOptions};
use crate::{PathStateError, Result};

impl Config {
    /// Loads the configuration from the default location
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined or the
    /// file exists but cannot be read, parsed or validated.
    pub fn load_default() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        Self::load(&path)
    }

    /// Loads a configuration file
    ///
    /// A missing file is not an error: defaults are returned instead.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The TOML content is invalid or contains unknown keys
    /// - A value fails validation
    #[instrument]
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            info!("No configuration file found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| PathStateError::IoError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let config = Self::parse(&content, Some(path))?;
        debug!(?config, "Configuration loaded");

        Ok(config)
    }

    /// Parses configuration from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML is invalid or a value fails validation
    pub fn from_toml_str(content: &str) -> Result<Config> {
        Self::parse(content, None)
    }

    /// Serializes the configuration back to TOML
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| PathStateError::ConfigValidation {
            component: "config".to_string(),
            details: format!("failed to serialize: {e}"),
        })
    }

    /// Checks values that the type system cannot
    ///
    /// # Errors
    /// Returns `PathStateError::InvalidConfigField` for out-of-range values
    pub fn validate(&self) -> Result<()> {
        if self.store.max_notify_depth > StoreOptions::MAX_NOTIFY_DEPTH_LIMIT {
            return Err(PathStateError::InvalidConfigField {
                field: "max_notify_depth".to_string(),
                component: "store".to_string(),
                reason: format!("must be at most {}", StoreOptions::MAX_NOTIFY_DEPTH_LIMIT),
            });
        }

        Ok(())
    }

    fn parse(content: &str, path: Option<&Path>) -> Result<Config> {
        let config: Config =
            toml::from_str(content).map_err(|e| PathStateError::toml_parse(e, path))?;

        config.validate()?;
        Ok(config)
    }
}
