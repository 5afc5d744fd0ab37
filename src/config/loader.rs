//! Settings loading functionality.
//!
//! This module provides the [`SettingsLoader`] type for loading engine
//! settings from a YAML file and layering environment overrides on top.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::Settings;

/// Environment variable naming the settings file.
pub const CONFIG_PATH_ENV: &str = "PAYROLL_REFERENCE_CONFIG";

/// Settings file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "./config/settings.yaml";

/// Prefix of variables that override a resource URL, e.g.
/// `PAYROLL_REFERENCE_RESOURCE_SSS=https://...`.
pub const RESOURCE_ENV_PREFIX: &str = "PAYROLL_REFERENCE_RESOURCE_";

/// Variable overriding `server.bind`.
pub const BIND_ENV: &str = "PAYROLL_REFERENCE_BIND";

/// Loads engine settings.
///
/// # Example
///
/// ```no_run
/// use payroll_reference::config::SettingsLoader;
///
/// let settings = SettingsLoader::load("./config/settings.yaml")?;
/// println!("Serving {} tables", settings.tables.len());
/// # Ok::<(), payroll_reference::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SettingsLoader;

impl SettingsLoader {
    /// Loads and validates settings from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns the settings on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or fails validation (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Settings> {
        let path = path.as_ref();
        let settings = Self::load_yaml::<Settings>(path)?;
        Self::validate(&settings, path)?;
        Ok(settings)
    }

    /// Loads settings from `path`, then applies process environment overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> EngineResult<Settings> {
        let mut settings = Self::load(path)?;
        Self::apply_overrides(&mut settings, std::env::vars());
        Ok(settings)
    }

    /// Resolves the settings path from [`CONFIG_PATH_ENV`].
    pub fn config_path() -> String {
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    /// Applies override variables to `settings`.
    ///
    /// Resource keys are lower-cased, so `PAYROLL_REFERENCE_RESOURCE_WITHHOLDING_TAX`
    /// sets the `withholding_tax` resource. Unrelated variables are ignored.
    pub fn apply_overrides<I>(settings: &mut Settings, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, value) in vars {
            if name == BIND_ENV {
                settings.server.bind = value;
            } else if let Some(key) = name.strip_prefix(RESOURCE_ENV_PREFIX) {
                if !key.is_empty() {
                    settings.resources.insert(key.to_lowercase(), value);
                }
            }
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(settings: &Settings, path: &Path) -> EngineResult<()> {
        if settings.fetch.max_attempts == 0 {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: "fetch.max_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
