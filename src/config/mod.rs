//! Settings loading for the payroll reference engine.
//!
//! This module loads the engine's settings from a YAML file: the HTTP bind
//! address, the fetch retry policy, the base URLs of external reference
//! endpoints, and where each dated table is loaded from.
//!
//! # Example
//!
//! ```no_run
//! use payroll_reference::config::SettingsLoader;
//!
//! let settings = SettingsLoader::load("./config/settings.yaml").unwrap();
//! println!("Listening on {}", settings.server.bind);
//! ```

mod loader;
mod types;

pub use loader::{
    BIND_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, RESOURCE_ENV_PREFIX, SettingsLoader,
};
pub use types::{DEFAULT_BIND, FetchSettings, ServerSettings, Settings, TableSourceConfig};
