//! Configuration module for ontofactory
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ONTOFACTORY_*)
//! 3. Project config (./ontofactory.toml)
//! 4. User config (<config-dir>/ontofactory/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, log_warnings, user_config_path, with_env_overrides, ConfigWarning,
    PROJECT_CONFIG_FILE,
};
pub use types::{
    CacheConfig, Config, ConverterConfig, DefaultsConfig, LibraryConfig, RemoteConfig,
};
