//! TOML configuration for the bridge tooling.

mod config;

pub use config::{
    BridgeConfig, Config, ConfigError, LoggingConfig, DEFAULT_LOG_FILE_PREFIX,
    DEFAULT_MINIMUM_COLLATERAL,
};
