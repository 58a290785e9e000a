use std::{
    fs, io,
    path::{Path, PathBuf},
};

use alloy_primitives::Address;
use lbc_bridge::InitParams;
use lbc_common::logging::{parse_rotation, FileLoggingConfig, LoggerConfig, LoggingError};
use lbc_primitives::{parse_wei, ParseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default value for `minimum_collateral` in [`BridgeConfig`], 0.03 of a unit.
pub const DEFAULT_MINIMUM_COLLATERAL: &str = "30000000000000000";

/// Default value for `log_file_prefix` in [`LoggingConfig`].
pub const DEFAULT_LOG_FILE_PREFIX: &str = "lbc";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config: {0}")]
    Io(#[from] io::Error),

    #[error("parsing config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("bridge.minimum_collateral: {0}")]
    MinimumCollateral(#[from] ParseError),

    #[error("logging: {0}")]
    Logging(#[from] LoggingError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Administrative owner of the bridge.
    pub owner: Address,

    /// Address quotes must name to be executed on this bridge.
    pub bridge_address: Address,

    /// Minimum provider bond in wei, as a decimal (or `0x` hex) string so it
    /// can exceed the TOML integer range.
    #[serde(default = "default_minimum_collateral")]
    pub minimum_collateral: String,
}

fn default_minimum_collateral() -> String {
    DEFAULT_MINIMUM_COLLATERAL.to_owned()
}

impl BridgeConfig {
    /// Parameters to initialize a bridge with.
    pub fn init_params(&self) -> Result<InitParams, ConfigError> {
        Ok(InitParams {
            owner: self.owner,
            minimum_collateral: parse_wei(&self.minimum_collateral)?,
            bridge_address: self.bridge_address,
        })
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Directory path for file-based logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Prefix for log file names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_prefix: Option<String>,

    /// Rotation of log files: "minutely", "hourly", "daily" or "never".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_rotation: Option<String>,

    /// Use JSON format for logs instead of compact format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_format: Option<bool>,

    /// Extra filter directives, e.g. `lbc_bridge=debug`.
    #[serde(default)]
    pub directives: Vec<String>,
}

impl LoggingConfig {
    /// Builds the logger configuration for the service called `service_name`.
    pub fn logger_config(&self, service_name: &str) -> Result<LoggerConfig, ConfigError> {
        let json = self.json_format.unwrap_or(false);
        let mut config = LoggerConfig::new(service_name.to_owned()).with_json_logging(json);
        for d in &self.directives {
            config = config.with_directive(d.clone());
        }

        if let Some(dir) = &self.log_dir {
            let prefix = self
                .log_file_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_FILE_PREFIX.to_owned());
            let mut file = FileLoggingConfig::new(dir.clone(), prefix).with_json_format(json);
            if let Some(rotation) = &self.log_rotation {
                file = file.with_rotation(parse_rotation(rotation)?);
            }
            config = config.with_file_logging(file);
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bridge: BridgeConfig,

    /// Logging configuration (optional section in TOML).
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use lbc_common::logging::Rotation;
    use lbc_primitives::Wei;

    use super::*;

    const FULL: &str = r#"
        [bridge]
        owner = "0x1111111111111111111111111111111111111111"
        bridge_address = "0xb1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1"
        minimum_collateral = "1000000000000000000"

        [logging]
        log_dir = "/tmp/lbc-logs"
        log_rotation = "hourly"
        json_format = true
        directives = ["lbc_bridge=debug"]
    "#;

    #[test]
    fn test_config_load() {
        let config = Config::from_toml_str(FULL).unwrap();
        let params = config.bridge.init_params().unwrap();
        assert_eq!(params.owner, Address::repeat_byte(0x11));
        assert_eq!(params.bridge_address, Address::repeat_byte(0xb1));
        assert_eq!(
            params.minimum_collateral,
            Wei::from(1_000_000_000_000_000_000u64)
        );

        let logger = config.logging.logger_config("lbc-cli").unwrap();
        assert_eq!(logger.service_name, "lbc-cli");
        assert!(logger.stdout_config.json_format);
        assert_eq!(logger.directives, vec!["lbc_bridge=debug".to_string()]);
        let file = logger.file_logging_config.unwrap();
        assert_eq!(file.directory, PathBuf::from("/tmp/lbc-logs"));
        assert_eq!(file.file_name_prefix, DEFAULT_LOG_FILE_PREFIX);
        assert_eq!(file.rotation, Rotation::HOURLY);
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_toml_str(
            r#"
            [bridge]
            owner = "0x1111111111111111111111111111111111111111"
            bridge_address = "0xb1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1"
            "#,
        )
        .unwrap();
        assert_eq!(config.bridge.minimum_collateral, DEFAULT_MINIMUM_COLLATERAL);
        assert_eq!(
            config.bridge.init_params().unwrap().minimum_collateral,
            Wei::from(30_000_000_000_000_000u64)
        );

        let logger = config.logging.logger_config("lbc-cli").unwrap();
        assert_eq!(logger.service_name, "lbc-cli");
        assert!(logger.file_logging_config.is_none());
        assert!(!logger.stdout_config.json_format);
    }

    #[test]
    fn test_invalid_values() {
        let bad_amount = r#"
            [bridge]
            owner = "0x1111111111111111111111111111111111111111"
            bridge_address = "0xb1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1"
            minimum_collateral = "lots"
        "#;
        let config = Config::from_toml_str(bad_amount).unwrap();
        assert!(matches!(
            config.bridge.init_params(),
            Err(ConfigError::MinimumCollateral(_))
        ));

        let missing_owner = r#"
            [bridge]
            bridge_address = "0xb1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1"
        "#;
        assert!(matches!(
            Config::from_toml_str(missing_owner),
            Err(ConfigError::Parse(_))
        ));

        let logging = LoggingConfig {
            log_dir: Some(PathBuf::from("/tmp")),
            log_rotation: Some("weekly".to_owned()),
            ..Default::default()
        };
        assert!(matches!(
            logging.logger_config("x"),
            Err(ConfigError::Logging(LoggingError::UnknownRotation(_)))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL.as_bytes()).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.logging.json_format, Some(true));

        let missing = file.path().with_extension("missing");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io(_))));
    }
}
