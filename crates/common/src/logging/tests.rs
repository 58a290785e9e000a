//! Unit tests for the logging subsystem.

use tracing_subscriber::fmt::format::FmtSpan;

use super::{types::*, LoggingError, Rotation};

#[test]
fn test_logger_config_builder_pattern() {
    let config = LoggerConfig::new("test-service".to_string())
        .with_json_logging(true)
        .with_fmt_span(FmtSpan::NONE)
        .with_stderr(true)
        .with_directive("lbc_bridge=debug");

    assert_eq!(config.service_name, "test-service");
    assert!(config.stdout_config.json_format);
    assert!(config.stdout_config.use_stderr);
    assert_eq!(config.directives, vec!["lbc_bridge=debug".to_string()]);
    assert!(config.file_logging_config.is_none());
}

#[test]
fn test_file_logging_config_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = FileLoggingConfig::new(dir.path().to_path_buf(), "lbc".to_string());
    assert_eq!(cfg.rotation, Rotation::DAILY);
    assert!(!cfg.json_format);

    let cfg = cfg.with_rotation(Rotation::NEVER).with_json_format(true);
    assert_eq!(cfg.rotation, Rotation::NEVER);
    assert!(cfg.json_format);
}

#[test]
fn test_parse_rotation() {
    assert_eq!(parse_rotation("daily").unwrap(), Rotation::DAILY);
    assert_eq!(parse_rotation(" Hourly ").unwrap(), Rotation::HOURLY);
    assert_eq!(parse_rotation("never").unwrap(), Rotation::NEVER);
    assert!(matches!(
        parse_rotation("weekly"),
        Err(LoggingError::UnknownRotation(s)) if s == "weekly"
    ));
}

#[test]
fn test_build_filter_rejects_bad_directive() {
    let config = LoggerConfig::default().with_directive("lbc_bridge=loud");
    assert!(matches!(
        super::build_filter(&config),
        Err(LoggingError::InvalidDirective(_))
    ));

    let config = LoggerConfig::default().with_directive("lbc_bridge=trace");
    assert!(super::build_filter(&config).is_ok());
}
