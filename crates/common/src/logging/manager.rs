//! Logging initialization.

use std::io;

use tracing::*;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    fmt::{layer, writer::BoxMakeWriter},
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use super::{errors::LoggingError, types::LoggerConfig};

/// Builds the level filter: INFO by default, overridden by `RUST_LOG`, with the
/// configured directives applied last.
pub fn build_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggingError> {
    let mut filt = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    for d in &config.directives {
        let directive = d
            .parse()
            .map_err(|_| LoggingError::InvalidDirective(d.clone()))?;
        filt = filt.add_directive(directive);
    }

    Ok(filt)
}

/// Initializes the logging subsystem with the provided config.
///
/// Fails if a global subscriber is already installed.
pub fn init(config: LoggerConfig) -> Result<(), LoggingError> {
    // Each layer gets its own filter, EnvFilter isn't Clone.
    let stdout_filt = build_filter(&config)?;

    let console = if config.stdout_config.use_stderr {
        BoxMakeWriter::new(io::stderr)
    } else {
        BoxMakeWriter::new(io::stdout)
    };

    // Configure console logging with JSON or compact format
    let stdout_sub = if config.stdout_config.json_format {
        layer()
            .json()
            .with_writer(console)
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(stdout_filt)
            .boxed()
    } else {
        layer()
            .compact()
            .with_writer(console)
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(stdout_filt)
            .boxed()
    };

    // Build optional file logging layer
    let file_layer = match config.file_logging_config.as_ref() {
        Some(file_config) => {
            let file_appender = RollingFileAppender::builder()
                .rotation(file_config.rotation.clone())
                .filename_prefix(&file_config.file_name_prefix)
                .build(&file_config.directory)?;
            let file_filt = build_filter(&config)?;

            let layer = if file_config.json_format {
                layer()
                    .json()
                    .with_writer(file_appender)
                    .with_ansi(false) // No color codes in files
                    .with_filter(file_filt)
                    .boxed()
            } else {
                layer()
                    .compact()
                    .with_writer(file_appender)
                    .with_ansi(false) // No color codes in files
                    .with_filter(file_filt)
                    .boxed()
            };
            Some(layer)
        }
        None => None,
    };

    // with() accepts Option<Layer>
    tracing_subscriber::registry()
        .with(stdout_sub)
        .with(file_layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    info!(
        service_name = %config.service_name,
        file_logging = config.file_logging_config.is_some(),
        "logging initialized"
    );
    Ok(())
}
