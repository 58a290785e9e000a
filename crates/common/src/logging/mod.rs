//! Logging subsystem.

mod errors;
pub mod manager;
pub mod types;

#[cfg(test)]
mod tests;

pub use errors::LoggingError;
pub use manager::{build_filter, init};
pub use types::{parse_rotation, FileLoggingConfig, LoggerConfig, StdoutConfig};

// Re-export tracing-appender types for convenience
pub use tracing_appender::rolling::Rotation;
