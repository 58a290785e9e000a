use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid filter directive '{0}'")]
    InvalidDirective(String),

    #[error("unknown log rotation '{0}'")]
    UnknownRotation(String),

    #[error("failed to create log file appender: {0}")]
    FileAppender(#[from] tracing_appender::rolling::InitError),

    #[error("global subscriber already installed")]
    AlreadyInitialized,
}
