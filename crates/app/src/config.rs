//! Configuration

use clap::Args;
use thiserror::Error;

use crate::database::ConnectionDescriptor;

/// Configuration problems that stop a use case before it reaches storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no database connection configured; set DATABASE_URL")]
    MissingConnectionDescriptor,
}

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true, global = true)]
    pub database_url: Option<String>,
}

impl DatabaseConfig {
    /// The configured connection descriptor, if any.
    ///
    /// A blank value counts as missing.
    pub fn descriptor(&self) -> Option<ConnectionDescriptor> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(ConnectionDescriptor::new)
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}
