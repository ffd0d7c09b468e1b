//! Database connection management

use std::fmt;

use sqlx::{Connection, PgConnection, postgres::PgConnectOptions};
use zeroize::Zeroize;

/// Opaque connection descriptor (a `PostgreSQL` URL) handed in by configuration.
///
/// The value is never logged and is wiped from memory on drop.
#[derive(Clone)]
pub struct ConnectionDescriptor {
    url: String,
}

impl ConnectionDescriptor {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConnectionDescriptor(**redacted**)")
    }
}

impl Drop for ConnectionDescriptor {
    fn drop(&mut self) {
        self.url.zeroize();
    }
}

/// Where to open storage connections.
///
/// Holds parsed connect options rather than a pool: every operation opens a
/// fresh connection and closes it again, so an unreachable server is reported
/// by the operation that needed it, with its own error and without retrying.
#[derive(Clone)]
pub struct Db {
    options: PgConnectOptions,
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db")
            .field("host", &self.options.get_host())
            .field("port", &self.options.get_port())
            .field("database", &self.options.get_database())
            .finish_non_exhaustive()
    }
}

impl Db {
    #[must_use]
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    /// Open a connection for a single statement.
    ///
    /// Callers close it once the statement has run.
    ///
    /// # Errors
    ///
    /// Returns the connect error as-is when no connection can be opened.
    pub async fn connect(&self) -> Result<PgConnection, sqlx::Error> {
        PgConnection::connect_with(&self.options).await
    }
}

/// Parse a connection descriptor without contacting the server.
///
/// # Errors
///
/// Returns an error if the descriptor is not a valid connection URL.
pub fn connect_options(
    descriptor: &ConnectionDescriptor,
) -> Result<PgConnectOptions, sqlx::Error> {
    descriptor.expose().parse()
}
