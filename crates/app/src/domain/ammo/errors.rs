//! Ammo service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmmoServiceError {
    #[error("missing required data")]
    MissingRequiredData(#[source] Error),

    #[error("invalid data")]
    InvalidData(#[source] Error),

    #[error("could not connect to storage")]
    Connection(#[source] Error),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl AmmoServiceError {
    /// Wraps a failure to obtain a connection, keeping it apart from statement failures.
    pub(crate) fn connection(error: Error) -> Self {
        Self::Connection(error)
    }
}

impl From<Error> for AmmoServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData(error),
            Some(ErrorKind::CheckViolation) => Self::InvalidData(error),
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
