//! App Context

use std::{fmt, sync::Arc};

use thiserror::Error;
use tracing::warn;

use crate::{
    config::DatabaseConfig,
    database::{self, ConnectionDescriptor, Db},
    domain::ammo::{AmmoService, PgAmmoService},
    workflow::AmmoWorkflow,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("invalid database connection string")]
    Database(#[source] sqlx::Error),
}

/// Services wired from configuration.
///
/// `ammo` is `None` when no connection descriptor was supplied; the workflow
/// reports that as a configuration error the first time it is used.
#[derive(Clone)]
pub struct AppContext {
    pub ammo: Option<Arc<dyn AmmoService>>,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("ammo", &self.ammo.is_some())
            .finish()
    }
}

impl AppContext {
    /// Build application context from database configuration.
    ///
    /// No connection is opened here.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection string cannot be parsed.
    pub fn from_config(config: &DatabaseConfig) -> Result<Self, AppInitError> {
        let Some(descriptor) = config.descriptor() else {
            warn!("DATABASE_URL is not set; storage is unavailable");
            return Ok(Self { ammo: None });
        };

        Self::from_descriptor(&descriptor)
    }

    /// # Errors
    ///
    /// Returns an error when the connection string cannot be parsed.
    pub fn from_descriptor(descriptor: &ConnectionDescriptor) -> Result<Self, AppInitError> {
        let options = database::connect_options(descriptor).map_err(AppInitError::Database)?;

        Ok(Self {
            ammo: Some(Arc::new(PgAmmoService::new(Db::new(options)))),
        })
    }

    #[must_use]
    pub fn workflow(&self) -> AmmoWorkflow {
        AmmoWorkflow::new(self.ammo.clone())
    }
}
