//! Ammo service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Connection, PgConnection};
use tracing::warn;

use crate::{
    database::Db,
    domain::ammo::{
        data::NewAmmo,
        errors::AmmoServiceError,
        records::{AmmoId, AmmoRecord},
        repository::PgAmmoRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgAmmoService {
    db: Db,
    repository: PgAmmoRepository,
}

impl PgAmmoService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAmmoRepository::new(),
        }
    }
}

#[async_trait]
impl AmmoService for PgAmmoService {
    async fn insert_ammo(&self, ammo: NewAmmo) -> Result<AmmoRecord, AmmoServiceError> {
        let mut conn = self
            .db
            .connect()
            .await
            .map_err(AmmoServiceError::connection)?;

        let created = self.repository.insert_ammo(&mut conn, &ammo).await;

        close(conn).await;

        created.map_err(AmmoServiceError::from)
    }

    async fn get_ammo(&self, ammo: AmmoId) -> Result<Option<AmmoRecord>, AmmoServiceError> {
        let mut conn = self
            .db
            .connect()
            .await
            .map_err(AmmoServiceError::connection)?;

        let found = self.repository.get_ammo(&mut conn, ammo).await;

        close(conn).await;

        found.map_err(AmmoServiceError::from)
    }
}

async fn close(conn: PgConnection) {
    if let Err(error) = conn.close().await {
        warn!(%error, "failed to close storage connection");
    }
}

#[automock]
#[async_trait]
pub trait AmmoService: Send + Sync {
    /// Stores a new purchase and returns it with its assigned id.
    async fn insert_ammo(&self, ammo: NewAmmo) -> Result<AmmoRecord, AmmoServiceError>;

    /// Retrieve a single purchase, or `None` when no row has this id.
    async fn get_ammo(&self, ammo: AmmoId) -> Result<Option<AmmoRecord>, AmmoServiceError>;
}
