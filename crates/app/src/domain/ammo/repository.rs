//! Ammo Repository

use jiff_sqlx::DateTime as SqlxDateTime;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::ammo::{
    data::NewAmmo,
    records::{AmmoId, AmmoRecord},
};

const INSERT_AMMO_SQL: &str = include_str!("sql/insert_ammo.sql");
const GET_AMMO_SQL: &str = include_str!("sql/get_ammo.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAmmoRepository;

impl PgAmmoRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn insert_ammo(
        &self,
        conn: &mut PgConnection,
        ammo: &NewAmmo,
    ) -> Result<AmmoRecord, sqlx::Error> {
        query_as::<Postgres, AmmoRecord>(INSERT_AMMO_SQL)
            .bind(&ammo.brand)
            .bind(&ammo.caliber)
            .bind(ammo.quantity)
            .bind(ammo.price)
            .bind(SqlxDateTime::from(ammo.purchase_date))
            .fetch_one(&mut *conn)
            .await
    }

    pub(crate) async fn get_ammo(
        &self,
        conn: &mut PgConnection,
        ammo: AmmoId,
    ) -> Result<Option<AmmoRecord>, sqlx::Error> {
        query_as::<Postgres, AmmoRecord>(GET_AMMO_SQL)
            .bind(ammo.into_i32())
            .fetch_optional(&mut *conn)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for AmmoRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self::stored(
            AmmoId::from_i32(row.try_get("id")?),
            NewAmmo {
                caliber: row.try_get("caliber")?,
                brand: row.try_get("brand")?,
                price: row.try_get::<Decimal, _>("price")?,
                quantity: row.try_get("quantity")?,
                purchase_date: row
                    .try_get::<SqlxDateTime, _>("purchase_date")?
                    .to_jiff(),
            },
        ))
    }
}
