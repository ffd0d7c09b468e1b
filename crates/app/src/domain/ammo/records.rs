//! Ammo Records

use jiff::civil::DateTime;
use rust_decimal::Decimal;

use crate::{domain::ammo::data::NewAmmo, ids::TypedId};

/// Ammo Id
pub type AmmoId = TypedId<AmmoRecord>;

/// Ammo Record
///
/// One ammunition purchase. Fields are read-only once constructed, so the
/// derived [`AmmoRecord::price_per_round`] always agrees with the stored
/// price and quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct AmmoRecord {
    id: Option<AmmoId>,
    details: NewAmmo,
}

impl AmmoRecord {
    /// Builds an unsaved record from already validated input.
    #[must_use]
    pub fn new(details: NewAmmo) -> Self {
        Self { id: None, details }
    }

    /// Rebuilds a record read back from storage.
    #[must_use]
    pub(crate) fn stored(id: AmmoId, details: NewAmmo) -> Self {
        Self {
            id: Some(id),
            details,
        }
    }

    /// Storage-assigned id; `None` until the record is persisted.
    pub fn id(&self) -> Option<AmmoId> {
        self.id
    }

    pub fn caliber(&self) -> &str {
        &self.details.caliber
    }

    pub fn brand(&self) -> &str {
        &self.details.brand
    }

    pub fn price(&self) -> Decimal {
        self.details.price
    }

    pub fn quantity(&self) -> i32 {
        self.details.quantity
    }

    pub fn purchase_date(&self) -> DateTime {
        self.details.purchase_date
    }

    pub fn details(&self) -> &NewAmmo {
        &self.details
    }

    #[must_use]
    pub fn into_details(self) -> NewAmmo {
        self.details
    }

    /// Price of a single cartridge, or zero when the quantity is not positive.
    ///
    /// Never fails; see [`crate::domain::ammo::pricing::price_per_cartridge`]
    /// for the strict variant.
    pub fn price_per_round(&self) -> Decimal {
        if self.details.quantity <= 0 {
            return Decimal::ZERO;
        }

        self.details
            .price
            .checked_div(Decimal::from(self.details.quantity))
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal::Decimal;

    use super::*;

    fn purchase(price: i64, quantity: i32) -> AmmoRecord {
        AmmoRecord::new(NewAmmo {
            caliber: "9mm".to_string(),
            brand: "TestBrand".to_string(),
            price: Decimal::from(price),
            quantity,
            purchase_date: date(2024, 3, 9).at(0, 0, 0, 0),
        })
    }

    #[test]
    fn price_per_round_divides_price_by_quantity() {
        assert_eq!(purchase(300, 50).price_per_round(), Decimal::from(6));
    }

    #[test]
    fn price_per_round_keeps_fractional_cents() {
        let ammo = purchase(100, 3);

        assert_eq!(ammo.price_per_round().round_dp(2), Decimal::new(3333, 2));
    }

    #[test]
    fn price_per_round_is_zero_for_zero_quantity() {
        assert_eq!(purchase(300, 0).price_per_round(), Decimal::ZERO);
    }

    #[test]
    fn price_per_round_is_zero_for_negative_quantity() {
        assert_eq!(purchase(300, -5).price_per_round(), Decimal::ZERO);
    }

    #[test]
    fn new_records_have_no_id() {
        assert!(purchase(300, 50).id().is_none());
    }

    #[test]
    fn stored_records_keep_their_id() {
        let ammo = purchase(300, 50);
        let stored = AmmoRecord::stored(AmmoId::from_i32(12), ammo.details().clone());

        assert_eq!(stored.id(), Some(AmmoId::from_i32(12)));
        assert_eq!(stored.details(), ammo.details());
    }
}
