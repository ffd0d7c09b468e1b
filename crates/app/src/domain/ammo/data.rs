//! Ammo Data

use jiff::civil::DateTime;
use rust_decimal::Decimal;

/// New Ammo Data
///
/// A purchase as entered by the user, before storage assigns it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAmmo {
    pub caliber: String,
    pub brand: String,

    /// Total price paid for the box.
    pub price: Decimal,

    /// Number of cartridges.
    pub quantity: i32,

    pub purchase_date: DateTime,
}
