//! Pricing

use rust_decimal::Decimal;
use thiserror::Error;

/// Invalid arguments passed to [`price_per_cartridge`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Quantity was zero or negative.
    #[error("quantity must be greater than zero when calculating price per cartridge, got {0}")]
    InvalidQuantity(i32),

    /// Price was below zero.
    #[error("price cannot be negative, got {0}")]
    NegativePrice(Decimal),
}

/// Calculates the price of a single cartridge.
///
/// Unlike [`crate::domain::ammo::records::AmmoRecord::price_per_round`], this
/// refuses to produce a value for inputs that make no sense.
///
/// # Errors
///
/// - [`PricingError::InvalidQuantity`]: `quantity` is zero or negative.
/// - [`PricingError::NegativePrice`]: `price` is below zero.
pub fn price_per_cartridge(price: Decimal, quantity: i32) -> Result<Decimal, PricingError> {
    if quantity <= 0 {
        return Err(PricingError::InvalidQuantity(quantity));
    }

    if price < Decimal::ZERO {
        return Err(PricingError::NegativePrice(price));
    }

    price
        .checked_div(Decimal::from(quantity))
        .ok_or(PricingError::InvalidQuantity(quantity))
}
