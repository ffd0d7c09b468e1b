//! Field validation predicates.

use jiff::{Zoned, civil::DateTime};
use rust_decimal::Decimal;

/// True when `value` has something other than whitespace in it.
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_positive_quantity(quantity: i32) -> bool {
    quantity > 0
}

pub fn is_non_negative_price(price: Decimal) -> bool {
    price >= Decimal::ZERO
}

/// True when `date` is not later than the current local wall-clock time.
pub fn is_not_future(date: DateTime) -> bool {
    is_not_future_at(date, Zoned::now().datetime())
}

/// [`is_not_future`] against an explicit "now".
pub fn is_not_future_at(date: DateTime, now: DateTime) -> bool {
    date <= now
}
