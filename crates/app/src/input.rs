//! Prompt, parse and validate loops for single fields.
//!
//! Every field is asked for until the user types something that both parses
//! and passes its validation predicate. An empty line, end of input, or the
//! word `cancel` in any letter case stops the whole form instead.

use std::{io, str::FromStr};

use jiff::civil::{Date, DateTime, Time};
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    console::Console,
    domain::ammo::data::NewAmmo,
    validation::{is_non_empty, is_non_negative_price, is_not_future, is_positive_quantity},
};

pub const INVALID_INPUT_NOTICE: &str = "Invalid input. Please try again or type 'cancel' to abort.";

const CANCEL_TOKEN: &str = "cancel";

pub const CALIBER_PROMPT: &str = "Caliber: ";
pub const BRAND_PROMPT: &str = "Brand: ";
pub const QUANTITY_PROMPT: &str = "Quantity: ";
pub const PRICE_PROMPT: &str = "Price (R): ";
pub const PURCHASE_DATE_PROMPT: &str = "Purchase Date (yyyy-MM-dd): ";

/// Result of asking for a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Collected<T> {
    Accepted(T),

    /// The user asked to abandon the form.
    Cancelled,
}

/// Whether a raw line is the user backing out rather than answering.
pub fn is_cancellation(raw: &str) -> bool {
    raw.is_empty() || raw.eq_ignore_ascii_case(CANCEL_TOKEN)
}

/// Ask for one field until it parses and validates, or the user cancels.
///
/// # Errors
///
/// Only console I/O failures are returned; bad input is reported to the user
/// and asked for again.
pub async fn collect<C, T, P, V>(
    console: &mut C,
    prompt: &str,
    parse: P,
    validate: V,
) -> io::Result<Collected<T>>
where
    C: Console,
    P: Fn(&str) -> Option<T>,
    V: Fn(&T) -> bool,
{
    loop {
        console.write(prompt).await?;

        let Some(raw) = console.read_line().await? else {
            return Ok(Collected::Cancelled);
        };

        if is_cancellation(&raw) {
            return Ok(Collected::Cancelled);
        }

        if let Some(value) = parse(&raw)
            && validate(&value)
        {
            return Ok(Collected::Accepted(value));
        }

        debug!(prompt, "input rejected, asking again");

        console.write_line(INVALID_INPUT_NOTICE).await?;
    }
}

pub fn parse_quantity(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

pub fn parse_price(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

/// Accepts `yyyy-mm-dd` (taken as midnight) or an ISO 8601 civil date-time.
pub fn parse_purchase_date(raw: &str) -> Option<DateTime> {
    let raw = raw.trim();

    raw.parse::<DateTime>()
        .or_else(|_| raw.parse::<Date>().map(|date| date.to_datetime(Time::midnight())))
        .ok()
}

/// # Errors
///
/// Returns console I/O failures.
pub async fn collect_text<C: Console>(
    console: &mut C,
    prompt: &str,
) -> io::Result<Collected<String>> {
    collect(console, prompt, |raw| Some(raw.to_string()), |value| is_non_empty(value)).await
}

/// # Errors
///
/// Returns console I/O failures.
pub async fn collect_quantity<C: Console>(
    console: &mut C,
    prompt: &str,
) -> io::Result<Collected<i32>> {
    collect(console, prompt, parse_quantity, |quantity| {
        is_positive_quantity(*quantity)
    })
    .await
}

/// # Errors
///
/// Returns console I/O failures.
pub async fn collect_price<C: Console>(
    console: &mut C,
    prompt: &str,
) -> io::Result<Collected<Decimal>> {
    collect(console, prompt, parse_price, |price| is_non_negative_price(*price)).await
}

/// # Errors
///
/// Returns console I/O failures.
pub async fn collect_purchase_date<C: Console>(
    console: &mut C,
    prompt: &str,
) -> io::Result<Collected<DateTime>> {
    collect(console, prompt, parse_purchase_date, |date| is_not_future(*date)).await
}

/// Ask for all five purchase fields in order.
///
/// Cancelling any field abandons the whole form; later fields are not asked for.
///
/// # Errors
///
/// Returns console I/O failures.
pub async fn collect_new_ammo<C: Console>(console: &mut C) -> io::Result<Collected<NewAmmo>> {
    let Collected::Accepted(caliber) = collect_text(console, CALIBER_PROMPT).await? else {
        return Ok(Collected::Cancelled);
    };

    let Collected::Accepted(brand) = collect_text(console, BRAND_PROMPT).await? else {
        return Ok(Collected::Cancelled);
    };

    let Collected::Accepted(quantity) = collect_quantity(console, QUANTITY_PROMPT).await? else {
        return Ok(Collected::Cancelled);
    };

    let Collected::Accepted(price) = collect_price(console, PRICE_PROMPT).await? else {
        return Ok(Collected::Cancelled);
    };

    let Collected::Accepted(purchase_date) =
        collect_purchase_date(console, PURCHASE_DATE_PROMPT).await?
    else {
        return Ok(Collected::Cancelled);
    };

    Ok(Collected::Accepted(NewAmmo {
        caliber,
        brand,
        price,
        quantity,
        purchase_date,
    }))
}
