//! Plain-text rendering of ammo records.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::ammo::records::AmmoRecord;

pub const CURRENCY_SYMBOL: &str = "R";

/// Formats an amount in rand with two decimal places, rounding halves away from zero.
pub fn format_rand(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    format!("{CURRENCY_SYMBOL}{rounded}")
}

/// Labelled fields of a record, including the derived price per round.
///
/// Unsaved records have no `ID` line.
pub fn record_details(record: &AmmoRecord) -> Vec<(&'static str, String)> {
    let mut details = Vec::with_capacity(7);

    if let Some(id) = record.id() {
        details.push(("ID", id.to_string()));
    }

    details.extend([
        ("Brand", record.brand().to_string()),
        ("Caliber", record.caliber().to_string()),
        ("Quantity", record.quantity().to_string()),
        ("Total Price", format_rand(record.price())),
        ("Price Per Round", format_rand(record.price_per_round())),
        ("Purchase Date", record.purchase_date().date().to_string()),
    ]);

    details
}

/// Lays details out as a staircase, each line indented further than the last.
pub fn tree_lines(details: &[(&str, String)]) -> Vec<String> {
    details
        .iter()
        .enumerate()
        .map(|(depth, (label, value))| format!("{}└─ {label}: {value}", " ".repeat(depth * 3)))
        .collect()
}
