use clap::Args;
use rust_decimal::Decimal;

use ammo_tracker::{
    console::{Console, TerminalConsole},
    domain::ammo::pricing::price_per_cartridge,
    report::format_rand,
};

#[derive(Debug, Clone, Copy, Args)]
pub(crate) struct PriceArgs {
    /// Total price paid, in rand
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) price: Decimal,

    /// Number of rounds bought
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) quantity: i32,
}

pub(crate) async fn run(args: PriceArgs) -> Result<(), String> {
    let per_round = price_per_cartridge(args.price, args.quantity)
        .map_err(|error| format!("cannot price rounds: {error}"))?;

    TerminalConsole::new()
        .write_line(&format!("Price Per Round: {}", format_rand(per_round)))
        .await
        .map_err(|error| format!("console error: {error}"))
}
