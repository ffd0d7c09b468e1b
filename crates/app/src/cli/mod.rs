use clap::{Parser, Subcommand};

use ammo_tracker::config::{DatabaseConfig, LoggingConfig};

mod menu;
mod price;
mod seed;
mod view;

#[derive(Debug, Parser)]
#[command(name = "ammo-tracker", about = "Ammunition purchase tracker", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    database: DatabaseConfig,

    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Interactive main menu
    Menu,

    /// Show one stored purchase
    View(view::ViewArgs),

    /// Store the fixed test purchase
    Seed,

    /// Calculate the price of a single round
    Price(price::PriceArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command.unwrap_or(Commands::Menu) {
            Commands::Menu => menu::run(&self.database).await,
            Commands::View(args) => view::run(&self.database, args).await,
            Commands::Seed => seed::run(&self.database).await,
            Commands::Price(args) => price::run(args).await,
        }
    }
}
