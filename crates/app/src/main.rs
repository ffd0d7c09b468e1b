//! Ammo Tracker CLI

use std::process::ExitCode;

use clap::Parser;

use ammo_tracker::observability;

use crate::cli::Cli;

mod cli;

#[tokio::main]
pub async fn main() -> ExitCode {
    _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = observability::init_subscriber(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        return ExitCode::FAILURE;
    }

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            #[expect(
                clippy::print_stderr,
                reason = "final error goes to the user, not only the log"
            )]
            {
                eprintln!("{message}");
            }

            ExitCode::FAILURE
        }
    }
}
