use clap::Args;

use ammo_tracker::{
    config::DatabaseConfig,
    console::{Console, TerminalConsole},
    context::AppContext,
    domain::ammo::records::AmmoId,
    shell::{self, DETAILS_HEADING},
    workflow::Outcome,
};

#[derive(Debug, Clone, Copy, Args)]
pub(crate) struct ViewArgs {
    /// Id of the stored purchase
    #[arg(long)]
    pub(crate) id: AmmoId,
}

pub(crate) async fn run(database: &DatabaseConfig, args: ViewArgs) -> Result<(), String> {
    let context = AppContext::from_config(database)
        .map_err(|error| format!("failed to initialise storage: {error}"))?;

    let outcome = context.workflow().view_record(args.id).await;

    finish(&mut TerminalConsole::new(), &outcome, DETAILS_HEADING).await
}

/// Render a one-shot outcome, turning anything but success into an error.
pub(super) async fn finish<C: Console>(
    console: &mut C,
    outcome: &Outcome,
    success_heading: &str,
) -> Result<(), String> {
    match outcome {
        Outcome::Success(_) => shell::render_outcome(console, outcome, success_heading)
            .await
            .map_err(|error| format!("console error: {error}")),
        Outcome::NotFound(id) => Err(format!("no ammo found with ID {id}")),
        Outcome::Failed(message) => Err(message.clone()),
        Outcome::Cancelled | Outcome::Rejected => Err("nothing was stored".to_string()),
    }
}
