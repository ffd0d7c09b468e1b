use ammo_tracker::{config::DatabaseConfig, console::TerminalConsole, context::AppContext, shell};

pub(crate) async fn run(database: &DatabaseConfig) -> Result<(), String> {
    let context = AppContext::from_config(database)
        .map_err(|error| format!("failed to initialise storage: {error}"))?;

    let mut console = TerminalConsole::new();

    shell::run(&mut console, &context.workflow())
        .await
        .map_err(|error| format!("console error: {error}"))
}
