use ammo_tracker::{
    config::DatabaseConfig,
    console::TerminalConsole,
    context::AppContext,
    shell::TEST_CREATED_HEADING,
};

use super::view::finish;

pub(crate) async fn run(database: &DatabaseConfig) -> Result<(), String> {
    let context = AppContext::from_config(database)
        .map_err(|error| format!("failed to initialise storage: {error}"))?;

    let outcome = context.workflow().create_test_record().await;

    finish(&mut TerminalConsole::new(), &outcome, TEST_CREATED_HEADING).await
}
