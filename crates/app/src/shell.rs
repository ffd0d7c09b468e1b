//! Interactive main menu.

use std::{io, time::Duration};

use tracing::debug;

use crate::{
    console::Console,
    domain::ammo::records::AmmoId,
    report::{record_details, tree_lines},
    workflow::{AmmoWorkflow, Outcome},
};

pub const MENU_HEADER: &str = "=== Main Menu ===";
pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const INVALID_OPTION_NOTICE: &str = "Invalid option. Please try again.";
pub const VIEW_PROMPT: &str = "Enter Ammo ID to view: ";
pub const INVALID_ID_NOTICE: &str = "Invalid ID format.";
pub const RETURN_PROMPT: &str = "Press Enter to return to the main menu...";
pub const EXIT_NOTICE: &str = "Exiting. Stay safe!";

pub const CREATED_HEADING: &str = "Ammunition record created successfully!";
pub const TEST_CREATED_HEADING: &str = "Test Ammo creation succeeded!";
pub const DETAILS_HEADING: &str = "Ammo Details:";
pub const CANCELLED_NOTICE: &str = "Ammunition creation cancelled.";
pub const REJECTED_NOTICE: &str = "Ammunition record discarded.";

const INVALID_OPTION_PAUSE: Duration = Duration::from_millis(1500);

/// A main menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateTestAmmo,
    CreateAmmo,
    ViewAmmo,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 4] = [
        Self::CreateTestAmmo,
        Self::CreateAmmo,
        Self::ViewAmmo,
        Self::Exit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::CreateTestAmmo => "0",
            Self::CreateAmmo => "1",
            Self::ViewAmmo => "2",
            Self::Exit => "3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CreateTestAmmo => "Create Test Ammo",
            Self::CreateAmmo => "Create New Ammo",
            Self::ViewAmmo => "View Ammo Details",
            Self::Exit => "Exit",
        }
    }

    /// Matches a trimmed menu key.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();

        Self::ALL.into_iter().find(|choice| choice.key() == raw)
    }
}

/// Run the menu until the user exits or input ends.
///
/// # Errors
///
/// Returns console I/O failures; use case failures are rendered instead.
pub async fn run<C: Console>(console: &mut C, workflow: &AmmoWorkflow) -> io::Result<()> {
    loop {
        write_menu(console).await?;

        let Some(raw) = console.read_line().await? else {
            debug!("input closed, leaving menu");
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&raw) else {
            console.write_line(INVALID_OPTION_NOTICE).await?;
            console.pause(INVALID_OPTION_PAUSE).await;
            continue;
        };

        match choice {
            MenuChoice::CreateTestAmmo => {
                let outcome = workflow.create_test_record().await;
                render_outcome(console, &outcome, TEST_CREATED_HEADING).await?;
            }
            MenuChoice::CreateAmmo => {
                let outcome = workflow.create_record(console).await;
                render_outcome(console, &outcome, CREATED_HEADING).await?;
            }
            MenuChoice::ViewAmmo => view(console, workflow).await?,
            MenuChoice::Exit => {
                console.write_line(EXIT_NOTICE).await?;
                return Ok(());
            }
        }

        wait_for_enter(console).await?;
    }
}

async fn write_menu<C: Console>(console: &mut C) -> io::Result<()> {
    console.write_line(MENU_HEADER).await?;

    for choice in MenuChoice::ALL {
        console
            .write_line(&format!("[{}] {}", choice.key(), choice.label()))
            .await?;
    }

    console.write(CHOICE_PROMPT).await
}

async fn view<C: Console>(console: &mut C, workflow: &AmmoWorkflow) -> io::Result<()> {
    console.write(VIEW_PROMPT).await?;

    let raw = console.read_line().await?.unwrap_or_default();

    let Ok(id) = raw.parse::<AmmoId>() else {
        return console.write_line(INVALID_ID_NOTICE).await;
    };

    let outcome = workflow.view_record(id).await;

    render_outcome(console, &outcome, DETAILS_HEADING).await
}

async fn wait_for_enter<C: Console>(console: &mut C) -> io::Result<()> {
    console.write_line(RETURN_PROMPT).await?;
    console.read_line().await?;

    Ok(())
}

/// Write an outcome as text. Successful outcomes get `success_heading`
/// followed by the record's details.
///
/// # Errors
///
/// Returns console I/O failures.
pub async fn render_outcome<C: Console>(
    console: &mut C,
    outcome: &Outcome,
    success_heading: &str,
) -> io::Result<()> {
    match outcome {
        Outcome::Success(record) => {
            console.write_line(success_heading).await?;

            for line in tree_lines(&record_details(record)) {
                console.write_line(&line).await?;
            }

            Ok(())
        }
        Outcome::Cancelled => console.write_line(CANCELLED_NOTICE).await,
        Outcome::Rejected => console.write_line(REJECTED_NOTICE).await,
        Outcome::NotFound(id) => {
            console
                .write_line(&format!("No ammo found with ID {id}"))
                .await
        }
        Outcome::Failed(message) => console.write_line(&format!("Error: {message}")).await,
    }
}
