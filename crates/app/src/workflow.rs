//! Create and view use cases.
//!
//! Each use case ends in an [`Outcome`]. Cancellation, rejection and missing
//! rows are ordinary outcomes; configuration, storage and console failures are
//! folded into [`Outcome::Failed`] with their full cause chain, so callers
//! only ever have something to render.

use std::{error::Error as StdError, fmt, io, sync::Arc};

use jiff::Zoned;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    config::ConfigurationError,
    console::Console,
    domain::ammo::{
        AmmoService, AmmoServiceError,
        data::NewAmmo,
        records::{AmmoId, AmmoRecord},
    },
    input::{Collected, collect_new_ammo},
    report::{record_details, tree_lines},
};

pub const DETAILS_HEADER: &str = "Please enter ammunition details:";
pub const CONFIRM_HEADER: &str = "Please confirm ammunition details:";
pub const CONFIRM_PROMPT: &str = "Confirm details? (Y/N): ";

/// How a use case ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The record that was stored or found.
    Success(AmmoRecord),

    /// The user typed `cancel` while filling in the form.
    Cancelled,

    /// The user declined to save the record.
    Rejected,

    NotFound(AmmoId),

    Failed(String),
}

#[derive(Debug, Error)]
enum WorkflowError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Storage(#[from] AmmoServiceError),

    #[error("console error")]
    Console(#[from] io::Error),
}

/// True for `y` or `yes` in any letter case.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();

    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// The fixed purchase stored by [`AmmoWorkflow::create_test_record`].
pub fn test_ammo() -> NewAmmo {
    NewAmmo {
        caliber: "9mm".to_string(),
        brand: "TestBrand".to_string(),
        price: Decimal::from(300),
        quantity: 50,
        purchase_date: Zoned::now().datetime(),
    }
}

#[derive(Clone)]
pub struct AmmoWorkflow {
    ammo: Option<Arc<dyn AmmoService>>,
}

impl fmt::Debug for AmmoWorkflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmmoWorkflow")
            .field("configured", &self.ammo.is_some())
            .finish()
    }
}

impl AmmoWorkflow {
    /// `ammo` is `None` when no connection descriptor was configured; every
    /// use case then fails before doing anything else.
    #[must_use]
    pub fn new(ammo: Option<Arc<dyn AmmoService>>) -> Self {
        Self { ammo }
    }

    /// Ask for a new purchase, confirm it and store it.
    pub async fn create_record<C: Console>(&self, console: &mut C) -> Outcome {
        self.try_create_record(console)
            .await
            .unwrap_or_else(|error| failed("create", &error))
    }

    /// Look up a stored purchase by id.
    pub async fn view_record(&self, id: AmmoId) -> Outcome {
        self.try_view_record(id)
            .await
            .unwrap_or_else(|error| failed("view", &error))
    }

    /// Store [`test_ammo`] without asking anything.
    pub async fn create_test_record(&self) -> Outcome {
        self.try_create_test_record()
            .await
            .unwrap_or_else(|error| failed("create test", &error))
    }

    fn service(&self) -> Result<Arc<dyn AmmoService>, ConfigurationError> {
        self.ammo
            .clone()
            .ok_or(ConfigurationError::MissingConnectionDescriptor)
    }

    async fn try_create_record<C: Console>(
        &self,
        console: &mut C,
    ) -> Result<Outcome, WorkflowError> {
        let ammo = self.service()?;

        console.write_line(DETAILS_HEADER).await?;

        let Collected::Accepted(new_ammo) = collect_new_ammo(console).await? else {
            warn!("ammo creation cancelled");
            return Ok(Outcome::Cancelled);
        };

        let record = AmmoRecord::new(new_ammo);

        if !confirm(console, &record).await? {
            warn!("ammo creation rejected at confirmation");
            return Ok(Outcome::Rejected);
        }

        let created = ammo.insert_ammo(record.into_details()).await?;

        info!(id = ?created.id(), "ammo record created");

        Ok(Outcome::Success(created))
    }

    async fn try_view_record(&self, id: AmmoId) -> Result<Outcome, WorkflowError> {
        let ammo = self.service()?;

        let Some(found) = ammo.get_ammo(id).await? else {
            info!(%id, "no ammo record with this id");
            return Ok(Outcome::NotFound(id));
        };

        info!(%id, "ammo record found");

        Ok(Outcome::Success(found))
    }

    async fn try_create_test_record(&self) -> Result<Outcome, WorkflowError> {
        let ammo = self.service()?;

        let created = ammo.insert_ammo(test_ammo()).await?;

        info!(id = ?created.id(), "test ammo record created");

        Ok(Outcome::Success(created))
    }
}

async fn confirm<C: Console>(console: &mut C, record: &AmmoRecord) -> io::Result<bool> {
    console.write_line(CONFIRM_HEADER).await?;

    for line in tree_lines(&record_details(record)) {
        console.write_line(&line).await?;
    }

    console.write(CONFIRM_PROMPT).await?;

    let answer = console.read_confirmation().await?;

    Ok(answer.as_deref().is_some_and(is_affirmative))
}

fn failed(use_case: &str, error: &WorkflowError) -> Outcome {
    let message = error_chain(error);

    error!(use_case, error = %message, "ammo use case failed");

    Outcome::Failed(message)
}

fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::{domain::ammo::MockAmmoService, input::INVALID_INPUT_NOTICE, test::ScriptedConsole};

    use super::*;

    const VALID_FORM: [&str; 5] = ["9mm", "TestBrand", "50", "300", "2024-03-09"];

    fn expected_new_ammo() -> NewAmmo {
        NewAmmo {
            caliber: "9mm".to_string(),
            brand: "TestBrand".to_string(),
            price: Decimal::from(300),
            quantity: 50,
            purchase_date: date(2024, 3, 9).at(0, 0, 0, 0),
        }
    }

    fn workflow(service: MockAmmoService) -> AmmoWorkflow {
        AmmoWorkflow::new(Some(Arc::new(service)))
    }

    fn form_then(answer: &str) -> Vec<String> {
        VALID_FORM
            .iter()
            .copied()
            .chain([answer])
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn create_record_stores_confirmed_record() -> TestResult {
        let mut service = MockAmmoService::new();

        service
            .expect_insert_ammo()
            .once()
            .withf(|ammo| *ammo == expected_new_ammo())
            .return_once(|ammo| Ok(AmmoRecord::stored(AmmoId::from_i32(1), ammo)));

        service.expect_get_ammo().never();

        let mut console = ScriptedConsole::new(form_then("y"));

        let outcome = workflow(service).create_record(&mut console).await;

        let Outcome::Success(created) = outcome else {
            return Err(format!("expected Success, got {outcome:?}").into());
        };

        assert_eq!(created.id(), Some(AmmoId::from_i32(1)));
        assert_eq!(created.price_per_round(), Decimal::from(6));

        Ok(())
    }

    #[tokio::test]
    async fn confirmation_shows_derived_price_per_round() {
        let mut service = MockAmmoService::new();

        service
            .expect_insert_ammo()
            .return_once(|ammo| Ok(AmmoRecord::stored(AmmoId::from_i32(1), ammo)));

        let mut console = ScriptedConsole::new(form_then("YES"));

        workflow(service).create_record(&mut console).await;

        assert!(console.transcript().contains(CONFIRM_HEADER));
        assert!(console.transcript().contains("Price Per Round: R6.00"));
        assert!(console.transcript().contains(CONFIRM_PROMPT));
    }

    #[tokio::test]
    async fn anything_but_yes_rejects_without_storing() {
        for answer in ["n", "no", "N", "", "yep", "maybe", "cancel"] {
            let mut service = MockAmmoService::new();

            service.expect_insert_ammo().never();
            service.expect_get_ammo().never();

            let mut console = ScriptedConsole::new(form_then(answer));

            let outcome = workflow(service).create_record(&mut console).await;

            assert_eq!(outcome, Outcome::Rejected, "answer {answer:?} should reject");
        }
    }

    #[tokio::test]
    async fn end_of_input_at_confirmation_rejects() {
        let mut service = MockAmmoService::new();

        service.expect_insert_ammo().never();

        let mut console = ScriptedConsole::new(VALID_FORM);

        let outcome = workflow(service).create_record(&mut console).await;

        assert_eq!(outcome, Outcome::Rejected);
    }

    #[tokio::test]
    async fn cancel_stops_before_confirmation() {
        let mut service = MockAmmoService::new();

        service.expect_insert_ammo().never();

        let mut console = ScriptedConsole::new(["9mm", "Cancel", "50", "300", "2024-03-09", "y"]);

        let outcome = workflow(service).create_record(&mut console).await;

        assert_eq!(outcome, Outcome::Cancelled);
        assert!(!console.transcript().contains(CONFIRM_PROMPT));
        assert_eq!(console.remaining_inputs(), 4);
    }

    #[tokio::test]
    async fn bad_quantity_is_asked_again_before_storing() {
        let mut service = MockAmmoService::new();

        service
            .expect_insert_ammo()
            .once()
            .withf(|ammo| ammo.quantity == 50)
            .return_once(|ammo| Ok(AmmoRecord::stored(AmmoId::from_i32(2), ammo)));

        let mut console =
            ScriptedConsole::new(["9mm", "TestBrand", "a box", "50", "300", "2024-03-09", "y"]);

        let outcome = workflow(service).create_record(&mut console).await;

        assert!(matches!(outcome, Outcome::Success(_)), "got {outcome:?}");
        assert_eq!(console.count(INVALID_INPUT_NOTICE), 1);
    }

    #[tokio::test]
    async fn storage_failure_is_reported_with_its_cause() -> TestResult {
        let mut service = MockAmmoService::new();

        service
            .expect_insert_ammo()
            .once()
            .return_once(|_| Err(AmmoServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let mut console = ScriptedConsole::new(form_then("y"));

        let outcome = workflow(service).create_record(&mut console).await;

        let Outcome::Failed(message) = outcome else {
            return Err(format!("expected Failed, got {outcome:?}").into());
        };

        assert!(message.starts_with("storage error: "), "message was {message:?}");
        assert!(message.len() > "storage error: ".len(), "cause missing");

        Ok(())
    }

    #[tokio::test]
    async fn missing_configuration_fails_before_prompting() {
        let mut console = ScriptedConsole::new(form_then("y"));

        let outcome = AmmoWorkflow::new(None).create_record(&mut console).await;

        assert_eq!(
            outcome,
            Outcome::Failed(ConfigurationError::MissingConnectionDescriptor.to_string())
        );
        assert!(console.transcript().is_empty(), "nothing should be asked");
        assert_eq!(console.remaining_inputs(), 6);
    }

    #[tokio::test]
    async fn missing_configuration_fails_view_and_test_record() {
        let workflow = AmmoWorkflow::new(None);
        let expected = Outcome::Failed(ConfigurationError::MissingConnectionDescriptor.to_string());

        assert_eq!(workflow.view_record(AmmoId::from_i32(1)).await, expected);
        assert_eq!(workflow.create_test_record().await, expected);
    }

    #[tokio::test]
    async fn view_record_returns_found_record() -> TestResult {
        let mut service = MockAmmoService::new();
        let id = AmmoId::from_i32(7);

        service
            .expect_get_ammo()
            .once()
            .withf(move |requested| *requested == id)
            .return_once(move |_| Ok(Some(AmmoRecord::stored(id, expected_new_ammo()))));

        service.expect_insert_ammo().never();

        let outcome = workflow(service).view_record(id).await;

        let Outcome::Success(found) = outcome else {
            return Err(format!("expected Success, got {outcome:?}").into());
        };

        assert_eq!(found.id(), Some(id));
        assert_eq!(found.price_per_round(), Decimal::from(6));

        Ok(())
    }

    #[tokio::test]
    async fn view_record_reports_missing_rows_as_not_found() {
        let mut service = MockAmmoService::new();
        let id = AmmoId::from_i32(404);

        service.expect_get_ammo().once().return_once(|_| Ok(None));

        let outcome = workflow(service).view_record(id).await;

        assert_eq!(outcome, Outcome::NotFound(id));
    }

    #[tokio::test]
    async fn view_record_reports_storage_failures() {
        let mut service = MockAmmoService::new();

        service
            .expect_get_ammo()
            .once()
            .return_once(|_| Err(AmmoServiceError::Connection(sqlx::Error::PoolClosed)));

        let outcome = workflow(service).view_record(AmmoId::from_i32(1)).await;

        assert!(
            matches!(&outcome, Outcome::Failed(message) if message.starts_with("could not connect to storage")),
            "got {outcome:?}"
        );
    }

    #[tokio::test]
    async fn create_test_record_stores_fixed_purchase() {
        let mut service = MockAmmoService::new();

        service
            .expect_insert_ammo()
            .once()
            .withf(|ammo| {
                ammo.brand == "TestBrand"
                    && ammo.caliber == "9mm"
                    && ammo.quantity == 50
                    && ammo.price == Decimal::from(300)
            })
            .return_once(|ammo| Ok(AmmoRecord::stored(AmmoId::from_i32(3), ammo)));

        let outcome = workflow(service).create_test_record().await;

        assert!(
            matches!(&outcome, Outcome::Success(record) if record.price_per_round() == Decimal::from(6)),
            "got {outcome:?}"
        );
    }

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative(" Yes "));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yeah"));
        assert!(!is_affirmative(""));
    }
}
