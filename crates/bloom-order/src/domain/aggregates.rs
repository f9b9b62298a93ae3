//! Order form aggregate
//!
//! Owns the form's values, per-field errors, the submit-enabled flag and the
//! outcome of the last submission. All changes go through the transition
//! methods below; nothing else mutates the state.
//!
//! ```text
//!            apply_edit                      apply_edit
//!           ┌─────────┐                     ┌─────────┐
//!           ▼         │   begin_submit      ▼         │
//!        Editing ─────┴──────────────▶ Submitting ────┘
//!           ▲                            │      │
//!           │ apply_edit      on_success │      │ on_failure
//!           │                            ▼      ▼
//!           └──────────── SubmitSucceeded    SubmitFailed
//! ```

use serde::Serialize;
use std::sync::Arc;

use crate::domain::catalog::ToppingCatalog;
use crate::domain::events::{OrderEvent, RecordedEvent};
use crate::domain::payload::OrderPayload;
use crate::domain::schema::{FieldKind, FormSchema};
use crate::domain::validation::{ValidationError, Validator};
use crate::domain::value_objects::{FieldValue, FormErrors, FormValues, SubmissionId};
use crate::error::{FormError, FormResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum FormState {
    #[default]
    Editing,
    Submitting,
    SubmitSucceeded,
    SubmitFailed,
}

/// Result of the last submission; never both at once
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SubmissionOutcome {
    Succeeded(String),
    Failed(String),
}

impl SubmissionOutcome {
    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Succeeded(m) | SubmissionOutcome::Failed(m) => m,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Succeeded(_))
    }
}

/// A dispatched submission waiting for the intake's answer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub id: SubmissionId,
    pub payload: OrderPayload,
}

#[derive(Clone, Debug)]
pub struct OrderForm {
    schema: Arc<FormSchema>,
    catalog: Arc<ToppingCatalog>,
    values: FormValues,
    errors: FormErrors,
    enabled: bool,
    state: FormState,
    outcome: Option<SubmissionOutcome>,
    pending: Vec<SubmissionId>,
    events: Vec<RecordedEvent>,
}

impl OrderForm {
    /// Mount a form for the given catalog
    pub fn new(catalog: ToppingCatalog) -> Self {
        let schema = FormSchema::order_form(&catalog);
        Self::mount(Arc::new(schema), Arc::new(catalog))
    }

    /// Mount the form with the standard menu
    pub fn standard() -> Self {
        Self::new(ToppingCatalog::standard())
    }

    /// Mount with a custom schema
    ///
    /// Every catalog topping must have a boolean schema entry.
    pub fn with_schema(schema: FormSchema, catalog: ToppingCatalog) -> FormResult<Self> {
        for topping in catalog.iter() {
            let field = schema.field(&topping.field).map_err(|_| {
                FormError::InvalidSchema(format!("no schema entry for topping {}", topping.field))
            })?;
            if field.kind != FieldKind::Boolean {
                return Err(FormError::InvalidSchema(format!(
                    "topping field {} is not boolean",
                    topping.field
                )));
            }
        }
        Ok(Self::mount(Arc::new(schema), Arc::new(catalog)))
    }

    fn mount(schema: Arc<FormSchema>, catalog: Arc<ToppingCatalog>) -> Self {
        let values = schema.initial_values();
        let errors = FormErrors::cleared(schema.fields().iter().map(|f| f.name.as_str()));
        let enabled = Validator::new(&schema).validate_all(&values);
        Self {
            schema,
            catalog,
            values,
            errors,
            enabled,
            state: FormState::Editing,
            outcome: None,
            pending: Vec::new(),
            events: Vec::new(),
        }
    }

    // Accessors
    pub fn values(&self) -> &FormValues { &self.values }
    pub fn errors(&self) -> &FormErrors { &self.errors }
    pub fn error(&self, field: &str) -> &str { self.errors.get(field) }
    pub fn is_enabled(&self) -> bool { self.enabled }
    pub fn state(&self) -> FormState { self.state }
    pub fn outcome(&self) -> Option<&SubmissionOutcome> { self.outcome.as_ref() }
    pub fn in_flight(&self) -> usize { self.pending.len() }
    pub fn schema(&self) -> &FormSchema { &self.schema }
    pub fn catalog(&self) -> &ToppingCatalog { &self.catalog }

    pub fn success_message(&self) -> &str {
        match &self.outcome {
            Some(SubmissionOutcome::Succeeded(m)) => m,
            _ => "",
        }
    }

    pub fn failure_message(&self) -> &str {
        match &self.outcome {
            Some(SubmissionOutcome::Failed(m)) => m,
            _ => "",
        }
    }

    /// Set one field and revalidate only that field
    ///
    /// Unknown fields fail before anything changes. Outcome messages are left
    /// alone; only the next outcome replaces them.
    pub fn apply_edit(&mut self, field: &str, value: impl Into<FieldValue>) -> FormResult<()> {
        let value = value.into();
        let validator = Validator::new(&self.schema);

        match validator.validate_field(field, &value) {
            Ok(()) => self.errors.clear(field),
            Err(ValidationError::Violation(message)) => self.errors.set(field, message),
            Err(ValidationError::Schema(e)) => return Err(e),
        }
        self.values.set(field, value);
        self.enabled = validator.validate_all(&self.values);

        if matches!(self.state, FormState::SubmitSucceeded | FormState::SubmitFailed) {
            self.state = FormState::Editing;
        }

        tracing::debug!(
            field,
            valid = !self.errors.has_error(field),
            enabled = self.enabled,
            "Field edited"
        );
        Ok(())
    }

    /// Start a submission if the form is valid
    ///
    /// Returns `None` and dispatches nothing when submit is disabled, even if
    /// the caller ignored the disabled control.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        if !self.enabled {
            tracing::warn!("Submit refused: form has invalid fields");
            self.record(OrderEvent::SubmissionRefused);
            return None;
        }

        let pending = PendingSubmission {
            id: SubmissionId::new(),
            payload: OrderPayload::build(&self.values, &self.catalog),
        };
        self.pending.push(pending.id);
        self.state = FormState::Submitting;

        tracing::info!(
            submission_id = %pending.id,
            toppings = pending.payload.toppings.len(),
            "Submitting order"
        );
        self.record(OrderEvent::SubmissionStarted {
            submission_id: pending.id,
            toppings: pending.payload.toppings.len(),
        });
        Some(pending)
    }

    /// Intake accepted the order: reset the form and record the message
    ///
    /// The state stays `Submitting` while other submissions are pending.
    pub fn on_success(&mut self, id: SubmissionId, message: impl Into<String>) -> FormResult<()> {
        self.settle(id)?;
        let message = message.into();

        self.values = self.schema.initial_values();
        self.errors = FormErrors::cleared(self.schema.fields().iter().map(|f| f.name.as_str()));
        self.enabled = Validator::new(&self.schema).validate_all(&self.values);
        self.outcome = Some(SubmissionOutcome::Succeeded(message.clone()));
        self.state = self.settled_state(FormState::SubmitSucceeded);

        tracing::info!(submission_id = %id, "Order accepted");
        self.record(OrderEvent::OrderAccepted { submission_id: id, message });
        Ok(())
    }

    /// Intake rejected the order: keep the values so the user can retry
    pub fn on_failure(&mut self, id: SubmissionId, message: impl Into<String>) -> FormResult<()> {
        self.settle(id)?;
        let message = message.into();

        self.outcome = Some(SubmissionOutcome::Failed(message.clone()));
        self.state = self.settled_state(FormState::SubmitFailed);

        tracing::warn!(submission_id = %id, message = %message, "Order rejected");
        self.record(OrderEvent::OrderRejected { submission_id: id, message });
        Ok(())
    }

    /// Drain recorded domain events
    pub fn take_events(&mut self) -> Vec<RecordedEvent> {
        std::mem::take(&mut self.events)
    }

    /// Remove `id` from the pending list; nothing changes if it is not there
    fn settle(&mut self, id: SubmissionId) -> FormResult<()> {
        if self.pending.is_empty() {
            return Err(FormError::NoSubmissionInFlight);
        }
        let index = self
            .pending
            .iter()
            .position(|pending| *pending == id)
            .ok_or(FormError::UnknownSubmission(id))?;
        self.pending.remove(index);
        Ok(())
    }

    fn settled_state(&self, outcome: FormState) -> FormState {
        if self.pending.is_empty() {
            outcome
        } else {
            FormState::Submitting
        }
    }

    fn record(&mut self, event: OrderEvent) {
        self.events.push(RecordedEvent::now(event));
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self::standard()
    }
}
