//! Order service
//!
//! The lock around the form is held only for each transition, never across
//! the network call, so edits go through while a submission is outstanding.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::domain::aggregates::{OrderForm, SubmissionOutcome};
use crate::domain::events::RecordedEvent;
use crate::domain::value_objects::FieldValue;
use crate::error::FormResult;
use crate::ports::outbound::OrderIntake;

pub struct OrderService {
    form: Mutex<OrderForm>,
    intake: Arc<dyn OrderIntake>,
}

impl OrderService {
    pub fn new(form: OrderForm, intake: Arc<dyn OrderIntake>) -> Self {
        Self { form: Mutex::new(form), intake }
    }

    pub fn edit(&self, field: &str, value: impl Into<FieldValue>) -> FormResult<()> {
        self.form.lock().apply_edit(field, value)
    }

    /// Submit the current values
    ///
    /// Returns `Ok(None)` when the form is not valid and nothing was sent.
    pub async fn submit(&self) -> FormResult<Option<SubmissionOutcome>> {
        let pending = match self.form.lock().begin_submit() {
            Some(pending) => pending,
            None => return Ok(None),
        };

        let result = self.intake.place_order(&pending.payload).await;

        let mut form = self.form.lock();
        match result {
            Ok(receipt) => form.on_success(pending.id, receipt.message)?,
            Err(e) => {
                tracing::warn!(submission_id = %pending.id, status = ?e.status(), error = %e, "Order-intake call failed");
                form.on_failure(pending.id, e.user_message())?
            }
        }
        Ok(form.outcome().cloned())
    }

    /// Run a read-only view over the current form
    pub fn inspect<R>(&self, f: impl FnOnce(&OrderForm) -> R) -> R {
        f(&self.form.lock())
    }

    pub fn snapshot(&self) -> OrderForm {
        self.form.lock().clone()
    }

    pub fn take_events(&self) -> Vec<RecordedEvent> {
        self.form.lock().take_events()
    }
}
