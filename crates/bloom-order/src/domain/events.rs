//! Order form domain events

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_objects::SubmissionId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum OrderEvent {
    SubmissionStarted { submission_id: SubmissionId, toppings: usize },
    /// Submit was invoked while the form was not valid
    SubmissionRefused,
    OrderAccepted { submission_id: SubmissionId, message: String },
    OrderRejected { submission_id: SubmissionId, message: String },
}

/// Event with the time it was raised
#[derive(Clone, Debug, Serialize)]
pub struct RecordedEvent {
    pub occurred_at: DateTime<Utc>,
    pub event: OrderEvent,
}

impl RecordedEvent {
    pub fn now(event: OrderEvent) -> Self {
        Self { occurred_at: Utc::now(), event }
    }
}
