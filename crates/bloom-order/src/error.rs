//! Error types for the order form

use thiserror::Error;

use crate::domain::value_objects::SubmissionId;

/// Order form error type
///
/// These are programming or wiring errors. Field-level validation problems
/// never show up here; they are recorded in `FormErrors` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A field name that has no schema entry
    #[error("unknown form field: {0}")]
    UnknownField(String),

    /// Topping catalog breaks one of its invariants
    #[error("invalid topping catalog: {0}")]
    InvalidCatalog(String),

    /// Schema table has a duplicate or mismatched entry
    #[error("invalid form schema: {0}")]
    InvalidSchema(String),

    /// An outcome arrived while no submission was outstanding
    #[error("no submission in flight")]
    NoSubmissionInFlight,

    /// An outcome for a submission this form never started or already settled
    #[error("unknown submission: {0}")]
    UnknownSubmission(SubmissionId),
}

/// Result type for the order form
pub type FormResult<T> = Result<T, FormError>;
