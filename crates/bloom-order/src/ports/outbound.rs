//! Outbound ports
//!
//! The order-intake service is external; infrastructure provides the
//! implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::payload::{OrderPayload, OrderReceipt};

/// Shown when the intake gives no usable message of its own
pub const FALLBACK_FAILURE_MESSAGE: &str = "Order could not be placed";

/// Order-intake service port
#[async_trait]
pub trait OrderIntake: Send + Sync {
    /// Send one order and wait for the answer
    async fn place_order(&self, payload: &OrderPayload) -> Result<OrderReceipt, IntakeError>;
}

/// Why an order was not accepted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    /// Service answered with an error and a message
    #[error("order rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Service answered with an error body that has no message
    #[error("malformed error response ({status})")]
    MalformedResponse { status: u16 },

    /// No answer at all
    #[error("transport error: {0}")]
    Transport(String),

    /// Adapter could not be set up
    #[error("configuration error: {0}")]
    Config(String),
}

impl IntakeError {
    /// Text for the form's failure message
    pub fn user_message(&self) -> &str {
        match self {
            IntakeError::Rejected { message, .. } => message,
            _ => FALLBACK_FAILURE_MESSAGE,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            IntakeError::Rejected { status, .. } | IntakeError::MalformedResponse { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let rejected = IntakeError::Rejected { status: 422, message: "Name already used".into() };
        assert_eq!(rejected.user_message(), "Name already used");
        assert_eq!(rejected.status(), Some(422));

        let malformed = IntakeError::MalformedResponse { status: 500 };
        assert_eq!(malformed.user_message(), FALLBACK_FAILURE_MESSAGE);

        let transport = IntakeError::Transport("connection refused".into());
        assert_eq!(transport.user_message(), FALLBACK_FAILURE_MESSAGE);
        assert_eq!(transport.status(), None);
    }
}
