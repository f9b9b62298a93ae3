//! Bloom Pizza Order Form
//!
//! Field validation, form state and order submission for the Bloom Pizza
//! order form.
//!
//! ## Architecture
//!
//! - **Domain Layer**: field schema, topping catalog, validation engine and
//!   the `OrderForm` aggregate with its state machine and domain events
//! - **Ports Layer**: the `OrderIntake` interface to the order-intake service
//! - **Infrastructure Layer**: `HttpOrderIntake`, a reqwest adapter
//! - **Application Layer**: `OrderService`, which drives one form against
//!   an intake and keeps the form editable while a request is in flight
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bloom_order::{HttpOrderIntake, IntakeConfig, OrderForm, OrderService};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let intake = HttpOrderIntake::new(IntakeConfig::default())?;
//! let service = OrderService::new(OrderForm::standard(), Arc::new(intake));
//!
//! service.edit("fullName", "Ann Lee")?;
//! service.edit("size", "L")?;
//! service.edit("pepperoni", true)?;
//!
//! if let Some(outcome) = service.submit().await? {
//!     println!("{}", outcome.message());
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod error;
pub mod ports;
pub mod infrastructure;
pub mod application;

// Re-exports for convenience
pub use domain::aggregates::{FormState, OrderForm, PendingSubmission, SubmissionOutcome};
pub use domain::catalog::{Topping, ToppingCatalog};
pub use domain::events::{OrderEvent, RecordedEvent};
pub use domain::payload::{OrderPayload, OrderReceipt};
pub use domain::schema::{FieldKind, FieldSchema, FormSchema, Rule};
pub use domain::validation::{ValidationError, Validator};
pub use domain::value_objects::{FieldValue, FormErrors, FormValues, Size, SubmissionId};
pub use error::{FormError, FormResult};
pub use ports::outbound::{IntakeError, OrderIntake};
pub use infrastructure::http::{HttpOrderIntake, IntakeConfig};
pub use application::OrderService;
