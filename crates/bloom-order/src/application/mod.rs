//! Application layer
//!
//! Use case orchestration: one order form driven against an intake.

pub mod service;

pub use service::OrderService;
