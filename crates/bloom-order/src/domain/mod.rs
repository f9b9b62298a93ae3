//! Domain layer
//!
//! Pure form logic: no I/O, no clocks other than event timestamps.

pub mod aggregates;
pub mod catalog;
pub mod events;
pub mod payload;
pub mod schema;
pub mod validation;
pub mod value_objects;
