//! Infrastructure layer - concrete port implementations

pub mod http;
