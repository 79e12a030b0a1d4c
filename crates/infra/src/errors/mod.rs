//! Infrastructure error handling
//!
//! Keeps conversions from external library errors into domain errors on the
//! infrastructure side.

mod conversions;

pub use conversions::InfraError;
