//! # Workbridge Domain
//!
//! Domain types and models shared by the Workbridge integration core.
//!
//! This crate contains:
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Wake-up payload types
//! - Domain constants (application status codes, canned messages)
//!
//! ## Architecture
//! - No dependencies on other Workbridge crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::{ApiConfig, Config, WakeupConfig};
pub use errors::{Result, WorkbridgeError};
pub use types::WakeupPayload;
