//! # Workbridge Infrastructure
//!
//! Infrastructure adapters for the Workbridge integration core.
//!
//! This crate contains:
//! - The HTTP transport wrapper and the admin API request pipeline
//! - Credential stores (in-memory cache, platform keychain)
//! - The wake-up bridge mailboxing deep-link payloads from the platform SDK
//! - Configuration loading (environment variables, config files)
//!
//! ## Architecture
//! - Depends on `workbridge-domain` for types and errors
//! - Contains all "impure" code (I/O, platform APIs)
//! - Collaborators (credential store, notifier, wake-up channel) are
//!   injected at construction; there are no process-wide singletons

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod wakeup;

// Re-export commonly used items
pub use api::{AdminApi, ApiClient, ApiClientConfig, ApiFailure, RequestEnvelope};
pub use wakeup::{WakeupBridge, WakeupChannel};
