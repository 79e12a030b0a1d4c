//! Admin API client for Workbridge
//!
//! This module provides the HTTP request pipeline shared by every admin
//! console operation. It handles credential attachment, dispatch through the
//! transport wrapper, and normalization of responses into a single
//! success/failure outcome.
//!
//! # Architecture
//!
//! - Uses the crate-level `HttpClient` (no direct reqwest in callers)
//! - Credential resolution via an injected [`CredentialStore`]
//! - Infrastructure failures raise exactly one notification through the
//!   injected [`Notifier`]; business failures are left to the caller
//! - Response bodies are classified into an explicit tagged union before any
//!   message selection runs

pub mod client;
pub mod credentials;
pub mod endpoints;
pub mod envelope;
pub mod failure;
pub mod notify;
pub mod response;

pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use credentials::{CredentialStore, KeychainTokenStore, LayeredCredentialStore, TokenCache};
pub use endpoints::{AdminApi, LoginRequest, LoginResponse};
pub use envelope::RequestEnvelope;
pub use failure::ApiFailure;
pub use notify::{Notifier, TracingNotifier};
pub use response::DecodedBody;
