//! HTTP transport layer
//!
//! Thin wrapper around `reqwest` used by the API pipeline. Requests are
//! dispatched exactly once and run to completion or timeout; there is no
//! retry and no cancellation.

mod client;

pub use client::{HttpClient, HttpClientBuilder};
