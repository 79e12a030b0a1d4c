//! The API request pipeline.
//!
//! Single entry point (`send`) used by every higher-level API function:
//! resolves a credential, attaches it as a bearer token, dispatches through
//! the transport wrapper, and normalizes the response into either the
//! unwrapped payload or an [`ApiFailure`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use workbridge_domain::{ApiConfig, WorkbridgeError};

use super::credentials::CredentialStore;
use super::envelope::RequestEnvelope;
use super::failure::ApiFailure;
use super::notify::{Notifier, TracingNotifier};
use super::response::{decode, DecodedBody};
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL request paths are resolved against.
    pub base_url: String,
    /// Transport timeout; expiry is a transport-level failure.
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from_config(&ApiConfig::default())
    }
}

impl ApiClientConfig {
    /// Build from the loaded application configuration.
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

/// API client implementing the request pipeline.
pub struct ApiClient {
    http: HttpClient,
    config: ApiClientConfig,
    credentials: Arc<dyn CredentialStore>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        config: ApiClientConfig,
        credentials: Arc<dyn CredentialStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, WorkbridgeError> {
        let http = HttpClient::builder().timeout(config.timeout).build()?;

        Ok(Self { http, config, credentials, notifier })
    }

    /// Create a builder for fluent configuration.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Execute a request envelope and normalize the outcome.
    ///
    /// On success the embedded `data` payload is returned unwrapped. Every
    /// failure path — transport error, timeout, or an application-level code
    /// other than the designated "ok" value — resolves through the same
    /// `Err(ApiFailure)` channel, so callers use one continuation style.
    ///
    /// # Errors
    ///
    /// Returns [`ApiFailure`] with a classified status and a message chosen
    /// by the selection rules; infrastructure-class failures additionally
    /// raise exactly one global notification.
    #[instrument(skip(self, envelope), fields(path = %envelope.path(), method = %envelope.method()))]
    pub async fn send(&self, envelope: RequestEnvelope) -> Result<Value, ApiFailure> {
        let (method, path, query, body) = envelope.into_parts();
        let url = format!("{}{}", self.config.base_url, path);

        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(&query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        // Either source being populated suffices; they fill at different
        // points in the application lifecycle.
        match self.resolve_credential().await {
            Some(token) => {
                request = request.header(AUTHORIZATION, format!("Bearer {token}"));
            }
            None => {
                warn!(%url, "no credential resolved; sending unauthenticated request");
            }
        }

        let response = match self.http.send(request).await {
            Ok(response) => response,
            Err(err) => return Err(self.reject(ApiFailure::from_transport(err))),
        };

        let wire_status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                let infra: InfraError = err.into();
                return Err(self.reject(ApiFailure::from_transport(infra.into())));
            }
        };

        match decode(&text) {
            DecodedBody::StructuredSuccess { data } => {
                debug!(%url, "request succeeded");
                Ok(data)
            }
            decoded => Err(self.reject(ApiFailure::from_body(decoded, wire_status))),
        }
    }

    /// Execute a request envelope and deserialize the success payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiFailure`] as [`send`](Self::send) does, or a payload
    /// error (no notification) when `data` does not match `T`.
    pub async fn send_as<T: DeserializeOwned>(
        &self,
        envelope: RequestEnvelope,
    ) -> Result<T, ApiFailure> {
        let data = self.send(envelope).await?;
        serde_json::from_value(data)
            .map_err(|err| ApiFailure::invalid_payload(format!("unexpected payload shape: {err}")))
    }

    async fn resolve_credential(&self) -> Option<String> {
        if let Some(token) = self.credentials.primary().await {
            return Some(token);
        }
        self.credentials.secondary().await
    }

    /// Apply the side-effect policy before handing the failure to the caller.
    fn reject(&self, failure: ApiFailure) -> ApiFailure {
        if failure.is_infrastructure() {
            self.notifier.notify(&failure.message);
        } else {
            debug!(status = ?failure.status, message = %failure.message, "business failure");
        }
        failure
    }
}

/// Builder for [`ApiClient`].
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    credentials: Option<Arc<dyn CredentialStore>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl ApiClientBuilder {
    /// Set the client configuration.
    #[must_use]
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the credential store.
    #[must_use]
    pub fn credentials(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the notifier; defaults to [`TracingNotifier`].
    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Build the API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential store is missing or client
    /// creation fails.
    pub fn build(self) -> Result<ApiClient, WorkbridgeError> {
        let config = self.config.unwrap_or_default();
        let credentials = self
            .credentials
            .ok_or_else(|| WorkbridgeError::Config("Credential store not set".to_string()))?;
        let notifier = self.notifier.unwrap_or_else(|| Arc::new(TracingNotifier));

        ApiClient::new(config, credentials, notifier)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    struct EmptyStore;

    #[async_trait]
    impl CredentialStore for EmptyStore {
        async fn primary(&self) -> Option<String> {
            None
        }

        async fn secondary(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn builder_requires_credential_store() {
        let result = ApiClient::builder().build();
        assert!(matches!(result, Err(WorkbridgeError::Config(_))));
    }

    #[test]
    fn builder_with_store_succeeds() {
        let result = ApiClient::builder().credentials(Arc::new(EmptyStore)).build();
        assert!(result.is_ok());
    }

    #[test]
    fn config_derives_from_domain_config() {
        let domain = ApiConfig { base_url: "https://x".to_string(), timeout_seconds: 9 };
        let config = ApiClientConfig::from_config(&domain);

        assert_eq!(config.base_url, "https://x");
        assert_eq!(config.timeout, Duration::from_secs(9));
    }
}
