//! Credential resolution for the API pipeline.
//!
//! The pipeline reads tokens through the [`CredentialStore`] seam and never
//! writes them; the external authentication flow owns population and
//! clearing. Two sources back the seam in production: an in-memory cache
//! filled after login and a durable keychain entry, which may be populated
//! at different points in the application lifecycle.

use std::sync::Arc;

use async_trait::async_trait;
use keyring::Entry;
use parking_lot::RwLock;
use tracing::warn;

/// Read-only view of the credential sources used by the pipeline.
///
/// The pipeline checks `primary` first and `secondary` second; either being
/// present suffices.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Token from the primary (in-memory) source, if populated.
    async fn primary(&self) -> Option<String>;

    /// Token from the secondary (durable) source, if populated.
    async fn secondary(&self) -> Option<String>;
}

/// Process-lifetime, in-memory token cache.
///
/// Written by the authentication flow after login, cleared on logout.
#[derive(Debug, Default)]
pub struct TokenCache {
    token: RwLock<Option<String>>,
}

impl TokenCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached token.
    pub fn set(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    /// Drop the cached token.
    pub fn clear(&self) {
        *self.token.write() = None;
    }

    /// Current token, if any.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.token.read().clone()
    }
}

/// Durable token store backed by the platform keychain.
pub struct KeychainTokenStore {
    service: String,
    account: String,
}

impl KeychainTokenStore {
    /// Create a store reading the given keychain service/account pair.
    pub fn new(service: impl Into<String>, account: impl Into<String>) -> Self {
        Self { service: service.into(), account: account.into() }
    }

    /// Read the persisted token.
    ///
    /// A missing entry is the normal signed-out state; any other keychain
    /// error degrades to `None` with a diagnostic, since the pipeline can
    /// proceed unauthenticated.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        let entry = match Entry::new(&self.service, &self.account) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(service = %self.service, error = %err, "keychain entry unavailable");
                return None;
            }
        };

        match entry.get_password() {
            Ok(token) => Some(token),
            Err(keyring::Error::NoEntry) => None,
            Err(err) => {
                warn!(service = %self.service, error = %err, "keychain read failed");
                None
            }
        }
    }
}

/// Production [`CredentialStore`]: in-memory cache first, keychain second.
pub struct LayeredCredentialStore {
    cache: Arc<TokenCache>,
    keychain: KeychainTokenStore,
}

impl LayeredCredentialStore {
    /// Compose the two production sources.
    pub fn new(cache: Arc<TokenCache>, keychain: KeychainTokenStore) -> Self {
        Self { cache, keychain }
    }
}

#[async_trait]
impl CredentialStore for LayeredCredentialStore {
    async fn primary(&self) -> Option<String> {
        self.cache.get()
    }

    async fn secondary(&self) -> Option<String> {
        self.keychain.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_cache_set_get_clear() {
        let cache = TokenCache::new();
        assert_eq!(cache.get(), None);

        cache.set("abc123");
        assert_eq!(cache.get(), Some("abc123".to_string()));

        cache.set("def456");
        assert_eq!(cache.get(), Some("def456".to_string()));

        cache.clear();
        assert_eq!(cache.get(), None);
    }

    #[tokio::test]
    async fn layered_store_reads_cache_as_primary() {
        let cache = Arc::new(TokenCache::new());
        cache.set("cached-token");

        let store = LayeredCredentialStore::new(
            cache,
            KeychainTokenStore::new("workbridge-test", "missing-account"),
        );

        assert_eq!(store.primary().await, Some("cached-token".to_string()));
    }
}
