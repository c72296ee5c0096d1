//! Bearer token persistence
//!
//! One opaque string in a single named slot of the platform credential
//! storage (macOS Keychain, Windows Credential Manager, Linux Secret
//! Service). Written on successful login or register, cleared on logout or
//! account deletion, read once at session store construction.

use std::sync::Mutex;

use keyring::Entry;
use thiserror::Error;
use tracing::debug;

/// The single storage slot used for the bearer token
const TOKEN_SLOT: &str = "auth_token";

/// Token storage error
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// Credential storage access failed (permission denied, unavailable, ...)
    #[error("Credential storage access failed: {0}")]
    AccessFailed(String),
}

/// Persistence for the single bearer token
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any
    ///
    /// # Errors
    /// Returns `TokenStoreError::AccessFailed` if storage access fails
    fn load(&self) -> Result<Option<String>, TokenStoreError>;

    /// Persist the token, replacing any previous value
    ///
    /// # Errors
    /// Returns `TokenStoreError::AccessFailed` if storage access fails
    fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Remove the persisted token (idempotent)
    ///
    /// # Errors
    /// Returns `TokenStoreError::AccessFailed` if storage access fails
    fn clear(&self) -> Result<(), TokenStoreError>;
}

/// Token store backed by the platform keychain
pub struct KeyringTokenStore {
    service_name: String,
}

impl KeyringTokenStore {
    /// Create a store for a specific service
    ///
    /// # Arguments
    /// * `service_name` - Service identifier (e.g., "Localmart")
    pub fn new(service_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into() }
    }

    fn entry(&self) -> Result<Entry, TokenStoreError> {
        Entry::new(&self.service_name, TOKEN_SLOT).map_err(|e| {
            TokenStoreError::AccessFailed(format!("Failed to create keychain entry: {}", e))
        })
    }
}

impl TokenStore for KeyringTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        debug!(service = %self.service_name, "Reading token from keychain");

        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(TokenStoreError::AccessFailed(format!(
                "Failed to read token: {}",
                e
            ))),
        }
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        debug!(service = %self.service_name, "Storing token in keychain");

        self.entry()?.set_password(token).map_err(|e| {
            TokenStoreError::AccessFailed(format!("Failed to store token: {}", e))
        })
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        debug!(service = %self.service_name, "Deleting token from keychain");

        if let Err(e) = self.entry()?.delete_credential() {
            if !matches!(e, keyring::Error::NoEntry) {
                return Err(TokenStoreError::AccessFailed(format!(
                    "Failed to delete token: {}",
                    e
                )));
            }
        }

        Ok(())
    }
}

/// Process-local token store for tests and platforms without a keychain
///
/// Share one instance behind an `Arc` across session store constructions to
/// simulate persistence across process restarts.
#[derive(Default)]
pub struct InMemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl InMemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.token.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone())
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        *self.token.lock().unwrap_or_else(std::sync::PoisonError::into_inner) =
            Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        *self.token.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = None;
        Ok(())
    }
}
