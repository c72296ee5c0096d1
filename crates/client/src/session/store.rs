//! In-memory session state backed by the token store
//!
//! Two states: Anonymous (no token) and Authenticated (non-empty token).
//! Transitions happen only through [`SessionStore::set_session`] and
//! [`SessionStore::clear_session`]. On construction the store adopts any
//! previously persisted token without verifying its freshness; an expired
//! token is discovered on the next authenticated call, which surfaces
//! `Unauthorized`.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use localmart_domain::UserProfile;
use tracing::{debug, info, warn};

use super::token_store::TokenStore;
use crate::api::AccessTokenProvider;

/// Current authentication state
#[derive(Debug, Clone, Default)]
struct Session {
    user: Option<UserProfile>,
    token: Option<String>,
}

/// Holds the current authenticated user and token in memory
///
/// Source of truth for "is a user logged in". The token field is read-mostly;
/// writes happen only on explicit auth transitions.
pub struct SessionStore {
    token_store: Arc<dyn TokenStore>,
    inner: RwLock<Session>,
}

impl SessionStore {
    /// Create a session store, adopting any previously persisted token
    pub fn new(token_store: Arc<dyn TokenStore>) -> Self {
        let token = match token_store.load() {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                warn!(error = %e, "Failed to read persisted token; starting anonymous");
                None
            }
        };

        if token.is_some() {
            info!("Adopted persisted session token");
        }

        Self { token_store, inner: RwLock::new(Session { user: None, token }) }
    }

    /// Enter the Authenticated state after a successful login or register
    ///
    /// Persists the token; a storage failure is logged and the in-memory
    /// transition still happens (the session then lasts for this process
    /// run only).
    pub fn set_session(&self, user: UserProfile, token: impl Into<String>) {
        let token = token.into();

        if let Err(e) = self.token_store.save(&token) {
            warn!(error = %e, "Failed to persist token; session will not survive restart");
        }

        let mut session = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        session.user = Some(user);
        session.token = Some(token);

        debug!("Session established");
    }

    /// Return to the Anonymous state on logout or account deletion
    pub fn clear_session(&self) {
        if let Err(e) = self.token_store.clear() {
            warn!(error = %e, "Failed to clear persisted token");
        }

        let mut session = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        session.user = None;
        session.token = None;

        debug!("Session cleared");
    }

    /// `true` exactly when a non-empty token is held
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    /// The currently authenticated user, if one has been set this run
    #[must_use]
    pub fn current_user(&self) -> Option<UserProfile> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).user.clone()
    }

    /// The current bearer token, if any
    #[must_use]
    pub fn current_token(&self) -> Option<String> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).token.clone()
    }
}

#[async_trait]
impl AccessTokenProvider for SessionStore {
    async fn access_token(&self) -> Option<String> {
        self.current_token()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::session::token_store::InMemoryTokenStore;

    fn sample_user() -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            name: "Test User".to_string(),
            phone_number: None,
            avatar_url: None,
            membership_tier: "basic".to_string(),
            points: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn starts_anonymous_with_empty_storage() {
        let store = SessionStore::new(Arc::new(InMemoryTokenStore::new()));
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
        assert!(store.current_token().is_none());
    }

    #[test]
    fn set_session_authenticates_and_persists() {
        let token_store = Arc::new(InMemoryTokenStore::new());
        let store = SessionStore::new(token_store.clone());

        store.set_session(sample_user(), "t1");

        assert!(store.is_authenticated());
        assert_eq!(store.current_token().as_deref(), Some("t1"));
        assert_eq!(token_store.load().unwrap().as_deref(), Some("t1"));
    }

    #[test]
    fn clear_session_survives_restart() {
        let token_store = Arc::new(InMemoryTokenStore::new());
        let store = SessionStore::new(token_store.clone());

        store.set_session(sample_user(), "t1");
        store.clear_session();
        assert!(!store.is_authenticated());

        // Simulated restart: a fresh store over the same backing storage
        let restarted = SessionStore::new(token_store);
        assert!(!restarted.is_authenticated());
    }

    #[test]
    fn persisted_token_is_adopted_on_construction() {
        let token_store = Arc::new(InMemoryTokenStore::new());
        token_store.save("persisted").unwrap();

        let store = SessionStore::new(token_store);
        assert!(store.is_authenticated());
        assert_eq!(store.current_token().as_deref(), Some("persisted"));
        // The user profile is not persisted, only the token
        assert!(store.current_user().is_none());
    }

    #[test]
    fn whitespace_persisted_token_stays_anonymous() {
        let token_store = Arc::new(InMemoryTokenStore::new());
        token_store.save("   ").unwrap();

        let store = SessionStore::new(token_store);
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn session_store_provides_the_live_token() {
        let store = SessionStore::new(Arc::new(InMemoryTokenStore::new()));
        assert!(store.access_token().await.is_none());

        store.set_session(sample_user(), "t2");
        assert_eq!(store.access_token().await.as_deref(), Some("t2"));

        store.clear_session();
        assert!(store.access_token().await.is_none());
    }
}
