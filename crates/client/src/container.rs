//! Dependency container
//!
//! Constructed once per app run. Builds one [`SessionStore`], exactly one
//! [`ApiClient`] whose token provider reads that store at call time, and one
//! instance of each domain service bound to that client. No other component
//! constructs an `ApiClient`.

use std::sync::Arc;

use localmart_domain::{AuthResponse, ClientConfig, RegisterRequest};
use tracing::info;

use crate::api::{ApiClient, ApiError};
use crate::services::{AuthService, EventsService, ProductsService, ProfileService, StoresService};
use crate::session::{KeyringTokenStore, SessionStore, TokenStore};

/// Keychain service name for the persisted bearer token
const KEYCHAIN_SERVICE: &str = "Localmart";

/// Wires the session store, API client, and domain services together
pub struct ServiceContainer {
    session: Arc<SessionStore>,
    auth: AuthService,
    profile: ProfileService,
    events: EventsService,
    products: ProductsService,
    stores: StoresService,
}

impl ServiceContainer {
    /// Build the container with the platform keychain as token storage
    ///
    /// # Errors
    /// Returns error if the API client cannot be created
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Self::with_token_store(config, Arc::new(KeyringTokenStore::new(KEYCHAIN_SERVICE)))
    }

    /// Build the container over an explicit token store
    ///
    /// Used by tests and platforms without a keychain.
    ///
    /// # Errors
    /// Returns error if the API client cannot be created
    pub fn with_token_store(
        config: ClientConfig,
        token_store: Arc<dyn TokenStore>,
    ) -> Result<Self, ApiError> {
        let session = Arc::new(SessionStore::new(token_store));

        // The single ApiClient; its token provider reads the session store
        // at call time, so token rotation needs no re-wiring.
        let client = Arc::new(ApiClient::new(config, session.clone())?);

        info!(authenticated = session.is_authenticated(), "service container ready");

        Ok(Self {
            session: session.clone(),
            auth: AuthService::new(client.clone()),
            profile: ProfileService::new(client.clone()),
            events: EventsService::new(client.clone()),
            products: ProductsService::new(client.clone()),
            stores: StoresService::new(client),
        })
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    #[must_use]
    pub fn profile(&self) -> &ProfileService {
        &self.profile
    }

    #[must_use]
    pub fn events(&self) -> &EventsService {
        &self.events
    }

    #[must_use]
    pub fn products(&self) -> &ProductsService {
        &self.products
    }

    #[must_use]
    pub fn stores(&self) -> &StoresService {
        &self.stores
    }

    /// Log in and establish the session on success
    ///
    /// # Errors
    /// Any [`ApiError`]; the session is left untouched on failure
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let response = self.auth.login(email, password).await?;
        self.session.set_session(response.user.clone(), response.token.clone());
        Ok(response)
    }

    /// Register and establish the session on success
    ///
    /// # Errors
    /// Any [`ApiError`]; the session is left untouched on failure
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response = self.auth.register(request).await?;
        self.session.set_session(response.user.clone(), response.token.clone());
        Ok(response)
    }

    /// Clear the session; purely local, no backend call
    pub fn logout(&self) {
        self.session.clear_session();
    }

    /// Delete the account on the backend, then clear the session
    ///
    /// # Errors
    /// Any [`ApiError`]; the session is only cleared after the backend
    /// confirms the deletion
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        self.auth.delete_account().await?;
        self.session.clear_session();
        Ok(())
    }
}
