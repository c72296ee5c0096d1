//! Account and authentication operations

use std::sync::Arc;

use localmart_domain::{AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest};
use tracing::{info, instrument};

use crate::api::{ApiClient, ApiError, Endpoint};

const BASE: &str = "/api/users";

/// Login, registration, and account lifecycle
///
/// Successful login and register responses carry the bearer token; the
/// caller hands it to the session store. This service does not touch
/// session state itself.
pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Authenticate with email and password
    ///
    /// # Errors
    /// `Validation` for rejected credentials, or any other [`ApiError`]
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body =
            LoginRequest { email: email.to_string(), password: password.to_string() };
        let endpoint = Endpoint::post(format!("{BASE}/login")).json_body(&body)?;

        let response: AuthResponse = self.client.send(&endpoint).await?;
        info!(user_id = %response.user.id, "login successful");
        Ok(response)
    }

    /// Create a new account
    ///
    /// # Errors
    /// `Validation` when the backend rejects the registration (e.g., email
    /// already in use), or any other [`ApiError`]
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let endpoint = Endpoint::post(format!("{BASE}/register")).json_body(request)?;

        let response: AuthResponse = self.client.send(&endpoint).await?;
        info!(user_id = %response.user.id, "registration successful");
        Ok(response)
    }

    /// Change the current user's password
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip_all)]
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let body = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        let endpoint =
            Endpoint::post(format!("{BASE}/change-password")).json_body(&body)?.authorized();

        self.client.send_unit(&endpoint).await
    }

    /// Permanently delete the current user's account
    ///
    /// The caller is responsible for clearing the session afterwards.
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        let endpoint = Endpoint::delete(format!("{BASE}/account")).authorized();
        self.client.send_unit(&endpoint).await
    }
}
