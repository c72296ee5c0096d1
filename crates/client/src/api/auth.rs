//! Credential access for the API client

use async_trait::async_trait;

/// Trait for providing the current access token
///
/// The API client reads the credential through this capability at call time,
/// so token rotation in the session store is observed by in-flight and
/// future requests without re-wiring the client. `None` means the session is
/// anonymous; the client then sends the request without an Authorization
/// header.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get the current access token, if any
    async fn access_token(&self) -> Option<String>;
}

/// Fixed-token provider, useful in tests and one-off tooling
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()) }
    }

    /// Provider for an anonymous session
    #[must_use]
    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Option<String> {
        self.token.clone()
    }
}
