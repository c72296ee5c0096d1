//! API client
//!
//! Turns an [`Endpoint`] into an HTTP request, attaches authentication, and
//! interprets the response into a typed result or an [`ApiError`].

use std::sync::Arc;

use localmart_domain::ClientConfig;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::auth::AccessTokenProvider;
use super::endpoint::Endpoint;
use super::errors::ApiError;
use crate::http::HttpClient;

/// Fallback shown when a 400 response carries no parseable reason
const DEFAULT_VALIDATION_MESSAGE: &str = "The request could not be processed.";

/// Error body the backend sends for non-2xx statuses
#[derive(Debug, Deserialize)]
struct ReasonBody {
    reason: String,
}

/// Typed API client
///
/// Stateless beyond its configuration: it never retries, never refreshes
/// tokens, never caches, and never mutates session state. Callers react to
/// [`ApiError::Unauthorized`] and update the session after auth calls.
pub struct ApiClient {
    http_client: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be created
    pub fn new(
        config: ClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ApiError> {
        let mut builder = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs));

        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        let http_client = builder.build()?;

        Ok(Self { http_client, auth, config })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Execute an endpoint and decode the JSON response body
    ///
    /// # Errors
    ///
    /// Any variant of [`ApiError`]; see the module documentation for the
    /// status classification rules.
    #[instrument(skip(self, endpoint), fields(path = %endpoint.path))]
    pub async fn send<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, ApiError> {
        let response = self.execute(endpoint).await?;

        let bytes = response.bytes().await.map_err(|e| ApiError::Network(e.to_string()))?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            let kind = match e.classify() {
                serde_json::error::Category::Data => "missing key or type mismatch",
                serde_json::error::Category::Syntax => "corrupted data",
                serde_json::error::Category::Eof => "missing value",
                serde_json::error::Category::Io => "read failure",
            };
            warn!(path = %endpoint.path, kind, error = %e, "response decoding failed");
            ApiError::Decoding(e.to_string())
        })?;

        info!(path = %endpoint.path, "request successful");
        Ok(value)
    }

    /// Execute an endpoint whose response body is not inspected
    ///
    /// Any 2xx resolves without error; the body, if present, is discarded.
    ///
    /// # Errors
    ///
    /// Any variant of [`ApiError`] except `Decoding` and `InvalidRequest`.
    #[instrument(skip(self, endpoint), fields(path = %endpoint.path))]
    pub async fn send_unit(&self, endpoint: &Endpoint) -> Result<(), ApiError> {
        self.execute(endpoint).await?;
        info!(path = %endpoint.path, "request successful");
        Ok(())
    }

    /// Build, authenticate, and send the request; classify non-2xx statuses.
    async fn execute(&self, endpoint: &Endpoint) -> Result<Response, ApiError> {
        let url = endpoint.url(&self.config.base_url);

        debug!(method = ?endpoint.method, url = %url, "API request");

        let mut request = self.http_client.request(endpoint.method.as_reqwest(), &url);

        if let Some(body) = &endpoint.body {
            request = request.header(CONTENT_TYPE, "application/json").body(body.clone());
        }

        if endpoint.requires_auth {
            // A whitespace-only token is treated as absent
            if let Some(token) = self.auth.access_token().await {
                let token = token.trim();
                if !token.is_empty() {
                    request = request.header("Authorization", format!("Bearer {token}"));
                }
            }
        }

        let response = self.http_client.send(request).await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(Self::classify_status(status, &body))
    }

    fn classify_status(status: StatusCode, body: &[u8]) -> ApiError {
        match status {
            StatusCode::BAD_REQUEST => ApiError::Validation(
                Self::parse_reason(body)
                    .unwrap_or_else(|| DEFAULT_VALIDATION_MESSAGE.to_string()),
            ),
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            _ => ApiError::Server { status: status.as_u16(), reason: Self::parse_reason(body) },
        }
    }

    fn parse_reason(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ReasonBody>(body).ok().map(|b| b.reason)
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
}

impl ApiClientBuilder {
    /// Set the client configuration
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the token provider
    #[must_use]
    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if the token provider is missing or client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let auth = self.auth.ok_or_else(|| {
            ApiError::Network("token provider not set on ApiClient builder".to_string())
        })?;

        ApiClient::new(config, auth)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::auth::StaticTokenProvider;

    #[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
    }

    fn client_for(server: &MockServer, auth: StaticTokenProvider) -> ApiClient {
        let config = ClientConfig { base_url: server.uri(), ..Default::default() };
        ApiClient::new(config, Arc::new(auth)).unwrap()
    }

    #[tokio::test]
    async fn send_decodes_json_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/test"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(TestResponse { message: "success".to_string() }),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, StaticTokenProvider::anonymous());
        let result: TestResponse = client.send(&Endpoint::get("/test")).await.unwrap();
        assert_eq!(result.message, "success");
    }

    #[tokio::test]
    async fn send_unit_ignores_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/account"))
            .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
            .mount(&server)
            .await;

        let client = client_for(&server, StaticTokenProvider::new("abc"));
        let result = client.send_unit(&Endpoint::delete("/account").authorized()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn schema_mismatch_maps_to_decoding_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"nope": 1})))
            .mount(&server)
            .await;

        let client = client_for(&server, StaticTokenProvider::anonymous());
        let result: Result<TestResponse, ApiError> = client.send(&Endpoint::get("/test")).await;
        assert!(matches!(result, Err(ApiError::Decoding(_))));
    }

    #[tokio::test]
    async fn status_401_is_unauthorized_regardless_of_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/protected"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(serde_json::json!({"reason": "expired"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, StaticTokenProvider::new("stale"));
        let result: Result<TestResponse, ApiError> =
            client.send(&Endpoint::get("/protected").authorized()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[tokio::test]
    async fn status_401_with_empty_body_is_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/protected"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = client_for(&server, StaticTokenProvider::anonymous());
        let result = client.send_unit(&Endpoint::get("/protected").authorized()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[tokio::test]
    async fn status_400_surfaces_server_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"reason": "Email already registered"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, StaticTokenProvider::anonymous());
        let result = client.send_unit(&Endpoint::post("/register")).await;
        match result {
            Err(ApiError::Validation(reason)) => assert_eq!(reason, "Email already registered"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn status_400_without_reason_uses_default_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(400).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server, StaticTokenProvider::anonymous());
        let result = client.send_unit(&Endpoint::post("/register")).await;
        match result {
            Err(ApiError::Validation(reason)) => assert_eq!(reason, DEFAULT_VALIDATION_MESSAGE),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn status_404_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server, StaticTokenProvider::anonymous());
        let result = client.send_unit(&Endpoint::get("/missing")).await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn other_statuses_map_to_server_error_with_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/boom"))
            .respond_with(
                ResponseTemplate::new(503).set_body_json(serde_json::json!({"reason": "down"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, StaticTokenProvider::anonymous());
        let result = client.send_unit(&Endpoint::get("/boom")).await;
        match result {
            Err(ApiError::Server { status, reason }) => {
                assert_eq!(status, 503);
                assert_eq!(reason.as_deref(), Some("down"));
            }
            other => panic!("expected server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn bearer_token_is_attached_when_required() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, StaticTokenProvider::new("abc"));
        client.send_unit(&Endpoint::get("/me").authorized()).await.unwrap();
    }

    #[tokio::test]
    async fn token_is_trimmed_before_attachment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, StaticTokenProvider::new("  abc \n"));
        client.send_unit(&Endpoint::get("/me").authorized()).await.unwrap();
    }

    #[tokio::test]
    async fn whitespace_only_token_sends_no_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server, StaticTokenProvider::new("  "));
        client.send_unit(&Endpoint::get("/me").authorized()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].headers.contains_key("Authorization"));
    }

    #[tokio::test]
    async fn anonymous_endpoints_never_send_authorization() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/public"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server, StaticTokenProvider::new("abc"));
        client.send_unit(&Endpoint::get("/public")).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].headers.contains_key("Authorization"));
    }

    #[tokio::test]
    async fn json_body_sets_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({"data": "test"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, StaticTokenProvider::anonymous());
        let endpoint =
            Endpoint::post("/echo").json_body(&serde_json::json!({"data": "test"})).unwrap();
        client.send_unit(&endpoint).await.unwrap();
    }

    #[tokio::test]
    async fn builder_requires_token_provider() {
        let result = ApiClient::builder().build();
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn builder_pattern_constructs_client() {
        let client = ApiClient::builder()
            .auth(Arc::new(StaticTokenProvider::anonymous()))
            .config(ClientConfig::default())
            .build();
        assert!(client.is_ok());
    }
}
