//! Declarative HTTP endpoints
//!
//! An [`Endpoint`] fully determines a request: path, method, query pairs,
//! optional JSON body bytes, and whether bearer authentication is required.
//! Endpoints are immutable once constructed and carry no identity beyond
//! their fields.

use serde::Serialize;
use url::form_urlencoded;

use super::errors::ApiError;

/// HTTP methods used by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Declarative description of one HTTP call
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub path: String,
    pub method: HttpMethod,
    /// Query pairs in the order they will appear on the wire
    pub query: Vec<(String, String)>,
    /// JSON payload, already serialized
    pub body: Option<Vec<u8>>,
    pub requires_auth: bool,
}

impl Endpoint {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self { path: path.into(), method, query: Vec::new(), body: None, requires_auth: false }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Append one query pair; order of calls is preserved on the wire.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Append a query pair only when the value is present.
    #[must_use]
    pub fn query_opt(self, name: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Attach a JSON body serialized from `payload`.
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidRequest`] if the payload cannot be
    /// serialized.
    pub fn json_body<T: Serialize>(mut self, payload: &T) -> Result<Self, ApiError> {
        let bytes = serde_json::to_vec(payload)
            .map_err(|e| ApiError::InvalidRequest(format!("request body serialization: {e}")))?;
        self.body = Some(bytes);
        Ok(self)
    }

    /// Mark this endpoint as requiring bearer authentication.
    #[must_use]
    pub fn authorized(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Build the absolute URL for this endpoint.
    ///
    /// Query pairs are appended in the order given, only when non-empty.
    /// No path validation is performed; a malformed result surfaces as a
    /// network failure at send time.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}{}", base_url.trim_end_matches('/'), self.path);

        if !self.query.is_empty() {
            let query: String = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .finish();
            url.push('?');
            url.push_str(&query);
        }

        url
    }
}
