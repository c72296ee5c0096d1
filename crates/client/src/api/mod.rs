//! Typed API client for the Localmart backend
//!
//! This module turns declarative [`Endpoint`] values into HTTP requests,
//! attaches bearer authentication from an injected token provider, and
//! interprets responses into typed results or [`ApiError`] values.
//!
//! # Architecture
//!
//! - Uses the crate's `HttpClient` (no direct reqwest)
//! - Credentials come from an [`AccessTokenProvider`] read at call time
//! - No retries, no token refresh, no caching: every call is one attempt
//! - The client never mutates session state; callers react to errors

pub mod auth;
pub mod client;
pub mod endpoint;
pub mod errors;

pub use auth::{AccessTokenProvider, StaticTokenProvider};
pub use client::{ApiClient, ApiClientBuilder};
pub use endpoint::{Endpoint, HttpMethod};
pub use errors::ApiError;
