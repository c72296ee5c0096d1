//! HTTP transport
//!
//! Thin wrapper around reqwest shared by the API client. One fixed timeout,
//! one attempt per request.

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
