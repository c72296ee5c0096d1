//! # Localmart Client
//!
//! Networking and service layer for the Localmart marketplace client.
//!
//! This crate contains:
//! - HTTP transport wrapper (reqwest)
//! - Declarative endpoints and the typed API client
//! - Session and token storage (platform keychain)
//! - Domain services (auth, profile, events, products, stores)
//! - The dependency container wiring everything together
//!
//! ## Architecture
//! - Depends on `localmart-domain` for pure data types
//! - Contains all "impure" code (network I/O, keychain access)
//! - One `ApiClient` per process, constructed by [`ServiceContainer`]

pub mod api;
pub mod config;
pub mod container;
pub mod http;
pub mod services;
pub mod session;

// Re-export commonly used items
pub use api::{AccessTokenProvider, ApiClient, ApiError, Endpoint, HttpMethod};
pub use container::ServiceContainer;
pub use services::{AuthService, EventsService, ProductsService, ProfileService, StoresService};
pub use session::{InMemoryTokenStore, KeyringTokenStore, SessionStore, TokenStore};
