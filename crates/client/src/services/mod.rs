//! Domain services
//!
//! One facade per resource family. Each service builds [`Endpoint`]s for its
//! base path, calls the shared [`ApiClient`], and returns decoded domain
//! types. Failures propagate the client's [`ApiError`] unchanged; services
//! perform no error translation and no session mutation.
//!
//! [`Endpoint`]: crate::api::Endpoint
//! [`ApiClient`]: crate::api::ApiClient
//! [`ApiError`]: crate::api::ApiError

pub mod auth;
pub mod events;
pub mod products;
pub mod profile;
pub mod stores;

pub use auth::AuthService;
pub use events::EventsService;
pub use products::ProductsService;
pub use profile::ProfileService;
pub use stores::StoresService;
