//! Session and token storage
//!
//! The session store is the source of truth for "is a user logged in"; the
//! token store persists the single bearer token across process runs.

pub mod store;
pub mod token_store;

pub use store::SessionStore;
pub use token_store::{InMemoryTokenStore, KeyringTokenStore, TokenStore, TokenStoreError};
