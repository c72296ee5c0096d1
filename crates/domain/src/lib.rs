//! # Localmart Domain
//!
//! Business domain types for the Localmart client SDK.
//!
//! This crate contains:
//! - Domain data types (UserProfile, Event, Product, Store, ...)
//! - Request body and search filter types
//! - Client configuration structures
//!
//! ## Architecture
//! - No dependencies on other Localmart crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod requests;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use requests::*;
pub use types::*;
