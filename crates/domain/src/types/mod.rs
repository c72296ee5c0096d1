//! Domain types and models
//!
//! DTOs deserialized from backend JSON responses. These are independent
//! projections of server state; the client enforces no cross-entity
//! referential integrity.

pub mod event;
pub mod product;
pub mod store;
pub mod user;

pub use event::{Event, TicketPurchase};
pub use product::Product;
pub use store::Store;
pub use user::{AuthResponse, PointsBalance, UserProfile};
