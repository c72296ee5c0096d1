//! Event and ticket purchase types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event listing as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub venue: String,
    pub city: Option<String>,
    pub price: f64,
    pub starts_at: DateTime<Utc>,
    pub available_tickets: Option<i64>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Confirmation returned after a ticket purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketPurchase {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub quantity: u32,
    pub total_price: f64,
    pub purchased_at: DateTime<Utc>,
}
