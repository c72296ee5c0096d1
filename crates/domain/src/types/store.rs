//! Store types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store listing as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub address: String,
    pub city: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub is_open: bool,
    pub opening_hours: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}
