//! Product types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product listing as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
    /// Discounted price when the product is part of a deal
    pub deal_price: Option<f64>,
    pub calories: Option<i64>,
    pub prep_time_minutes: Option<i64>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
    /// Store offering this product, when known
    pub store_id: Option<Uuid>,
    #[serde(default)]
    pub featured: bool,
}
