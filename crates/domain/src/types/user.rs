//! User profile and authentication response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User profile as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub avatar_url: Option<String>,
    /// Membership tier (e.g., "basic", "silver", "gold")
    pub membership_tier: String,
    pub points: i64,
    pub created_at: DateTime<Utc>,
}

/// Response from login and register calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserProfile,
    pub token: String,
}

/// Loyalty points balance
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointsBalance {
    pub points: i64,
}
