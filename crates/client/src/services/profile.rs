//! User profile, membership, and loyalty points

use std::sync::Arc;

use localmart_domain::{
    AddPointsRequest, MembershipRequest, PointsBalance, UpdateProfileRequest, UserProfile,
};
use tracing::instrument;

use crate::api::{ApiClient, ApiError, Endpoint};

const BASE: &str = "/api/users";

/// Profile reads and writes for the authenticated user
pub struct ProfileService {
    client: Arc<ApiClient>,
}

impl ProfileService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetch the current user's profile
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/profile")).authorized()).await
    }

    /// Update profile fields; unset fields are left unchanged server-side
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<UserProfile, ApiError> {
        let endpoint =
            Endpoint::put(format!("{BASE}/profile")).json_body(request)?.authorized();
        self.client.send(&endpoint).await
    }

    /// Change the membership tier
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn update_membership(&self, tier: &str) -> Result<UserProfile, ApiError> {
        let body = MembershipRequest { tier: tier.to_string() };
        let endpoint =
            Endpoint::put(format!("{BASE}/membership")).json_body(&body)?.authorized();
        self.client.send(&endpoint).await
    }

    /// Fetch the loyalty points balance
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn points(&self) -> Result<PointsBalance, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/points")).authorized()).await
    }

    /// Add loyalty points, returning the new balance
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn add_points(&self, amount: i64) -> Result<PointsBalance, ApiError> {
        let body = AddPointsRequest { amount };
        let endpoint =
            Endpoint::post(format!("{BASE}/points/add")).json_body(&body)?.authorized();
        self.client.send(&endpoint).await
    }
}
