//! Event listings, search, and ticket purchase

use std::sync::Arc;

use localmart_domain::{Event, EventFilters, PurchaseRequest, TicketPurchase};
use tracing::instrument;
use uuid::Uuid;

use crate::api::{ApiClient, ApiError, Endpoint};

const BASE: &str = "/api/events";

/// Read and purchase operations for events
pub struct EventsService {
    client: Arc<ApiClient>,
}

impl EventsService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List events with optional pagination
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Event>, ApiError> {
        let endpoint = Endpoint::get(BASE).query_opt("limit", limit).query_opt("offset", offset);
        self.client.send(&endpoint).await
    }

    /// Curated featured events
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn featured(&self) -> Result<Vec<Event>, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/featured"))).await
    }

    /// Events starting soon
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn upcoming(&self) -> Result<Vec<Event>, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/upcoming"))).await
    }

    /// Events in one category
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn by_category(&self, category: &str) -> Result<Vec<Event>, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/category/{category}"))).await
    }

    /// Server-side search; absent filters are omitted from the request body
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self, filters))]
    pub async fn search(&self, filters: &EventFilters) -> Result<Vec<Event>, ApiError> {
        let endpoint = Endpoint::post(format!("{BASE}/search")).json_body(filters)?;
        self.client.send(&endpoint).await
    }

    /// Fetch one event by id
    ///
    /// # Errors
    /// `NotFound` for unknown ids, or any other [`ApiError`]
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Event, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/{id}"))).await
    }

    /// Purchase tickets for an event
    ///
    /// # Errors
    /// `Validation` when tickets are unavailable, or any other [`ApiError`]
    #[instrument(skip(self))]
    pub async fn purchase(
        &self,
        id: Uuid,
        quantity: u32,
    ) -> Result<TicketPurchase, ApiError> {
        let body = PurchaseRequest { quantity };
        let endpoint =
            Endpoint::post(format!("{BASE}/{id}/purchase")).json_body(&body)?.authorized();
        self.client.send(&endpoint).await
    }
}
