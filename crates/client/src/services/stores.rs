//! Store listings and search

use std::sync::Arc;

use localmart_domain::{Store, StoreFilters};
use tracing::instrument;
use uuid::Uuid;

use crate::api::{ApiClient, ApiError, Endpoint};

const BASE: &str = "/api/stores";

/// Read operations for stores
pub struct StoresService {
    client: Arc<ApiClient>,
}

impl StoresService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List stores with optional pagination
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Store>, ApiError> {
        let endpoint = Endpoint::get(BASE).query_opt("limit", limit).query_opt("offset", offset);
        self.client.send(&endpoint).await
    }

    /// Curated featured stores
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn featured(&self) -> Result<Vec<Store>, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/featured"))).await
    }

    /// Stores that are open right now
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn open_now(&self) -> Result<Vec<Store>, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/open"))).await
    }

    /// Stores in one category
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn by_category(&self, category: &str) -> Result<Vec<Store>, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/category/{category}"))).await
    }

    /// Server-side search; absent filters are omitted from the request body
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self, filters))]
    pub async fn search(&self, filters: &StoreFilters) -> Result<Vec<Store>, ApiError> {
        let endpoint = Endpoint::post(format!("{BASE}/search")).json_body(filters)?;
        self.client.send(&endpoint).await
    }

    /// Fetch one store by id
    ///
    /// # Errors
    /// `NotFound` for unknown ids, or any other [`ApiError`]
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Store, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/{id}"))).await
    }
}
