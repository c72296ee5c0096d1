//! Product listings and search

use std::sync::Arc;

use localmart_domain::{Product, ProductFilters};
use tracing::instrument;
use uuid::Uuid;

use crate::api::{ApiClient, ApiError, Endpoint};

const BASE: &str = "/api/products";

/// Read operations for products
pub struct ProductsService {
    client: Arc<ApiClient>,
}

impl ProductsService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List products with optional pagination
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Product>, ApiError> {
        let endpoint = Endpoint::get(BASE).query_opt("limit", limit).query_opt("offset", offset);
        self.client.send(&endpoint).await
    }

    /// Curated featured products
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn featured(&self) -> Result<Vec<Product>, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/featured"))).await
    }

    /// Products currently on a deal
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn deals(&self) -> Result<Vec<Product>, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/deals"))).await
    }

    /// Trending products
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn trending(&self) -> Result<Vec<Product>, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/trending"))).await
    }

    /// Healthy picks
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn healthy(&self) -> Result<Vec<Product>, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/healthy"))).await
    }

    /// Quick-preparation products
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn quick(&self) -> Result<Vec<Product>, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/quick"))).await
    }

    /// Products in one category
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self))]
    pub async fn by_category(&self, category: &str) -> Result<Vec<Product>, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/category/{category}"))).await
    }

    /// Server-side search; absent filters are omitted from the request body
    ///
    /// # Errors
    /// Any [`ApiError`]
    #[instrument(skip(self, filters))]
    pub async fn search(&self, filters: &ProductFilters) -> Result<Vec<Product>, ApiError> {
        let endpoint = Endpoint::post(format!("{BASE}/search")).json_body(filters)?;
        self.client.send(&endpoint).await
    }

    /// Fetch one product by id
    ///
    /// # Errors
    /// `NotFound` for unknown ids, or any other [`ApiError`]
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Product, ApiError> {
        self.client.send(&Endpoint::get(format!("{BASE}/{id}"))).await
    }
}
