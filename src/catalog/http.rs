//! HTTP product listing source.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::config::{Config, validate_endpoint};
use crate::error::{Result, StorefrontError};

use super::{CatalogSource, Product};

/// The structure of the JSON response from the listing endpoint
#[derive(Deserialize, Debug)]
struct ProductListResponse {
    products: Vec<Product>,
}

/// Fetches products with `GET {endpoint}?limit=N`
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpCatalogSource {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = validate_endpoint(endpoint)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StorefrontError::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    /// Create a source from configuration (endpoint env override applies)
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.endpoint(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self, limit: u32) -> Result<Vec<Product>> {
        tracing::debug!(endpoint = %self.endpoint, limit, "fetching catalog");

        let resp = self
            .client
            .get(self.endpoint.clone())
            .query(&[("limit", limit)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StorefrontError::Api(format!(
                "product listing returned {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = resp.json::<ProductListResponse>().await?;
        Ok(body.products)
    }
}
