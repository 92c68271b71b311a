//! Product catalog loading.
//!
//! The catalog is fetched once from a [`CatalogSource`] and replaced
//! wholesale on every successful load. Fetch failures are logged and
//! otherwise swallowed: the loading flag is cleared and the previous
//! catalog (empty at startup) stays in place.

pub mod http;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use http::HttpCatalogSource;

/// Unique product identifier as returned by the listing endpoint
pub type ProductId = u64;

/// A single product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub rating: f64,
    /// Image URL
    #[serde(default)]
    pub thumbnail: String,
}

impl Product {
    pub fn new(id: ProductId, title: impl Into<String>, price: f64, rating: f64) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            rating,
            thumbnail: String::new(),
        }
    }

    /// Price as rendered in listings, e.g. `9.99$`
    pub fn price_label(&self) -> String {
        format!("{}$", self.price)
    }

    /// Rating as rendered in listings, e.g. `4.94 ★`
    pub fn rating_label(&self) -> String {
        format!("{} ★", self.rating)
    }
}

/// Source of product records
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch up to `limit` products
    async fn fetch_products(&self, limit: u32) -> Result<Vec<Product>>;
}

/// Owns the catalog and its loading flag for the session lifetime
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: Vec<Product>,
    loading: bool,
    limit: u32,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_LIMIT)
    }
}

impl CatalogLoader {
    /// Create a loader with an empty catalog. Starts in the loading state
    /// so that nothing renders before the first fetch completes.
    pub fn new(limit: u32) -> Self {
        Self {
            catalog: Vec::new(),
            loading: true,
            limit,
        }
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Fetch the catalog from `source`.
    ///
    /// Returns `true` when the catalog was replaced. A failed fetch leaves
    /// the current catalog untouched and only clears the loading flag.
    pub async fn load(&mut self, source: &dyn CatalogSource) -> bool {
        self.loading = true;
        let result = source.fetch_products(self.limit).await;
        self.finish(result)
    }

    /// Apply the outcome of a fetch that ran elsewhere (e.g. in a TUI
    /// async handler) using the same rules as [`CatalogLoader::load`].
    pub fn finish(&mut self, result: Result<Vec<Product>>) -> bool {
        self.loading = false;
        match result {
            Ok(products) => {
                tracing::debug!(count = products.len(), "catalog loaded");
                self.catalog = products;
                true
            }
            Err(e) => {
                tracing::warn!("Failed to load catalog: {e}");
                false
            }
        }
    }

    /// Mark a reload as in flight without touching the current catalog
    pub fn begin(&mut self) {
        self.loading = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorefrontError;

    struct StaticSource(Vec<Product>);

    #[async_trait::async_trait]
    impl CatalogSource for StaticSource {
        async fn fetch_products(&self, limit: u32) -> Result<Vec<Product>> {
            Ok(self.0.iter().take(limit as usize).cloned().collect())
        }
    }

    struct FailingSource;

    #[async_trait::async_trait]
    impl CatalogSource for FailingSource {
        async fn fetch_products(&self, _limit: u32) -> Result<Vec<Product>> {
            Err(StorefrontError::Api("boom".to_string()))
        }
    }

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "Phone", 10.0, 4.0),
            Product::new(2, "Laptop", 20.0, 3.5),
            Product::new(3, "Mascara", 5.0, 4.9),
        ]
    }

    #[test]
    fn test_new_loader_is_loading_and_empty() {
        let loader = CatalogLoader::new(194);
        assert!(loader.is_loading());
        assert!(loader.catalog().is_empty());
        assert_eq!(loader.limit(), 194);
    }

    #[tokio::test]
    async fn test_load_success_replaces_catalog() {
        let mut loader = CatalogLoader::new(194);
        assert!(loader.load(&StaticSource(products())).await);
        assert!(!loader.is_loading());
        assert_eq!(loader.catalog(), products().as_slice());
    }

    #[tokio::test]
    async fn test_load_respects_limit() {
        let mut loader = CatalogLoader::new(2);
        loader.load(&StaticSource(products())).await;
        assert_eq!(loader.catalog().len(), 2);
    }

    #[tokio::test]
    async fn test_load_failure_is_swallowed() {
        let mut loader = CatalogLoader::new(194);
        assert!(!loader.load(&FailingSource).await);
        assert!(!loader.is_loading());
        assert!(loader.catalog().is_empty());
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_catalog() {
        let mut loader = CatalogLoader::new(194);
        loader.load(&StaticSource(products())).await;

        loader.begin();
        assert!(loader.is_loading());
        assert!(!loader.load(&FailingSource).await);
        assert_eq!(loader.catalog().len(), 3);
    }

    #[tokio::test]
    async fn test_reload_replaces_wholesale() {
        let mut loader = CatalogLoader::new(194);
        loader.load(&StaticSource(products())).await;
        loader
            .load(&StaticSource(vec![Product::new(9, "Desk", 99.0, 2.0)]))
            .await;
        assert_eq!(loader.catalog().len(), 1);
        assert_eq!(loader.catalog()[0].id, 9);
    }

    #[test]
    fn test_labels_use_shortest_number_form() {
        let product = Product::new(1, "Phone", 549.0, 4.5);
        assert_eq!(product.price_label(), "549$");
        assert_eq!(product.rating_label(), "4.5 ★");
        assert_eq!(Product::new(2, "Mascara", 9.99, 4.94).price_label(), "9.99$");
    }

    #[test]
    fn test_product_deserialize_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "Popular mascara",
            "price": 9.99,
            "rating": 4.94,
            "stock": 5,
            "thumbnail": "https://cdn.example.com/1/thumbnail.png"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.price, 9.99);
        assert_eq!(product.thumbnail, "https://cdn.example.com/1/thumbnail.png");
    }
}
