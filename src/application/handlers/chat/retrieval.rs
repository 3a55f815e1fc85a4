//! Fail-soft product retrieval for chat turns.
//!
//! Chat replies must come back even when the catalog store is down, so
//! every query here logs failures and degrades to an empty result
//! instead of propagating the error.

use std::sync::Arc;

use tracing::warn;

use crate::domain::catalog::Product;
use crate::ports::ProductStore;

/// Result cap for free-text search.
const SEARCH_LIMIT: u32 = 10;

/// Result cap for the sale and featured showcases.
const SHOWCASE_LIMIT: u32 = 5;

/// Bounded, fail-soft catalog queries used to ground chat replies.
pub struct ContentRetriever {
    products: Arc<dyn ProductStore>,
}

impl ContentRetriever {
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }

    /// Free-text product search: ranked first, then a substring pass
    /// when ranking matched nothing.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        let ranked = match self.products.search_ranked(query, SEARCH_LIMIT).await {
            Ok(found) => found,
            Err(error) => {
                warn!(%error, query, "ranked product search failed");
                return Vec::new();
            }
        };
        if !ranked.is_empty() {
            return ranked;
        }

        match self.products.search_substring(query, SEARCH_LIMIT).await {
            Ok(found) => found,
            Err(error) => {
                warn!(%error, query, "substring product search failed");
                Vec::new()
            }
        }
    }

    /// Products currently discounted and in stock.
    pub async fn on_sale(&self) -> Vec<Product> {
        match self.products.on_sale(SHOWCASE_LIMIT).await {
            Ok(found) => found,
            Err(error) => {
                warn!(%error, "sale product lookup failed");
                Vec::new()
            }
        }
    }

    /// Products flagged for the storefront showcase.
    pub async fn featured(&self) -> Vec<Product> {
        match self.products.featured(SHOWCASE_LIMIT).await {
            Ok(found) => found,
            Err(error) => {
                warn!(%error, "featured product lookup failed");
                Vec::new()
            }
        }
    }

    /// Distinct category labels across the catalog.
    pub async fn categories(&self) -> Vec<String> {
        match self.products.distinct_categories().await {
            Ok(found) => found,
            Err(error) => {
                warn!(%error, "category lookup failed");
                Vec::new()
            }
        }
    }
}
