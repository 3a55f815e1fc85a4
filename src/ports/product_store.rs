//! Product store port (read side).
//!
//! The catalog is written by separate admin tooling; this service only
//! reads it. Two families of queries exist: storefront browsing with
//! pagination, and the bounded retrieval queries the chat assistant
//! uses to ground its replies.

use async_trait::async_trait;

use crate::domain::catalog::{Product, ProductFilter, ProductPage};
use crate::domain::foundation::{DomainError, ProductId};

/// Read port over the product catalog.
///
/// Implementations back the storefront browse endpoint and chat
/// retrieval. Chat callers are expected to treat errors as empty
/// results; the browse path surfaces them.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Paginated browse with optional category, free-text, and sort.
    ///
    /// # Errors
    ///
    /// - `StoreError` on persistence failure
    async fn browse(&self, filter: &ProductFilter) -> Result<ProductPage, DomainError>;

    /// Find a single product by ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// Relevance-ranked full-text search over name and description.
    async fn search_ranked(&self, query: &str, limit: u32) -> Result<Vec<Product>, DomainError>;

    /// Case-insensitive substring match across name, description,
    /// categories, colors, and sizes, in the store's natural order.
    async fn search_substring(&self, query: &str, limit: u32)
        -> Result<Vec<Product>, DomainError>;

    /// Products flagged as featured.
    async fn featured(&self, limit: u32) -> Result<Vec<Product>, DomainError>;

    /// In-stock products with an active sale price.
    async fn on_sale(&self, limit: u32) -> Result<Vec<Product>, DomainError>;

    /// Distinct non-blank category labels across the whole catalog.
    async fn distinct_categories(&self) -> Result<Vec<String>, DomainError>;
}
