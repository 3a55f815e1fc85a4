//! Storefront catalog queries.
//!
//! Unlike chat retrieval these are not fail-soft: a browsing customer
//! should see an error page, not a silently empty shop.

use std::sync::Arc;

use crate::domain::catalog::{Product, ProductFilter, ProductPage};
use crate::domain::foundation::{DomainError, ErrorCode, ProductId};
use crate::ports::ProductStore;

/// Query handler for the public product listing and detail pages.
pub struct CatalogQueries {
    store: Arc<dyn ProductStore>,
}

impl CatalogQueries {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Paginated browse with optional category, search, and sort.
    pub async fn browse(&self, filter: &ProductFilter) -> Result<ProductPage, DomainError> {
        self.store.browse(filter).await
    }

    /// Single product lookup.
    pub async fn get(&self, id: &ProductId) -> Result<Product, DomainError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProductNotFound, "Product not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProductStore;
    use crate::domain::catalog::{Price, SortKey};
    use rust_decimal::Decimal;

    fn product(name: &str, price: i64) -> Product {
        Product::new(
            ProductId::new(),
            name.to_string(),
            format!("{} description", name),
            Price::new(Decimal::new(price, 0)).unwrap(),
            None,
            vec!["Shirts".to_string()],
            vec![],
            vec![],
            vec![],
            true,
            false,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn browse_returns_a_page() {
        let store = Arc::new(InMemoryProductStore::with_products(vec![
            product("Flannel Shirt", 2200),
            product("Oxford Shirt", 2600),
        ]));
        let queries = CatalogQueries::new(store);

        let page = queries
            .browse(&ProductFilter::new(
                None,
                None,
                Some(SortKey::PriceAsc),
                None,
                None,
            ))
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.products[0].name(), "Flannel Shirt");
    }

    #[tokio::test]
    async fn get_returns_the_product() {
        let item = product("Flannel Shirt", 2200);
        let id = *item.id();
        let store = Arc::new(InMemoryProductStore::with_products(vec![item]));
        let queries = CatalogQueries::new(store);

        let found = queries.get(&id).await.unwrap();
        assert_eq!(found.name(), "Flannel Shirt");
    }

    #[tokio::test]
    async fn get_reports_missing_products() {
        let queries = CatalogQueries::new(Arc::new(InMemoryProductStore::new()));

        let result = queries.get(&ProductId::new()).await;
        assert_eq!(result.unwrap_err().code, ErrorCode::ProductNotFound);
    }
}
