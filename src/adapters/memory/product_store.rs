//! In-memory product store for tests.
//!
//! Approximates the Postgres adapter's behavior closely enough for
//! handler tests: ranked search is a token match over name and
//! description, substring search covers the variant fields too, and
//! browse applies the same filter/sort/paginate order as the SQL
//! queries.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::catalog::{Product, ProductFilter, ProductPage, SortKey};
use crate::domain::foundation::{DomainError, ProductId};
use crate::ports::ProductStore;

/// In-memory [`ProductStore`] implementation.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
#[derive(Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `products`.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    fn all(&self) -> Vec<Product> {
        self.products
            .read()
            .expect("InMemoryProductStore: lock poisoned")
            .clone()
    }
}

/// Number of search tokens a product matches in its name or
/// description.
fn token_score(product: &Product, tokens: &[&str]) -> usize {
    let name = product.name().to_lowercase();
    let description = product.description().to_lowercase();
    tokens
        .iter()
        .filter(|token| name.contains(**token) || description.contains(**token))
        .count()
}

/// Case-insensitive substring match across every text field a customer
/// might type.
fn substring_match(product: &Product, needle: &str) -> bool {
    let hit = |value: &str| value.to_lowercase().contains(needle);
    hit(product.name())
        || hit(product.description())
        || product.categories().iter().any(|c| hit(c))
        || product.colors().iter().any(|c| hit(c))
        || product.sizes().iter().any(|s| hit(s))
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn browse(&self, filter: &ProductFilter) -> Result<ProductPage, DomainError> {
        let mut matched: Vec<Product> = self
            .all()
            .into_iter()
            .filter(|p| {
                filter
                    .category
                    .as_ref()
                    .map(|category| p.categories().iter().any(|c| c == category))
                    .unwrap_or(true)
            })
            .filter(|p| {
                filter
                    .search
                    .as_ref()
                    .map(|search| {
                        let tokens: Vec<&str> = search.split_whitespace().collect();
                        let lowered: Vec<String> =
                            tokens.iter().map(|t| t.to_lowercase()).collect();
                        let refs: Vec<&str> = lowered.iter().map(String::as_str).collect();
                        token_score(p, &refs) > 0
                    })
                    .unwrap_or(true)
            })
            .collect();

        match filter.sort {
            Some(SortKey::PriceAsc) => {
                matched.sort_by(|a, b| a.price().amount().cmp(&b.price().amount()));
            }
            Some(SortKey::PriceDesc) => {
                matched.sort_by(|a, b| b.price().amount().cmp(&a.price().amount()));
            }
            Some(SortKey::Sale) => {
                matched.retain(Product::is_on_sale);
                matched.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
            }
            Some(SortKey::Newest) | None => {
                matched.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
            }
        }

        let total = matched.len() as u64;
        let page: Vec<Product> = matched
            .into_iter()
            .skip(filter.offset() as usize)
            .take(filter.limit as usize)
            .collect();

        Ok(ProductPage::new(page, filter.page, filter.limit, total))
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        Ok(self.all().into_iter().find(|p| p.id() == id))
    }

    async fn search_ranked(&self, query: &str, limit: u32) -> Result<Vec<Product>, DomainError> {
        let lowered = query.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(usize, Product)> = self
            .all()
            .into_iter()
            .filter_map(|p| {
                let score = token_score(&p, &tokens);
                (score > 0).then_some((score, p))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(scored
            .into_iter()
            .take(limit as usize)
            .map(|(_, p)| p)
            .collect())
    }

    async fn search_substring(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Product>, DomainError> {
        let needle = query.to_lowercase();
        Ok(self
            .all()
            .into_iter()
            .filter(|p| substring_match(p, &needle))
            .take(limit as usize)
            .collect())
    }

    async fn featured(&self, limit: u32) -> Result<Vec<Product>, DomainError> {
        Ok(self
            .all()
            .into_iter()
            .filter(Product::featured)
            .take(limit as usize)
            .collect())
    }

    async fn on_sale(&self, limit: u32) -> Result<Vec<Product>, DomainError> {
        Ok(self
            .all()
            .into_iter()
            .filter(|p| p.is_on_sale() && p.in_stock())
            .take(limit as usize)
            .collect())
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, DomainError> {
        let mut seen = Vec::new();
        for product in self.all() {
            for category in product.categories() {
                let trimmed = category.trim();
                if !trimmed.is_empty() && !seen.iter().any(|s: &String| s == trimmed) {
                    seen.push(trimmed.to_string());
                }
            }
        }
        Ok(seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Price;
    use rust_decimal::Decimal;

    fn product(
        name: &str,
        price: i64,
        sale: Option<i64>,
        categories: &[&str],
        in_stock: bool,
        featured: bool,
    ) -> Product {
        Product::new(
            ProductId::new(),
            name.to_string(),
            format!("{} for the storefront", name),
            Price::new(Decimal::new(price, 0)).unwrap(),
            sale.map(|s| Decimal::new(s, 0)),
            categories.iter().map(|c| c.to_string()).collect(),
            vec![],
            vec!["M".to_string()],
            vec!["Black".to_string()],
            in_stock,
            featured,
        )
        .unwrap()
    }

    fn seeded() -> InMemoryProductStore {
        InMemoryProductStore::with_products(vec![
            product("Baggy Pants", 2500, None, &["Pants"], true, false),
            product("Denim Jacket", 4000, Some(3000), &["Jackets"], true, true),
            product("Flannel Shirt", 2200, Some(1800), &["Shirts"], false, false),
        ])
    }

    #[tokio::test]
    async fn browse_filters_by_category() {
        let store = seeded();
        let page = store
            .browse(&ProductFilter::new(
                Some("Pants".to_string()),
                None,
                None,
                None,
                None,
            ))
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.products[0].name(), "Baggy Pants");
    }

    #[tokio::test]
    async fn browse_sorts_by_price() {
        let store = seeded();
        let page = store
            .browse(&ProductFilter::new(
                None,
                None,
                Some(SortKey::PriceAsc),
                None,
                None,
            ))
            .await
            .unwrap();

        let names: Vec<&str> = page.products.iter().map(Product::name).collect();
        assert_eq!(names, vec!["Flannel Shirt", "Baggy Pants", "Denim Jacket"]);
    }

    #[tokio::test]
    async fn browse_sale_sort_keeps_only_discounted() {
        let store = seeded();
        let page = store
            .browse(&ProductFilter::new(
                None,
                None,
                Some(SortKey::Sale),
                None,
                None,
            ))
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert!(page.products.iter().all(|p| p.is_on_sale()));
    }

    #[tokio::test]
    async fn browse_paginates_and_counts_the_whole_match() {
        let store = seeded();
        let page = store
            .browse(&ProductFilter::new(None, None, None, Some(2), Some(2)))
            .await
            .unwrap();

        assert_eq!(page.products.len(), 1);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn ranked_search_orders_by_token_hits() {
        let store = InMemoryProductStore::with_products(vec![
            product("Pants", 2000, None, &["Pants"], true, false),
            product("Baggy Pants", 2500, None, &["Pants"], true, false),
        ]);

        let found = store.search_ranked("baggy pants", 10).await.unwrap();
        assert_eq!(found[0].name(), "Baggy Pants");
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn substring_search_covers_variant_fields() {
        let store = seeded();

        let by_color = store.search_substring("black", 10).await.unwrap();
        assert_eq!(by_color.len(), 3);

        let by_category = store.search_substring("jacke", 10).await.unwrap();
        assert!(!by_category.is_empty());
    }

    #[tokio::test]
    async fn on_sale_requires_stock() {
        let store = seeded();
        let sale = store.on_sale(10).await.unwrap();

        // Flannel Shirt is discounted but out of stock.
        assert_eq!(sale.len(), 1);
        assert_eq!(sale[0].name(), "Denim Jacket");
    }

    #[tokio::test]
    async fn featured_filters_by_flag() {
        let store = seeded();
        let featured = store.featured(10).await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].name(), "Denim Jacket");
    }

    #[tokio::test]
    async fn categories_are_distinct_and_non_blank() {
        let store = InMemoryProductStore::with_products(vec![
            product("A", 1000, None, &["Pants", ""], true, false),
            product("B", 1000, None, &["Pants", "Shirts"], true, false),
        ]);

        let categories = store.distinct_categories().await.unwrap();
        assert_eq!(categories, vec!["Pants", "Shirts"]);
    }
}
