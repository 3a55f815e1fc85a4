//! PostgreSQL implementation of ProductStore.
//!
//! Ranked search rides Postgres full-text search with the `simple`
//! configuration, since the catalog mixes Arabic and English and a
//! language stemmer would mangle one or the other. The substring
//! fallback is a plain ILIKE sweep across the descriptive fields.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::catalog::{Price, Product, ProductFilter, ProductPage, SortKey};
use crate::domain::foundation::{DomainError, ProductId, Timestamp};
use crate::ports::ProductStore;

/// PostgreSQL implementation of ProductStore.
#[derive(Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    /// Creates a new PostgresProductStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PRODUCT_COLUMNS: &str = "id, name, description, price, sale_price, categories, image_urls, \
     sizes, colors, in_stock, featured, created_at, updated_at";

/// Matches the browse/search text against name and description.
const TEXT_VECTOR: &str = "to_tsvector('simple', name || ' ' || description)";

/// A sale price only counts when it actually undercuts the price.
const ON_SALE_PREDICATE: &str = "sale_price IS NOT NULL AND sale_price > 0 AND sale_price < price";

#[async_trait]
impl ProductStore for PostgresProductStore {
    async fn browse(&self, filter: &ProductFilter) -> Result<ProductPage, DomainError> {
        let sale_clause = if filter.sort == Some(SortKey::Sale) {
            format!("AND {ON_SALE_PREDICATE}")
        } else {
            String::new()
        };
        let order_clause = match filter.sort {
            Some(SortKey::PriceAsc) => "ORDER BY price ASC, created_at DESC",
            Some(SortKey::PriceDesc) => "ORDER BY price DESC, created_at DESC",
            Some(SortKey::Sale) | Some(SortKey::Newest) | None => "ORDER BY created_at DESC",
        };
        let where_clause = format!(
            "WHERE ($1::text IS NULL OR $1 = ANY(categories)) \
             AND ($2::text IS NULL OR {TEXT_VECTOR} @@ websearch_to_tsquery('simple', $2)) \
             {sale_clause}"
        );

        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products {where_clause} {order_clause} LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, ProductRow>(&query)
            .bind(filter.category.as_deref())
            .bind(filter.search.as_deref())
            .bind(i64::from(filter.limit))
            .bind(filter.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to browse products: {}", e)))?;

        let count_query = format!("SELECT COUNT(*) FROM products {where_clause}");
        let total: (i64,) = sqlx::query_as(&count_query)
            .bind(filter.category.as_deref())
            .bind(filter.search.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to count products: {}", e)))?;

        let products: Result<Vec<Product>, DomainError> =
            rows.into_iter().map(row_to_product).collect();
        Ok(ProductPage::new(
            products?,
            filter.page,
            filter.limit,
            total.0.max(0) as u64,
        ))
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch product: {}", e)))?;

        row.map(row_to_product).transpose()
    }

    async fn search_ranked(&self, query: &str, limit: u32) -> Result<Vec<Product>, DomainError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS}, \
             ts_rank({TEXT_VECTOR}, websearch_to_tsquery('simple', $1)) AS rank \
             FROM products \
             WHERE {TEXT_VECTOR} @@ websearch_to_tsquery('simple', $1) \
             ORDER BY rank DESC, created_at DESC \
             LIMIT $2"
        ))
        .bind(query)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to run ranked search: {}", e)))?;

        rows.into_iter().map(row_to_product).collect()
    }

    async fn search_substring(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Product>, DomainError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE name ILIKE $1 \
                OR description ILIKE $1 \
                OR EXISTS (SELECT 1 FROM unnest(categories) AS entry WHERE entry ILIKE $1) \
                OR EXISTS (SELECT 1 FROM unnest(colors) AS entry WHERE entry ILIKE $1) \
                OR EXISTS (SELECT 1 FROM unnest(sizes) AS entry WHERE entry ILIKE $1) \
             ORDER BY created_at \
             LIMIT $2"
        ))
        .bind(like_pattern(query))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to run substring search: {}", e)))?;

        rows.into_iter().map(row_to_product).collect()
    }

    async fn featured(&self, limit: u32) -> Result<Vec<Product>, DomainError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE featured ORDER BY created_at LIMIT $1"
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch featured products: {}", e)))?;

        rows.into_iter().map(row_to_product).collect()
    }

    async fn on_sale(&self, limit: u32) -> Result<Vec<Product>, DomainError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE in_stock AND {ON_SALE_PREDICATE} \
             ORDER BY created_at \
             LIMIT $1"
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch sale products: {}", e)))?;

        rows.into_iter().map(row_to_product).collect()
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, DomainError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT trim(entry) AS category
            FROM products, unnest(categories) AS entry
            WHERE trim(entry) <> ''
            ORDER BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch categories: {}", e)))?;

        Ok(rows.into_iter().map(|(category,)| category).collect())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Row mapping
// ════════════════════════════════════════════════════════════════════════════

/// Database row for a product.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: uuid::Uuid,
    name: String,
    description: String,
    price: Decimal,
    sale_price: Option<Decimal>,
    categories: Vec<String>,
    image_urls: Vec<String>,
    sizes: Vec<String>,
    colors: Vec<String>,
    in_stock: bool,
    featured: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

fn row_to_product(row: ProductRow) -> Result<Product, DomainError> {
    let price = Price::new(row.price)
        .map_err(|e| DomainError::store(format!("Invalid product row: {}", e)))?;
    let sale_price = Product::normalize_sale_price(&price, row.sale_price);

    Ok(Product::reconstitute(
        ProductId::from_uuid(row.id),
        row.name,
        row.description,
        price,
        sale_price,
        row.categories,
        row.image_urls,
        row.sizes,
        row.colors,
        row.in_stock,
        row.featured,
        Timestamp::from_datetime(row.created_at),
        Timestamp::from_datetime(row.updated_at),
    ))
}

/// Wraps a query in `%...%`, escaping LIKE metacharacters first.
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
