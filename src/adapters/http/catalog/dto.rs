//! HTTP DTOs for catalog endpoints.
//!
//! The storefront front end consumes camelCase JSON; prices serialize
//! as decimal strings so DZD amounts survive untouched.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Product, ProductPage};

/// Query parameters accepted by the browse endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowseParams {
    /// Restrict to one category.
    pub category: Option<String>,
    /// Text search over name and description.
    pub search: Option<String>,
    /// One of `price_asc`, `price_desc`, `newest`, `sale`.
    pub sort: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size (defaults to 20).
    pub limit: Option<u32>,
}

/// A catalog product as the storefront sees it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub sale_price: Option<Decimal>,
    pub categories: Vec<String>,
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub in_stock: bool,
    pub featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            price: product.price().amount(),
            sale_price: product.sale_price().map(|p| p.amount()),
            categories: product.categories().to_vec(),
            images: product.image_urls().to_vec(),
            sizes: product.sizes().to_vec(),
            colors: product.colors().to_vec(),
            in_stock: product.in_stock(),
            featured: product.featured(),
            created_at: product.created_at().to_rfc3339(),
            updated_at: product.updated_at().to_rfc3339(),
        }
    }
}

/// One page of browse results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPageResponse {
    pub products: Vec<ProductResponse>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total: u64,
}

impl From<ProductPage> for ProductPageResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            products: page.products.iter().map(ProductResponse::from).collect(),
            current_page: page.current_page,
            total_pages: page.total_pages,
            total: page.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Price;
    use crate::domain::foundation::ProductId;

    fn product() -> Product {
        Product::new(
            ProductId::new(),
            "Baggy Pants".to_string(),
            "Vintage wide-leg pants".to_string(),
            Price::new(Decimal::new(4000, 0)).unwrap(),
            Some(Decimal::new(3000, 0)),
            vec!["Pants".to_string()],
            vec!["/uploads/pants.jpg".to_string()],
            vec!["M".to_string(), "L".to_string()],
            vec!["Black".to_string()],
            true,
            false,
        )
        .unwrap()
    }

    #[test]
    fn product_serializes_with_camel_case_fields() {
        let response = ProductResponse::from(&product());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["salePrice"], "3000");
        assert_eq!(json["inStock"], true);
        assert_eq!(json["images"][0], "/uploads/pants.jpg");
        assert!(json.get("image_urls").is_none());
    }

    #[test]
    fn page_carries_pagination_fields() {
        let page = ProductPage::new(vec![product()], 2, 20, 41);
        let json = serde_json::to_value(ProductPageResponse::from(page)).unwrap();

        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["total"], 41);
        assert_eq!(json["products"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn browse_params_deserialize_from_query_shape() {
        let params: BrowseParams =
            serde_json::from_str(r#"{"category": "Pants", "sort": "price_asc", "page": 2}"#)
                .unwrap();

        assert_eq!(params.category.as_deref(), Some("Pants"));
        assert_eq!(params.sort.as_deref(), Some("price_asc"));
        assert_eq!(params.page, Some(2));
        assert_eq!(params.limit, None);
    }
}
