//! HTTP handlers for catalog endpoints.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::AppState;
use crate::domain::catalog::{ProductFilter, SortKey};
use crate::domain::foundation::{DomainError, ProductId, ValidationError};

use super::dto::{BrowseParams, ProductPageResponse, ProductResponse};

/// GET /api/products - Paginated browse with optional filters.
///
/// An unrecognized `sort` value falls back to the default ordering
/// rather than failing the request.
pub async fn browse_products(
    State(state): State<AppState>,
    Query(params): Query<BrowseParams>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = ProductFilter::new(
        params.category,
        params.search,
        params.sort.as_deref().and_then(SortKey::parse),
        params.page,
        params.limit,
    );

    let page = state.catalog.browse(&filter).await?;

    Ok(Json(ProductPageResponse::from(page)))
}

/// GET /api/products/:id - Single product detail.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_product_id(&id)?;
    let product = state.catalog.get(&id).await?;

    Ok(Json(ProductResponse::from(&product)))
}

fn parse_product_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse().map_err(|_| {
        ApiError(DomainError::from(ValidationError::invalid_format(
            "id",
            "expected a product UUID",
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::adapters::http::test_support::state_with_products;
    use crate::domain::catalog::Price;
    use crate::domain::catalog::Product;
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
    async fn browse_returns_page_json() {
        let state = state_with_products(vec![product("Flannel Shirt", 2200)]);

        let response = browse_products(State(state), Query(BrowseParams::default()))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn get_product_rejects_malformed_id() {
        let state = state_with_products(vec![]);

        let response = match get_product(State(state), Path("not-a-uuid".to_string())).await {
            Ok(ok) => ok.into_response(),
            Err(err) => err.into_response(),
        };

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_product_reports_missing_with_404() {
        let state = state_with_products(vec![]);

        let response = match get_product(State(state), Path(ProductId::new().to_string())).await {
            Ok(ok) => ok.into_response(),
            Err(err) => err.into_response(),
        };

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
