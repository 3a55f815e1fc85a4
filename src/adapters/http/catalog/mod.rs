//! HTTP adapter for the public product catalog.

mod dto;
mod handlers;
mod routes;

pub use dto::{BrowseParams, ProductPageResponse, ProductResponse};
pub use routes::catalog_routes;
