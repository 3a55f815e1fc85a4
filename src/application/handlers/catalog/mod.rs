//! Catalog read-side queries.

mod browse_products;

pub use browse_products::CatalogQueries;
