//! Catalog module - Products, pricing, and browse filters.

mod browse;
mod price;
mod product;

pub use browse::{ProductFilter, ProductPage, SortKey};
pub use price::Price;
pub use product::Product;
