//! Pure business types and rules, free of axum, sqlx, and friends.
//!
//! - `foundation` - Primitives shared by every module: IDs, errors, timestamps
//! - `catalog` - Products, pricing, and browse filters
//! - `order` - Order lifecycle aggregate, status machine, and audit records
//! - `chat` - Intent classification, reply composition, and prompt building
//! - `settings` - Site-wide configuration and notification preferences

pub mod catalog;
pub mod chat;
pub mod foundation;
pub mod order;
pub mod settings;
