//! PostgreSQL store adapters.
//!
//! One adapter per persistence port, all sharing a single [`sqlx::PgPool`].
//! Schema lives under `migrations/` and is applied at startup.

mod order_store;
mod product_store;
mod settings_store;

pub use order_store::PostgresOrderStore;
pub use product_store::PostgresProductStore;
pub use settings_store::PostgresSettingsStore;
