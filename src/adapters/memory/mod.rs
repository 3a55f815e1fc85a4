//! In-memory store adapters for tests.

mod order_store;
mod product_store;
mod settings_store;

pub use order_store::InMemoryOrderStore;
pub use product_store::InMemoryProductStore;
pub use settings_store::InMemorySettingsStore;
