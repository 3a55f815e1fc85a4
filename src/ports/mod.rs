//! Traits the application layer talks through; adapters supply the
//! implementations. Handlers never see a concrete store, provider, or
//! transport type.
//!
//! ## Persistence Ports
//!
//! - `ProductStore` - Read-side catalog queries (browse + chat retrieval)
//! - `OrderStore` - Order persistence with atomic status transitions
//! - `SettingsStore` - The site-wide settings singleton
//!
//! ## Collaborator Ports
//!
//! - `GenerationProvider` - One hosted LLM (Cohere/Together/Groq)
//! - `MailTransport` - SMTP dispatch for order notifications
//! - `TokenVerifier` - Bearer-token validation for protected routes

mod generation_provider;
mod mail_transport;
mod order_store;
mod product_store;
mod settings_store;
mod token_verifier;

pub use generation_provider::{GenerationError, GenerationProvider};
pub use mail_transport::{MailError, MailTransport, OutgoingEmail};
pub use order_store::{OrderStore, OrderTransition, TransitionAudit};
pub use product_store::ProductStore;
pub use settings_store::SettingsStore;
pub use token_verifier::TokenVerifier;
