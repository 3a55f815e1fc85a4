//! The vocabulary every other domain module builds on: typed IDs,
//! timestamps, the error taxonomy, and the state machine trait.

mod auth;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CancellationId, OrderId, ProductId, ShipmentId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
