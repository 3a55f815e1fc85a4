//! Bearer-token verification adapters.
//!
//! - `JwtTokenVerifier` - HS256 validation of account-service tokens
//! - `MockTokenVerifier` - fixed token map for tests

mod jwt;
mod mock;

pub use jwt::JwtTokenVerifier;
pub use mock::MockTokenVerifier;
