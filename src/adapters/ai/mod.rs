//! Generation provider adapters.
//!
//! One adapter per hosted API the chat gateway can be pointed at, plus
//! a scripted mock for tests:
//!
//! - `CohereProvider` - Cohere `generate` with `command-light`
//! - `TogetherProvider` - Together `inference` with Llama 2 chat
//! - `GroqProvider` - Groq chat completions with Llama 3
//! - `MockProvider` - scripted replies and prompt recording

mod cohere;
mod groq;
mod mock;
mod together;

pub use cohere::CohereProvider;
pub use groq::GroqProvider;
pub use mock::MockProvider;
pub use together::TogetherProvider;
