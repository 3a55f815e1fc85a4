//! Chat assistant pipeline.

mod gateway;
mod retrieval;
mod service;

pub use gateway::{ReplyGateway, RULE_BASED_SOURCE};
pub use retrieval::ContentRetriever;
pub use service::{ChatReply, ChatService};
