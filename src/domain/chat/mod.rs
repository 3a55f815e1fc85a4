//! Chat module - Intent classification, reply composition, and prompts.

mod composer;
mod intent;
mod prompt;

pub use composer::{
    canned_reply, compose_reply, format_product_info, RetrievedContent, INVALID_MESSAGE_REPLY,
};
pub use intent::{classify, strip_search_tokens, Intent};
pub use prompt::{
    build_prompt, search_context, CATEGORIES_CONTEXT, FEATURED_CONTEXT, GENERAL_INQUIRY_CONTEXT,
    GREETING_CONTEXT, RELATED_PRODUCTS_CONTEXT, SALE_CONTEXT,
};
