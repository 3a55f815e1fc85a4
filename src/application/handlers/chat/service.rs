//! ChatService - classify, retrieve, reply.

use crate::domain::chat::{
    classify, search_context, strip_search_tokens, Intent, RetrievedContent, CATEGORIES_CONTEXT,
    FEATURED_CONTEXT, GENERAL_INQUIRY_CONTEXT, GREETING_CONTEXT, RELATED_PRODUCTS_CONTEXT,
    SALE_CONTEXT,
};

use super::gateway::ReplyGateway;
use super::retrieval::ContentRetriever;

/// A finished chat turn: the reply text and which source wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub message: String,
    pub source: &'static str,
}

/// The assistant pipeline: classify the message, retrieve grounding
/// content for the intent, and let the gateway produce the reply.
///
/// Every stage degrades rather than fails, so a turn always yields a
/// reply. Blank messages are rejected before this service is reached.
pub struct ChatService {
    retriever: ContentRetriever,
    gateway: ReplyGateway,
}

impl ChatService {
    pub fn new(retriever: ContentRetriever, gateway: ReplyGateway) -> Self {
        Self { retriever, gateway }
    }

    /// Label of the active reply source, for the health endpoint.
    pub fn provider_label(&self) -> &'static str {
        self.gateway.provider_label()
    }

    /// Runs one chat turn.
    pub async fn respond(&self, message: &str) -> ChatReply {
        let intent = classify(message);
        let (content, context) = self.retrieve(intent, message).await;
        let (reply, source) = self.gateway.reply(intent, &content, &context, message).await;
        ChatReply {
            message: reply,
            source,
        }
    }

    /// Retrieval dispatch per intent.
    ///
    /// Search strips filler verbs first and skips the store entirely
    /// when nothing is left; general turns search with the raw message
    /// instead. Greetings and help need no grounding.
    async fn retrieve(&self, intent: Intent, message: &str) -> (RetrievedContent, String) {
        match intent {
            Intent::Search => {
                let terms = strip_search_tokens(&message.to_lowercase());
                let products = if terms.is_empty() {
                    Vec::new()
                } else {
                    self.retriever.search(&terms).await
                };
                (RetrievedContent::Products(products), search_context(&terms))
            }
            Intent::Sale => (
                RetrievedContent::Products(self.retriever.on_sale().await),
                SALE_CONTEXT.to_string(),
            ),
            Intent::Featured => (
                RetrievedContent::Products(self.retriever.featured().await),
                FEATURED_CONTEXT.to_string(),
            ),
            Intent::Categories => (
                RetrievedContent::Categories(self.retriever.categories().await),
                CATEGORIES_CONTEXT.to_string(),
            ),
            Intent::Greeting => (RetrievedContent::none(), GREETING_CONTEXT.to_string()),
            Intent::Help => (RetrievedContent::none(), GENERAL_INQUIRY_CONTEXT.to_string()),
            Intent::General => {
                let products = self.retriever.search(message).await;
                let context = if products.is_empty() {
                    GENERAL_INQUIRY_CONTEXT
                } else {
                    RELATED_PRODUCTS_CONTEXT
                };
                (RetrievedContent::Products(products), context.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockProvider;
    use crate::adapters::memory::InMemoryProductStore;
    use crate::domain::catalog::{Price, Product};
    use crate::domain::chat::compose_reply;
    use crate::domain::foundation::ProductId;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(
                ProductId::new(),
                "Baggy Pants".to_string(),
                "Vintage wide fit".to_string(),
                Price::new(Decimal::new(2500, 0)).unwrap(),
                None,
                vec!["Pants".to_string()],
                vec![],
                vec!["M".to_string()],
                vec!["Black".to_string()],
                true,
                true,
            )
            .unwrap(),
            Product::new(
                ProductId::new(),
                "Denim Jacket".to_string(),
                "Classic trucker".to_string(),
                Price::new(Decimal::new(4000, 0)).unwrap(),
                Some(Decimal::new(3000, 0)),
                vec!["Jackets".to_string()],
                vec![],
                vec!["L".to_string()],
                vec!["Blue".to_string()],
                true,
                false,
            )
            .unwrap(),
        ]
    }

    fn rule_based_service() -> ChatService {
        let store = Arc::new(InMemoryProductStore::with_products(catalog()));
        ChatService::new(ContentRetriever::new(store), ReplyGateway::rule_based())
    }

    #[tokio::test]
    async fn search_turn_finds_products_after_stripping_fillers() {
        let service = rule_based_service();

        let reply = service.respond("Show me pants").await;

        assert_eq!(reply.source, "rule_based");
        assert!(reply.message.contains("Baggy Pants"));
    }

    #[tokio::test]
    async fn sale_turn_lists_discounted_products() {
        let service = rule_based_service();

        let reply = service.respond("هل عندكم تخفيضات؟").await;

        assert!(reply.message.contains("Denim Jacket"));
        assert!(reply.message.contains("خصم 25%"));
    }

    #[tokio::test]
    async fn greeting_turn_needs_no_catalog() {
        let service = rule_based_service();

        let reply = service.respond("مرحبا").await;

        assert_eq!(
            reply.message,
            compose_reply(Intent::Greeting, &RetrievedContent::none())
        );
    }

    #[tokio::test]
    async fn categories_turn_lists_labels() {
        let service = rule_based_service();

        let reply = service.respond("أقسام المتجر").await;

        assert!(reply.message.contains("Pants"));
        assert!(reply.message.contains("Jackets"));
    }

    #[tokio::test]
    async fn general_turn_with_unrelated_message_welcomes() {
        let service = rule_based_service();

        let reply = service.respond("الطقس جميل اليوم").await;

        assert_eq!(
            reply.message,
            compose_reply(Intent::General, &RetrievedContent::none())
        );
    }

    #[tokio::test]
    async fn provider_reply_wins_when_generation_succeeds() {
        let store = Arc::new(InMemoryProductStore::with_products(catalog()));
        let provider = Arc::new(MockProvider::answering("رد مولد"));
        let service = ChatService::new(
            ContentRetriever::new(store),
            ReplyGateway::new(Some(provider.clone())),
        );

        let reply = service.respond("Show me pants").await;

        assert_eq!(reply.message, "رد مولد");
        assert_eq!(reply.source, "mock");
        // The prompt carried the search context and the raw message.
        let prompts = provider.prompts();
        assert!(prompts[0].contains("البحث عن: pants"));
        assert!(prompts[0].contains("سؤال العميل: Show me pants"));
    }

    #[tokio::test]
    async fn provider_failure_degrades_to_composed_reply() {
        let store = Arc::new(InMemoryProductStore::with_products(catalog()));
        let service = ChatService::new(
            ContentRetriever::new(store),
            ReplyGateway::new(Some(Arc::new(MockProvider::failing()))),
        );

        let reply = service.respond("Show me pants").await;

        assert_eq!(reply.source, "rule_based");
        assert!(reply.message.contains("Baggy Pants"));
    }
}
