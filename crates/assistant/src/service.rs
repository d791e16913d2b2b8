//! The chat assistant service.
//!
//! [`ChatService`] is an explicitly constructed, dependency-injected
//! instance owning its catalog reference, context buffer, and RNG. There is
//! no global singleton: sessions and tests each build their own, so they
//! stay isolated.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use shopbot_core::{ChatMessage, Product, SearchFilter};

use crate::context::ConversationContext;
use crate::error::ChatError;
use crate::handlers;
use crate::intent::classify;
use crate::search::search_products;

/// Chat service configuration.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Simulated reply latency, awaited before each reply. Not cancellable,
    /// no timeout or retry; callers simply await completion.
    pub response_delay: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            response_delay: Duration::from_millis(800),
        }
    }
}

/// Mutable per-conversation state, guarded by one lock so message
/// processing is single-writer and runs to completion: concurrent sends
/// serialize instead of interleaving replies.
struct Inner {
    context: ConversationContext,
    rng: StdRng,
}

/// The rule-based shopping assistant.
pub struct ChatService {
    catalog: Arc<Vec<Product>>,
    config: ChatConfig,
    inner: Mutex<Inner>,
}

impl ChatService {
    /// Create a service with an OS-seeded RNG.
    #[must_use]
    pub fn new(catalog: Arc<Vec<Product>>, config: ChatConfig) -> Self {
        Self::with_rng(catalog, config, StdRng::from_os_rng())
    }

    /// Create a service with an explicit RNG, letting tests pin the
    /// randomized reply text and any randomized handler output.
    #[must_use]
    pub fn with_rng(catalog: Arc<Vec<Product>>, config: ChatConfig, rng: StdRng) -> Self {
        Self {
            catalog,
            config,
            inner: Mutex::new(Inner {
                context: ConversationContext::new(),
                rng,
            }),
        }
    }

    /// Process one user message and produce the bot reply.
    ///
    /// Classification runs on the lowercased text; the handler then sees
    /// the message exactly as typed. The lowercased text is also retained
    /// in the rolling context window.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::HandlerFailed`] if a reply handler panics;
    /// callers substitute the fixed apology reply instead of surfacing it.
    #[instrument(skip(self, message), fields(message_len = message.len()))]
    pub async fn process_message(&self, message: &str) -> Result<ChatMessage, ChatError> {
        // Take the lock for the whole request, including the simulated
        // latency, so replies never interleave.
        let mut inner = self.inner.lock().await;

        tokio::time::sleep(self.config.response_delay).await;

        let lowercase = message.to_lowercase();
        inner.context.push(lowercase.clone());

        let intent = classify(&lowercase);
        debug!(?intent, "classified message");

        let reply = catch_unwind(AssertUnwindSafe(|| {
            handlers::dispatch(&self.catalog, intent, message, &mut inner.rng)
        }))
        .map_err(|_| ChatError::HandlerFailed)?;

        debug!(
            products = reply.products.len(),
            suggestions = reply.suggestions.len(),
            "built reply"
        );

        Ok(ChatMessage::bot(
            reply.content,
            reply.products,
            reply.suggestions,
        ))
    }

    /// Search the catalog outside the chat flow (header search box).
    #[must_use]
    pub fn search(&self, query: &str, filters: Option<&SearchFilter>) -> Vec<Product> {
        search_products(&self.catalog, query, filters)
    }

    /// The catalog this service answers from.
    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// Forget the retained conversation context.
    pub async fn reset(&self) {
        self.inner.lock().await.context.clear();
    }

    /// Number of messages currently retained in the context window.
    pub async fn context_len(&self) -> usize {
        self.inner.lock().await.context.len()
    }
}

#[cfg(test)]
mod tests {
    use shopbot_core::{ChatRole, ProductId};

    use crate::context::CONTEXT_WINDOW;
    use crate::replies;

    use super::*;

    fn product(id: &str, name: &str, brand: &str, price: f64, rating: f64, reviews: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            category: "Electronics".to_owned(),
            price,
            original_price: None,
            image: String::new(),
            description: String::new(),
            rating,
            reviews,
            in_stock: true,
            features: Vec::new(),
            brand: brand.to_owned(),
            tags: vec!["laptop".to_owned()],
        }
    }

    fn service() -> ChatService {
        let catalog = Arc::new(vec![
            product("1", "Air Laptop", "Apple", 1199.0, 4.8, 900),
            product("2", "Edge Laptop", "Dell", 899.0, 4.4, 400),
            product("3", "Flow Laptop", "HP", 649.0, 4.1, 700),
        ]);
        ChatService::with_rng(
            catalog,
            ChatConfig {
                response_delay: Duration::ZERO,
            },
            StdRng::seed_from_u64(99),
        )
    }

    #[tokio::test]
    async fn test_greeting_reply_comes_from_pool() {
        let service = service();
        let reply = service.process_message("hello").await.expect("reply");
        assert_eq!(reply.role, ChatRole::Bot);
        assert!(replies::GREETING_REPLIES.contains(&reply.content.as_str()));
        assert!(reply.products.is_empty());
    }

    #[tokio::test]
    async fn test_search_precedes_price_end_to_end() {
        let service = service();
        let reply = service
            .process_message("show me laptops under $1000")
            .await
            .expect("reply");
        // Classified as a product search, so no price filtering happens:
        // the $1199 laptop still shows up.
        assert!(reply.products.iter().any(|p| p.price > 1000.0));
    }

    #[tokio::test]
    async fn test_brand_only_message_returns_brand_products() {
        let service = service();
        let reply = service.process_message("apple").await.expect("reply");
        assert_eq!(reply.products.len(), 1);
        assert_eq!(
            reply.products.first().map(|p| p.brand.as_str()),
            Some("Apple")
        );
    }

    #[tokio::test]
    async fn test_context_window_fills_and_resets() {
        let service = service();
        for i in 0..7 {
            let _ = service
                .process_message(&format!("hello {i}"))
                .await
                .expect("reply");
        }
        assert_eq!(service.context_len().await, CONTEXT_WINDOW);

        service.reset().await;
        assert_eq!(service.context_len().await, 0);
    }

    #[tokio::test]
    async fn test_seeded_services_agree() {
        let a = service();
        let b = service();
        let ra = a.process_message("hello").await.expect("reply");
        let rb = b.process_message("hello").await.expect("reply");
        assert_eq!(ra.content, rb.content);
    }

    #[tokio::test]
    async fn test_out_of_crate_search_does_not_touch_context() {
        let service = service();
        let results = service.search("laptop", None);
        assert_eq!(results.len(), 3);
        assert_eq!(service.context_len().await, 0);
    }
}
