//! ShopBot Assistant - rule-based conversational shopping assistant.
//!
//! The assistant answers shopping queries by filtering an in-memory product
//! catalog. There is no model and no embeddings: a user message is routed to
//! exactly one intent by ordered substring-keyword checks, and each intent
//! has a handler that filters/sorts the catalog and produces a reply with
//! optional product results and follow-up suggestions.
//!
//! # Modules
//!
//! - [`intent`] - The ordered intent classifier and its keyword tables
//! - [`handlers`] - One reply builder per intent
//! - [`search`] - Free-text catalog search with optional filters
//! - [`context`] - Bounded recent-message buffer
//! - [`service`] - [`ChatService`], the dependency-injected entry point
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use shopbot_assistant::{ChatConfig, ChatService};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let catalog = Arc::new(Vec::new());
//! let config = ChatConfig {
//!     response_delay: Duration::ZERO,
//! };
//! let service = ChatService::with_rng(catalog, config, StdRng::seed_from_u64(7));
//! let reply = service.process_message("hello").await.ok();
//! assert!(reply.is_some());
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod context;
pub mod error;
pub mod handlers;
pub mod intent;
pub mod replies;
pub mod search;
pub mod service;

pub use context::ConversationContext;
pub use error::ChatError;
pub use intent::Intent;
pub use replies::APOLOGY_REPLY;
pub use search::search_products;
pub use service::{ChatConfig, ChatService};
