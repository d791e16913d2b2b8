//! The client session facade.
//!
//! A [`Session`] is what the UI shell drives: it owns the logged-in user,
//! the cart, the append-only chat transcript, and its own assistant
//! instance. Sessions are explicitly constructed and isolated from each
//! other -- there is no global state -- so multiple sessions (or tests) can
//! run side by side.
//!
//! The session is single-writer: every operation runs to completion before
//! the next user-triggered event is processed.

use std::sync::Arc;

use rand::rngs::StdRng;
use tracing::{info, warn};

use shopbot_assistant::{APOLOGY_REPLY, ChatConfig, ChatService};
use shopbot_core::{ChatMessage, Product, ProductId, SearchFilter, User};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::error::Result;
use crate::services::auth::AuthService;
use crate::storage::{KeyValueStore, keys, load_json, save_json};

/// Canned confirmation for the checkout stub.
pub const CHECKOUT_REPLY: &str =
    "Checkout functionality would be implemented here! Your order is being processed.";

/// One shopper's session: user, cart, transcript, and assistant.
pub struct Session {
    storage: Arc<dyn KeyValueStore>,
    assistant: ChatService,
    auth: AuthService,
    user: Option<User>,
    cart: Cart,
    transcript: Vec<ChatMessage>,
}

impl Session {
    /// Create a session over the given catalog and storage, restoring any
    /// persisted `user` and `cart` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if persisted state exists but cannot be read.
    pub fn new(
        catalog: &Catalog,
        config: &AppConfig,
        storage: Arc<dyn KeyValueStore>,
    ) -> Result<Self> {
        let assistant = ChatService::new(
            catalog.products(),
            ChatConfig {
                response_delay: config.chat_delay,
            },
        );
        Self::with_assistant(assistant, config, storage)
    }

    /// Create a session with a seeded assistant RNG, so tests get
    /// deterministic reply text.
    ///
    /// # Errors
    ///
    /// Returns an error if persisted state exists but cannot be read.
    pub fn with_rng(
        catalog: &Catalog,
        config: &AppConfig,
        storage: Arc<dyn KeyValueStore>,
        rng: StdRng,
    ) -> Result<Self> {
        let assistant = ChatService::with_rng(
            catalog.products(),
            ChatConfig {
                response_delay: config.chat_delay,
            },
            rng,
        );
        Self::with_assistant(assistant, config, storage)
    }

    fn with_assistant(
        assistant: ChatService,
        config: &AppConfig,
        storage: Arc<dyn KeyValueStore>,
    ) -> Result<Self> {
        let user: Option<User> = load_json(storage.as_ref(), keys::USER)?;
        let cart: Cart = load_json(storage.as_ref(), keys::CART)?.unwrap_or_default();

        if let Some(user) = &user {
            info!(user_id = %user.id, "restored persisted session");
        }

        Ok(Self {
            storage,
            assistant,
            auth: AuthService::new(config.auth_delay),
            user,
            cart,
            transcript: Vec::new(),
        })
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// The logged-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Log in and persist the resulting user record.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is invalid or persistence fails.
    pub async fn login(&mut self, email: &str) -> Result<&User> {
        let user = self.auth.login(email).await?;
        save_json(self.storage.as_ref(), keys::USER, &user)?;
        Ok(self.user.insert(user))
    }

    /// Register and persist the resulting user record.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is invalid or persistence fails.
    pub async fn register(&mut self, name: &str, email: &str) -> Result<&User> {
        let user = self.auth.register(name, email).await?;
        save_json(self.storage.as_ref(), keys::USER, &user)?;
        Ok(self.user.insert(user))
    }

    /// Log out: clear the persisted entries, the cart, the transcript, and
    /// the assistant's conversation context.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub async fn logout(&mut self) -> Result<()> {
        self.storage.remove(keys::USER)?;
        self.storage.remove(keys::CART)?;
        self.user = None;
        self.cart.clear();
        self.transcript.clear();
        self.assistant.reset().await;
        info!("logged out");
        Ok(())
    }

    // =========================================================================
    // Chat
    // =========================================================================

    /// Send a message to the assistant and append both sides to the
    /// transcript.
    ///
    /// If reply building fails, the shopper gets the fixed apology reply
    /// instead of an error.
    pub async fn send_message(&mut self, text: &str) -> ChatMessage {
        self.transcript.push(ChatMessage::user(text));

        let reply = match self.assistant.process_message(text).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(%error, "message processing failed, substituting apology");
                ChatMessage::bot(APOLOGY_REPLY, Vec::new(), Vec::new())
            }
        };

        self.transcript.push(reply.clone());
        reply
    }

    /// The append-only conversation transcript, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Header search box: free-text query plus optional filters.
    #[must_use]
    pub fn search(&self, query: &str, filters: Option<&SearchFilter>) -> Vec<Product> {
        self.assistant.search(query, filters)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// The current cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of a product and persist the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn add_to_cart(&mut self, product: Product) -> Result<()> {
        self.cart.add(product);
        self.persist_cart()
    }

    /// Set a line's quantity (zero removes it) and persist the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) -> Result<()> {
        self.cart.update_quantity(product_id, quantity);
        self.persist_cart()
    }

    /// Remove a line and persist the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> Result<()> {
        self.cart.remove(product_id);
        self.persist_cart()
    }

    /// Checkout stub: nothing is charged and the cart is left untouched.
    #[must_use]
    pub fn checkout(&self) -> &'static str {
        CHECKOUT_REPLY
    }

    fn persist_cart(&self) -> Result<()> {
        save_json(self.storage.as_ref(), keys::CART, &self.cart)?;
        Ok(())
    }
}
