//! Integration tests for ShopBot.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopbot-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `chat_flow` - End-to-end conversation scenarios through a session
//! - `cart_flow` - Cart mutations and persistence across sessions
//! - `catalog_search` - Search-utility behavior over a generated catalog
//!
//! The helpers here build fully seeded sessions so every scenario is
//! deterministic: fixed catalog seed, fixed assistant RNG, zero simulated
//! latency.

use std::sync::Arc;
use std::sync::Once;

use rand::SeedableRng;
use rand::rngs::StdRng;

use shopbot_storefront::catalog::Catalog;
use shopbot_storefront::config::AppConfig;
use shopbot_storefront::session::Session;
use shopbot_storefront::storage::{KeyValueStore, MemoryStore};

static TRACING: Once = Once::new();

/// Install a test tracing subscriber once per process. Respects
/// `RUST_LOG`; silent by default.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Deterministic test configuration: seeded catalog, no delays.
#[must_use]
pub fn test_config() -> AppConfig {
    AppConfig::for_tests(1234)
}

/// A catalog generated with the test seed.
#[must_use]
pub fn test_catalog() -> Catalog {
    Catalog::generate(&test_config())
}

/// A fresh in-memory store.
#[must_use]
pub fn test_store() -> Arc<dyn KeyValueStore> {
    Arc::new(MemoryStore::new())
}

/// A deterministic session over the given store.
///
/// # Panics
///
/// Panics if persisted state in the store is corrupt.
#[must_use]
pub fn test_session(store: Arc<dyn KeyValueStore>) -> Session {
    init_tracing();
    let catalog = test_catalog();
    Session::with_rng(&catalog, &test_config(), store, StdRng::seed_from_u64(7))
        .expect("session restore failed")
}
