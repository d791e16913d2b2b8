//! ShopBot Storefront library.
//!
//! The session shell around the assistant: the product catalog, the
//! shopping cart, client-side persistence, and the (simulated) auth
//! service. There is no server here -- this crate is an in-process library
//! driven by whatever UI shell hosts it, which renders messages, product
//! cards, and the cart, and calls back in with user intents.
//!
//! # Modules
//!
//! - [`catalog`] - Curated + generated in-memory product catalog
//! - [`cart`] - Cart arithmetic (add, update, remove, totals)
//! - [`storage`] - Key-value persistence for the `user` and `cart` entries
//! - [`services`] - The simulated authentication service
//! - [`session`] - [`session::Session`], the facade the UI shell drives
//! - [`config`] - Environment-based configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod services;
pub mod session;
pub mod storage;

pub use cart::Cart;
pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use session::Session;
