//! ShopBot Core - Shared types library.
//!
//! This crate provides common types used across all ShopBot components:
//! - `assistant` - Rule-based conversational shopping assistant
//! - `storefront` - Catalog, cart, and session shell consumed by a UI
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async, no randomness.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Domain types: IDs, emails, products, carts, chat messages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
