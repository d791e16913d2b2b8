//! Core types for ShopBot.
//!
//! This module provides type-safe wrappers and records for the storefront
//! domain: products, cart lines, chat messages, users, and search filters.

pub mod cart;
pub mod email;
pub mod filter;
pub mod id;
pub mod message;
pub mod product;
pub mod user;

pub use cart::CartItem;
pub use email::{Email, EmailError};
pub use filter::SearchFilter;
pub use id::*;
pub use message::{ChatMessage, ChatRole};
pub use product::Product;
pub use user::User;
