//! Shopping cart arithmetic.
//!
//! The cart is an ordered list of lines, one per product, owned exclusively
//! by the client session. All money math is plain `f64`; nothing is rounded
//! until display.

use serde::{Deserialize, Serialize};

use shopbot_core::{CartItem, Product, ProductId};

/// Fixed sales tax rate applied to the subtotal.
pub const TAX_RATE: f64 = 0.08;

/// The shopping cart.
///
/// Serializes transparently as the ordered list of lines, which is exactly
/// what gets persisted under the `cart` storage key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Add one unit of a product: increments the existing line, or appends
    /// a new line with quantity 1.
    pub fn add(&mut self, product: Product) {
        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem::new(product));
        }
    }

    /// Set the quantity of a line. Zero removes the line; a missing product
    /// ID is a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product.id == *product_id)
        {
            item.quantity = quantity;
        }
    }

    /// Remove a line unconditionally.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.items.retain(|item| item.product.id != *product_id);
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of unit price times quantity across all lines.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sales tax on the subtotal.
    #[must_use]
    pub fn tax(&self) -> f64 {
        self.subtotal() * TAX_RATE
    }

    /// Subtotal plus tax.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.subtotal() + self.tax()
    }
}
