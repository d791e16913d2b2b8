//! Cart line types.

use serde::{Deserialize, Serialize};

use super::product::Product;

/// A line in the shopping cart: a product plus a quantity.
///
/// Quantity is always >= 1 for any line present in the cart; dropping to
/// zero removes the line instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// The product in the cart.
    pub product: Product,
    /// How many units. Always >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Create a new cart line with quantity 1.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}
