//! Product catalog record.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product in the catalog.
///
/// Products are generated once at startup and never mutated. Prices use
/// plain `f64` arithmetic end to end; nothing is rounded until display.
///
/// Catalog position is significant: it is the tiebreak for every ranking,
/// so consumers must keep catalog order stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category label (e.g., "Electronics", "Audio").
    pub category: String,
    /// Unit price in USD. Always > 0.
    pub price: f64,
    /// Pre-discount price, when the product is on sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Product image URL.
    pub image: String,
    /// Marketing description.
    pub description: String,
    /// Average customer rating in 0.0..=5.0.
    pub rating: f64,
    /// Number of customer reviews.
    pub reviews: u32,
    /// Whether the product can currently be purchased.
    pub in_stock: bool,
    /// Ordered feature bullet points.
    pub features: Vec<String>,
    /// Brand name (e.g., "Apple").
    pub brand: String,
    /// Lowercase tags used for matching (e.g., "smartphone", "premium").
    pub tags: Vec<String>,
}

impl Product {
    /// Popularity score used as the default ranking key: `rating * reviews`.
    ///
    /// A crude proxy for "well-reviewed and widely bought". Ties are broken
    /// by stable catalog order, never re-sorted.
    #[must_use]
    pub fn popularity(&self) -> f64 {
        self.rating * f64::from(self.reviews)
    }

    /// Whether the product is currently discounted.
    #[must_use]
    pub fn on_sale(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Test Headphones".to_owned(),
            category: "Audio".to_owned(),
            price: 199.0,
            original_price: Some(249.0),
            image: "https://example.com/img.jpg".to_owned(),
            description: "Great sound".to_owned(),
            rating: 4.5,
            reviews: 200,
            in_stock: true,
            features: vec!["Wireless".to_owned()],
            brand: "Sony".to_owned(),
            tags: vec!["headphones".to_owned(), "wireless".to_owned()],
        }
    }

    #[test]
    fn test_popularity_is_rating_times_reviews() {
        let product = sample();
        assert!((product.popularity() - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_on_sale() {
        let mut product = sample();
        assert!(product.on_sale());
        product.original_price = None;
        assert!(!product.on_sale());
    }

    #[test]
    fn test_serde_camel_case() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert!(json.get("originalPrice").is_some());
        assert!(json.get("inStock").is_some());
    }
}
