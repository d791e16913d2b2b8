//! The in-memory product catalog.
//!
//! Ten curated flagship products followed by generated filler entries up to
//! the configured size. The catalog is built once at startup and never
//! mutated; its order is the tiebreak for every ranking downstream, so
//! consumers receive it as an immutable shared sequence.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use shopbot_core::{Product, ProductId};

use crate::config::AppConfig;

/// Categories used for generated catalog entries.
const GENERATION_CATEGORIES: &[&str] = &[
    "Electronics",
    "Audio",
    "Gaming",
    "Wearables",
    "Books",
    "Home",
    "Fashion",
    "Sports",
];

/// Brands used for generated catalog entries.
const GENERATION_BRANDS: &[&str] = &[
    "Apple", "Samsung", "Sony", "Dell", "HP", "Asus", "LG", "Xiaomi", "OnePlus", "Google",
];

/// Stock image pool for generated catalog entries.
const IMAGE_URLS: &[&str] = &[
    "https://images.pexels.com/photos/788946/pexels-photo-788946.jpeg",
    "https://images.pexels.com/photos/205421/pexels-photo-205421.jpeg",
    "https://images.pexels.com/photos/1092644/pexels-photo-1092644.jpeg",
    "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg",
    "https://images.pexels.com/photos/1334597/pexels-photo-1334597.jpeg",
    "https://images.pexels.com/photos/18105/pexels-photo.jpg",
    "https://images.pexels.com/photos/442576/pexels-photo-442576.jpeg",
    "https://images.pexels.com/photos/437037/pexels-photo-437037.jpeg",
];

/// The static catalog plus the distinct category/brand lists derived from
/// it (in first-seen order), for filter dropdowns.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
    categories: Vec<String>,
    brands: Vec<String>,
}

impl Catalog {
    /// Build a catalog per the configuration: seeded when
    /// `catalog_seed` is set, OS-seeded otherwise.
    #[must_use]
    pub fn generate(config: &AppConfig) -> Self {
        let mut rng = config
            .catalog_seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::generate_with_rng(config.catalog_size, &mut rng)
    }

    /// Build a catalog of `size` entries with an explicit RNG.
    #[must_use]
    pub fn generate_with_rng(size: usize, rng: &mut StdRng) -> Self {
        let mut products = curated_products();
        products.truncate(size);

        for n in (products.len() + 1)..=size {
            products.push(generate_product(n, rng));
        }

        let categories = distinct(products.iter().map(|p| p.category.as_str()));
        let brands = distinct(products.iter().map(|p| p.brand.as_str()));

        info!(
            size = products.len(),
            categories = categories.len(),
            brands = brands.len(),
            "generated catalog"
        );

        Self {
            products: Arc::new(products),
            categories,
            brands,
        }
    }

    /// Shared handle to the ordered product sequence.
    #[must_use]
    pub fn products(&self) -> Arc<Vec<Product>> {
        Arc::clone(&self.products)
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in first-seen catalog order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Distinct brands in first-seen catalog order.
    #[must_use]
    pub fn brands(&self) -> &[String] {
        &self.brands
    }
}

/// Collect distinct values preserving first-seen order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.iter().any(|s: &String| s == value) {
            seen.push(value.to_owned());
        }
    }
    seen
}

/// One generated filler product.
fn generate_product(n: usize, rng: &mut StdRng) -> Product {
    let category = GENERATION_CATEGORIES[rng.random_range(0..GENERATION_CATEGORIES.len())];
    let brand = GENERATION_BRANDS[rng.random_range(0..GENERATION_BRANDS.len())];
    let price = f64::from(rng.random_range(0..2000_u32) + 50);
    let rating = ((rng.random::<f64>() * 1.5 + 3.5) * 10.0).round() / 10.0;
    let on_sale = rng.random_bool(0.3);

    Product {
        id: ProductId::new(n.to_string()),
        name: format!("{brand} {category} Device {n}"),
        category: category.to_owned(),
        price,
        original_price: on_sale.then(|| price + f64::from(rng.random_range(0..200_u32))),
        image: IMAGE_URLS[rng.random_range(0..IMAGE_URLS.len())].to_owned(),
        description: format!(
            "High-quality {} device from {brand} with premium features and excellent performance.",
            category.to_lowercase()
        ),
        rating,
        reviews: rng.random_range(0..5000_u32) + 100,
        in_stock: rng.random_bool(0.9),
        features: vec![
            "Premium Build".to_owned(),
            "Latest Technology".to_owned(),
            "User Friendly".to_owned(),
            "Warranty Included".to_owned(),
        ],
        brand: brand.to_owned(),
        tags: vec![
            category.to_lowercase(),
            "quality".to_owned(),
            "reliable".to_owned(),
            "modern".to_owned(),
        ],
    }
}

/// Convenience constructor for the curated entries.
#[allow(clippy::too_many_arguments)]
fn curated(
    id: &str,
    name: &str,
    category: &str,
    price: f64,
    original_price: Option<f64>,
    image: &str,
    description: &str,
    rating: f64,
    reviews: u32,
    features: &[&str],
    brand: &str,
    tags: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        category: category.to_owned(),
        price,
        original_price,
        image: image.to_owned(),
        description: description.to_owned(),
        rating,
        reviews,
        in_stock: true,
        features: features.iter().map(|f| (*f).to_owned()).collect(),
        brand: brand.to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
    }
}

/// The ten hand-curated flagship products that open the catalog.
#[must_use]
pub fn curated_products() -> Vec<Product> {
    vec![
        curated(
            "1",
            "iPhone 15 Pro Max",
            "Electronics",
            1199.0,
            Some(1299.0),
            "https://images.pexels.com/photos/788946/pexels-photo-788946.jpeg",
            "The most advanced iPhone ever with titanium design, A17 Pro chip, and pro camera system.",
            4.8,
            2847,
            &["A17 Pro Chip", "48MP Camera", "5G Ready", "Face ID"],
            "Apple",
            &["smartphone", "premium", "photography", "gaming"],
        ),
        curated(
            "2",
            "MacBook Pro 16\"",
            "Electronics",
            2499.0,
            None,
            "https://images.pexels.com/photos/205421/pexels-photo-205421.jpeg",
            "Supercharged by M3 Pro and M3 Max chips for demanding workflows.",
            4.9,
            1542,
            &["M3 Pro Chip", "16GB RAM", "512GB SSD", "Liquid Retina Display"],
            "Apple",
            &["laptop", "professional", "creative", "performance"],
        ),
        curated(
            "3",
            "Samsung Galaxy S24 Ultra",
            "Electronics",
            1299.0,
            None,
            "https://images.pexels.com/photos/1092644/pexels-photo-1092644.jpeg",
            "AI-powered smartphone with S Pen and 200MP camera.",
            4.7,
            3241,
            &["S Pen", "200MP Camera", "5000mAh Battery", "AI Features"],
            "Samsung",
            &["smartphone", "android", "productivity", "photography"],
        ),
        curated(
            "4",
            "Sony WH-1000XM5",
            "Audio",
            399.0,
            Some(449.0),
            "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg",
            "Industry-leading noise canceling headphones with exceptional sound quality.",
            4.6,
            1876,
            &["Active Noise Canceling", "30-hour Battery", "Touch Controls", "Quick Charge"],
            "Sony",
            &["headphones", "wireless", "noise-canceling", "premium"],
        ),
        curated(
            "5",
            "iPad Pro 12.9\"",
            "Electronics",
            1099.0,
            None,
            "https://images.pexels.com/photos/1334597/pexels-photo-1334597.jpeg",
            "The ultimate iPad experience with M2 chip and stunning Liquid Retina display.",
            4.8,
            2134,
            &["M2 Chip", "12.9\" Display", "Apple Pencil Support", "5G Option"],
            "Apple",
            &["tablet", "creative", "productivity", "drawing"],
        ),
        curated(
            "6",
            "Dell XPS 13",
            "Electronics",
            999.0,
            None,
            "https://images.pexels.com/photos/18105/pexels-photo.jpg",
            "Ultra-thin laptop with InfinityEdge display and premium materials.",
            4.5,
            987,
            &["Intel Core i7", "16GB RAM", "512GB SSD", "InfinityEdge Display"],
            "Dell",
            &["laptop", "ultrabook", "business", "portable"],
        ),
        curated(
            "7",
            "Nintendo Switch OLED",
            "Gaming",
            349.0,
            None,
            "https://images.pexels.com/photos/442576/pexels-photo-442576.jpeg",
            "Enhanced gaming experience with vibrant OLED screen and improved audio.",
            4.7,
            4521,
            &["OLED Screen", "Enhanced Audio", "Adjustable Stand", "Joy-Con Controllers"],
            "Nintendo",
            &["gaming", "console", "portable", "family"],
        ),
        curated(
            "8",
            "Apple Watch Series 9",
            "Wearables",
            399.0,
            None,
            "https://images.pexels.com/photos/437037/pexels-photo-437037.jpeg",
            "Advanced health monitoring and fitness tracking with always-on display.",
            4.6,
            3456,
            &["Health Monitoring", "GPS", "Water Resistant", "Always-On Display"],
            "Apple",
            &["smartwatch", "fitness", "health", "wearable"],
        ),
        curated(
            "9",
            "Kindle Paperwhite",
            "Books",
            139.0,
            Some(159.0),
            "https://images.pexels.com/photos/1742370/pexels-photo-1742370.jpeg",
            "Waterproof e-reader with high-resolution display and adjustable warm light.",
            4.4,
            12543,
            &["Waterproof", "Adjustable Light", "6.8\" Display", "Weeks of Battery"],
            "Amazon",
            &["e-reader", "books", "reading", "portable"],
        ),
        curated(
            "10",
            "Dyson V15 Detect",
            "Home",
            749.0,
            None,
            "https://images.pexels.com/photos/4239091/pexels-photo-4239091.jpeg",
            "Powerful cordless vacuum with laser dust detection and LCD screen.",
            4.5,
            2341,
            &["Laser Detection", "LCD Screen", "Cordless", "HEPA Filtration"],
            "Dyson",
            &["vacuum", "cordless", "home", "cleaning"],
        ),
    ]
}
