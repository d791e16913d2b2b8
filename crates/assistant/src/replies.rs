//! Canned reply text and follow-up suggestion pools.
//!
//! Reply variety is cosmetic: each handler picks one entry from its pool
//! with the service's injected RNG, so tests with a seeded RNG get
//! deterministic output.

use rand::Rng;

/// Fixed apology used by callers when message processing fails outright.
pub const APOLOGY_REPLY: &str =
    "I'm sorry, something went wrong on my end. Please try that again in a moment.";

pub(crate) const GREETING_REPLIES: &[&str] = &[
    "Hello! Welcome to ShopBot! I'm your personal shopping assistant. What can I help you find today?",
    "Hi there! Ready to discover some amazing products? I'm here to help you find exactly what you need!",
    "Hey! Great to see you! I can help you search, compare, and find the perfect products. What are you looking for?",
    "Welcome! I'm your AI shopping companion. Whether you need electronics, gadgets, or anything else - I've got you covered!",
];

pub(crate) const GREETING_SUGGESTIONS: &[&str] = &[
    "Show popular products",
    "Electronics under $500",
    "Latest smartphones",
    "Gaming accessories",
    "Help me choose",
];

/// Search reply templates; `{count}` is replaced with the match count.
pub(crate) const SEARCH_REPLIES: &[&str] = &[
    "Great! I found {count} products matching your search. Here are the best options:",
    "Perfect! Here are {count} excellent products that match what you're looking for:",
    "Awesome! I've discovered {count} products that should interest you:",
    "Excellent choice! Here are {count} top-rated products for you:",
];

pub(crate) const SEARCH_NO_MATCH_REPLY: &str =
    "I couldn't find exact matches, but here are some popular products you might like:";

pub(crate) const SEARCH_SUGGESTIONS: &[&str] = &[
    "Show more options",
    "Filter by price",
    "Compare products",
    "Check reviews",
    "Similar items",
];

pub(crate) const PRICE_SUGGESTIONS: &[&str] = &[
    "Show cheaper options",
    "Premium alternatives",
    "Best value products",
    "Price comparison",
    "Deals & discounts",
];

pub(crate) const COMPARISON_REPLY: &str =
    "Here's a comparison of top products to help you decide:";

pub(crate) const COMPARISON_SUGGESTIONS: &[&str] = &[
    "Compare specifications",
    "Price comparison",
    "User reviews",
    "Pros and cons",
    "Best for your needs",
];

pub(crate) const RECOMMENDATION_REPLIES: &[&str] = &[
    "Based on customer reviews and ratings, here are my top recommendations:",
    "I'd highly recommend these products - they're customer favorites:",
    "These are the best-selling products that customers love:",
    "Here are my personal recommendations based on quality and value:",
];

pub(crate) const RECOMMENDATION_SUGGESTIONS: &[&str] = &[
    "Why these products?",
    "Alternative options",
    "Customer reviews",
    "Best features",
    "Price comparison",
];

pub(crate) const AVAILABILITY_REPLY: &str =
    "Here are products currently in stock and ready to ship:";

pub(crate) const AVAILABILITY_SUGGESTIONS: &[&str] = &[
    "Shipping options",
    "Delivery time",
    "Out of stock alerts",
    "Pre-order items",
    "Express delivery",
];

/// Per-category reply templates, keyed by canonical category tag.
pub(crate) const CATEGORY_REPLIES: &[(&str, &str)] = &[
    ("smartphone", "Here are the latest and greatest smartphones:"),
    ("laptop", "Check out these powerful laptops perfect for work and play:"),
    ("audio", "Discover amazing audio products for the best sound experience:"),
    ("gaming", "Level up your gaming with these awesome products:"),
    ("wearable", "Stay connected with these smart wearable devices:"),
    ("tablet", "Here are versatile tablets for productivity and entertainment:"),
];

pub(crate) const CATEGORY_SUGGESTIONS: &[&str] = &[
    "Top rated in category",
    "New arrivals",
    "Best sellers",
    "Compare models",
    "Price ranges",
];

pub(crate) const HELP_REPLIES: &[&str] = &[
    "I'm here to help you find the perfect products! I can search our inventory, compare prices, check availability, and provide recommendations based on your needs.",
    "I can assist you with product searches, price comparisons, availability checks, and personalized recommendations. Just tell me what you're looking for!",
    "Let me help you shop smarter! I can find products, compare features, check stock, and suggest alternatives based on your preferences and budget.",
];

pub(crate) const HELP_SUGGESTIONS: &[&str] = &[
    "Search products",
    "Compare prices",
    "Check availability",
    "Get recommendations",
    "Browse categories",
];

pub(crate) const FALLBACK_REPLIES: &[&str] = &[
    "I'm not entirely sure what you're looking for, but here are some popular products that might interest you:",
    "Let me show you some trending products while you think about what you need:",
    "Here are some customer favorites that might catch your attention:",
    "While I figure out exactly what you need, check out these amazing products:",
];

pub(crate) const FALLBACK_SUGGESTIONS: &[&str] = &[
    "Be more specific",
    "Browse categories",
    "Popular products",
    "New arrivals",
    "Help me search",
];

/// Pick one entry from a reply pool.
pub(crate) fn pick<'a>(rng: &mut impl Rng, pool: &[&'a str]) -> &'a str {
    let idx = rng.random_range(0..pool.len());
    pool.get(idx).copied().unwrap_or_default()
}

/// Reply template for a matched category, falling back to a generic line.
pub(crate) fn category_reply(tag: &str) -> String {
    CATEGORY_REPLIES
        .iter()
        .find(|(key, _)| *key == tag)
        .map_or_else(
            || format!("Here are excellent {tag} products:"),
            |(_, reply)| (*reply).to_owned(),
        )
}

/// Reply line for a matched brand, with the brand name capitalized.
pub(crate) fn brand_reply(brand: &str) -> String {
    format!("Here are the best {} products we have:", capitalize(brand))
}

/// Follow-up suggestions for a matched brand.
pub(crate) fn brand_suggestions(brand: &str) -> Vec<String> {
    vec![
        format!("Latest {brand} products"),
        "Brand comparison".to_owned(),
        "Customer favorites".to_owned(),
        "New releases".to_owned(),
        "Best deals".to_owned(),
    ]
}

/// Uppercase the first character of a brand keyword.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

/// Convert a suggestion pool into owned strings.
pub(crate) fn suggestions(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|s| (*s).to_owned()).collect()
}
