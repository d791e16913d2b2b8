//! Per-intent reply handlers.
//!
//! Each handler is a pure function over the catalog: it filters and sorts
//! product records and returns a [`Reply`]. Handlers receive the message
//! exactly as the shopper typed it -- only classification lowercases -- so
//! keyword branches inside handlers (e.g. "under" in the price handler) are
//! case-sensitive. That asymmetry is long-standing observable behavior and
//! is covered by tests.
//!
//! Every product list is truncated to [`MAX_RESULTS`], every sort is stable,
//! and ties always fall back to catalog order.

use rand::Rng;

use shopbot_core::Product;

use crate::intent::{Intent, detect_category};
use crate::replies;

/// Maximum number of products attached to any reply.
pub const MAX_RESULTS: usize = 6;

/// Command words stripped from a product-search message before matching.
pub const SEARCH_STOPWORDS: &[&str] = &[
    "show", "find", "search", "looking", "for", "me", "some", "get",
];

/// Brands the comparison handler knows how to pit against each other.
pub const COMPARISON_BRANDS: &[&str] = &["apple", "samsung", "sony", "dell"];

/// Price window (in dollars) for "around $N" queries.
const AROUND_PRICE_WINDOW: f64 = 200.0;

/// Default price threshold when the message names no amount.
const DEFAULT_PRICE_THRESHOLD: u32 = 500;

/// A structured reply from a handler: text, attached products, and
/// follow-up suggestions.
#[derive(Debug, Clone)]
pub struct Reply {
    /// Reply text shown to the shopper.
    pub content: String,
    /// Products attached to the reply, in display order.
    pub products: Vec<Product>,
    /// Suggested follow-up queries.
    pub suggestions: Vec<String>,
}

/// Dispatch a classified message to its handler.
pub fn dispatch(
    catalog: &[Product],
    intent: Intent,
    message: &str,
    rng: &mut impl Rng,
) -> Reply {
    match intent {
        Intent::Greeting => greeting(rng),
        Intent::ProductSearch => product_search(catalog, message, rng),
        Intent::PriceQuery => price_query(catalog, message),
        Intent::Comparison => comparison(catalog, message),
        Intent::Recommendation => recommendation(catalog, message, rng),
        Intent::Availability => availability(catalog),
        Intent::Help => help(rng),
        Intent::Category(tag) => category_search(catalog, tag),
        Intent::Brand(brand) => brand_search(catalog, brand),
        Intent::Fallback => fallback(catalog, message, rng),
    }
}

/// Greeting reply; no catalog access.
pub fn greeting(rng: &mut impl Rng) -> Reply {
    Reply {
        content: replies::pick(rng, replies::GREETING_REPLIES).to_owned(),
        products: Vec::new(),
        suggestions: replies::suggestions(replies::GREETING_SUGGESTIONS),
    }
}

/// Free-text product search.
///
/// Splits the lowercased message on whitespace, drops command stopwords,
/// and keeps any product matching any remaining term. Zero matches fall
/// back to the first [`MAX_RESULTS`] catalog entries unmodified.
pub fn product_search(catalog: &[Product], message: &str, rng: &mut impl Rng) -> Reply {
    let lowercase = message.to_lowercase();
    let terms: Vec<&str> = lowercase
        .split_whitespace()
        .filter(|term| !SEARCH_STOPWORDS.contains(term))
        .collect();

    let products: Vec<Product> = catalog
        .iter()
        .filter(|product| terms.iter().any(|term| matches_search_term(product, term)))
        .take(MAX_RESULTS)
        .cloned()
        .collect();

    let (content, products) = if products.is_empty() {
        (
            replies::SEARCH_NO_MATCH_REPLY.to_owned(),
            catalog.iter().take(MAX_RESULTS).cloned().collect(),
        )
    } else {
        let template = replies::pick(rng, replies::SEARCH_REPLIES);
        (
            template.replace("{count}", &products.len().to_string()),
            products,
        )
    };

    Reply {
        content,
        products,
        suggestions: replies::suggestions(replies::SEARCH_SUGGESTIONS),
    }
}

/// Whether a product matches a single search term.
fn matches_search_term(product: &Product, term: &str) -> bool {
    product.name.to_lowercase().contains(term)
        || product.description.to_lowercase().contains(term)
        || product.brand.to_lowercase().contains(term)
        || product.category.to_lowercase().contains(term)
        || product.tags.iter().any(|tag| tag.contains(term))
}

/// Price-threshold query.
///
/// The first run of digits in the message (optionally preceded by `$`) is
/// the threshold; absent, it defaults to $500. Branching keywords are
/// checked against the raw message.
pub fn price_query(catalog: &[Product], message: &str) -> Reply {
    let threshold = extract_amount(message).unwrap_or(DEFAULT_PRICE_THRESHOLD);
    let limit = f64::from(threshold);

    let (mut products, content): (Vec<Product>, String) = if message.contains("under")
        || message.contains("below")
        || message.contains("budget")
    {
        let mut matches: Vec<Product> = catalog
            .iter()
            .filter(|product| product.price <= limit)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.price.total_cmp(&b.price));
        (
            matches,
            format!("Here are excellent products under ${threshold} that offer great value:"),
        )
    } else if message.contains("over")
        || message.contains("above")
        || message.contains("premium")
    {
        let mut matches: Vec<Product> = catalog
            .iter()
            .filter(|product| product.price >= limit)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        (
            matches,
            format!("Here are premium products over ${threshold} with top-tier features:"),
        )
    } else {
        let mut matches: Vec<Product> = catalog
            .iter()
            .filter(|product| (product.price - limit).abs() <= AROUND_PRICE_WINDOW)
            .cloned()
            .collect();
        matches.sort_by(|a, b| {
            (a.price - limit).abs().total_cmp(&(b.price - limit).abs())
        });
        (
            matches,
            format!("Here are products around ${threshold} price range:"),
        )
    };

    products.truncate(MAX_RESULTS);

    Reply {
        content,
        products,
        suggestions: replies::suggestions(replies::PRICE_SUGGESTIONS),
    }
}

/// Comparison query.
///
/// Two or more known brands in the message select all of their products;
/// otherwise the overall most popular products stand in.
pub fn comparison(catalog: &[Product], message: &str) -> Reply {
    let mentioned: Vec<&str> = COMPARISON_BRANDS
        .iter()
        .filter(|brand| message.contains(*brand))
        .copied()
        .collect();

    let products = if mentioned.len() >= 2 {
        catalog
            .iter()
            .filter(|product| {
                let brand = product.brand.to_lowercase();
                mentioned.iter().any(|mention| brand.contains(mention))
            })
            .take(MAX_RESULTS)
            .cloned()
            .collect()
    } else {
        top_by_popularity(catalog, MAX_RESULTS)
    };

    Reply {
        content: replies::COMPARISON_REPLY.to_owned(),
        products,
        suggestions: replies::suggestions(replies::COMPARISON_SUGGESTIONS),
    }
}

/// Recommendation query, optionally narrowed to a detected category.
pub fn recommendation(catalog: &[Product], message: &str, rng: &mut impl Rng) -> Reply {
    let mut products: Vec<Product> = detect_category(message).map_or_else(
        || catalog.to_vec(),
        |tag| {
            catalog
                .iter()
                .filter(|product| {
                    product.tags.iter().any(|t| t == tag)
                        || product.category.to_lowercase().contains(tag)
                })
                .cloned()
                .collect()
        },
    );

    products.sort_by(|a, b| b.popularity().total_cmp(&a.popularity()));
    products.truncate(MAX_RESULTS);

    Reply {
        content: replies::pick(rng, replies::RECOMMENDATION_REPLIES).to_owned(),
        products,
        suggestions: replies::suggestions(replies::RECOMMENDATION_SUGGESTIONS),
    }
}

/// Stock question: in-stock products in catalog order.
pub fn availability(catalog: &[Product]) -> Reply {
    let products = catalog
        .iter()
        .filter(|product| product.in_stock)
        .take(MAX_RESULTS)
        .cloned()
        .collect();

    Reply {
        content: replies::AVAILABILITY_REPLY.to_owned(),
        products,
        suggestions: replies::suggestions(replies::AVAILABILITY_SUGGESTIONS),
    }
}

/// Help reply; no catalog access.
pub fn help(rng: &mut impl Rng) -> Reply {
    Reply {
        content: replies::pick(rng, replies::HELP_REPLIES).to_owned(),
        products: Vec::new(),
        suggestions: replies::suggestions(replies::HELP_SUGGESTIONS),
    }
}

/// Category-specific search on the already-detected canonical tag.
pub fn category_search(catalog: &[Product], tag: &str) -> Reply {
    let products = catalog
        .iter()
        .filter(|product| {
            product.tags.iter().any(|t| t == tag)
                || product.category.to_lowercase().contains(tag)
                || product.name.to_lowercase().contains(tag)
        })
        .take(MAX_RESULTS)
        .cloned()
        .collect();

    Reply {
        content: replies::category_reply(tag),
        products,
        suggestions: replies::suggestions(replies::CATEGORY_SUGGESTIONS),
    }
}

/// Brand-specific search on the already-detected brand keyword.
pub fn brand_search(catalog: &[Product], brand: &str) -> Reply {
    let products = catalog
        .iter()
        .filter(|product| product.brand.to_lowercase().contains(brand))
        .take(MAX_RESULTS)
        .cloned()
        .collect();

    Reply {
        content: replies::brand_reply(brand),
        products,
        suggestions: replies::brand_suggestions(brand),
    }
}

/// Last-resort handler: loose keyword match, popular products if nothing
/// sticks.
pub fn fallback(catalog: &[Product], message: &str, rng: &mut impl Rng) -> Reply {
    let lowercase = message.to_lowercase();
    let keywords: Vec<&str> = lowercase
        .split_whitespace()
        .filter(|word| word.len() > 2)
        .collect();

    let mut products: Vec<Product> = catalog
        .iter()
        .filter(|product| {
            keywords.iter().any(|keyword| {
                product.name.to_lowercase().contains(keyword)
                    || product.description.to_lowercase().contains(keyword)
                    || product.tags.iter().any(|tag| tag.contains(keyword))
            })
        })
        .take(MAX_RESULTS)
        .cloned()
        .collect();

    if products.is_empty() {
        products = top_by_popularity(catalog, MAX_RESULTS);
    }

    Reply {
        content: replies::pick(rng, replies::FALLBACK_REPLIES).to_owned(),
        products,
        suggestions: replies::suggestions(replies::FALLBACK_SUGGESTIONS),
    }
}

/// Top `n` products by popularity score, stable on catalog order.
fn top_by_popularity(catalog: &[Product], n: usize) -> Vec<Product> {
    let mut products = catalog.to_vec();
    products.sort_by(|a, b| b.popularity().total_cmp(&a.popularity()));
    products.truncate(n);
    products
}

/// Extract the first run of digits from a message ("under $1000" -> 1000).
fn extract_amount(message: &str) -> Option<u32> {
    let mut digits = String::new();
    for c in message.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !digits.is_empty() {
            break;
        }
    }

    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use shopbot_core::ProductId;

    use super::*;

    fn product(
        id: &str,
        name: &str,
        category: &str,
        brand: &str,
        price: f64,
        rating: f64,
        reviews: u32,
        in_stock: bool,
        tags: &[&str],
    ) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            category: category.to_owned(),
            price,
            original_price: None,
            image: String::new(),
            description: format!("{name} from {brand}"),
            rating,
            reviews,
            in_stock,
            features: Vec::new(),
            brand: brand.to_owned(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    fn fixture_catalog() -> Vec<Product> {
        vec![
            product("1", "Alpha Phone", "Electronics", "Apple", 999.0, 4.8, 1000, true, &["smartphone", "premium"]),
            product("2", "Beta Laptop", "Electronics", "Dell", 1299.0, 4.5, 500, true, &["laptop", "business"]),
            product("3", "Gamma Buds", "Audio", "Sony", 199.0, 4.6, 2000, false, &["headphones", "wireless"]),
            product("4", "Delta Console", "Gaming", "Nintendo", 349.0, 4.7, 4000, true, &["gaming", "console"]),
            product("5", "Epsilon Watch", "Wearables", "Samsung", 299.0, 4.2, 800, true, &["smartwatch", "fitness"]),
            product("6", "Zeta Tablet", "Electronics", "Apple", 599.0, 4.4, 600, true, &["tablet", "creative"]),
            product("7", "Eta Speaker", "Audio", "Sony", 89.0, 4.0, 300, true, &["speaker", "portable"]),
            product("8", "Theta Vacuum", "Home", "Dyson", 749.0, 4.5, 2300, true, &["vacuum", "cordless"]),
        ]
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn test_price_under_filters_and_sorts_ascending() {
        let reply = price_query(&fixture_catalog(), "anything under $400 please");
        assert!(!reply.products.is_empty());
        assert!(reply.products.iter().all(|p| p.price <= 400.0));
        let prices: Vec<f64> = reply.products.iter().map(|p| p.price).collect();
        let mut sorted = prices.clone();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(prices, sorted);
        assert_eq!(reply.content, "Here are excellent products under $400 that offer great value:");
    }

    #[test]
    fn test_price_over_sorts_by_rating_descending() {
        let reply = price_query(&fixture_catalog(), "premium picks over $500");
        assert!(reply.products.iter().all(|p| p.price >= 500.0));
        let ratings: Vec<f64> = reply.products.iter().map(|p| p.rating).collect();
        let mut sorted = ratings.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(ratings, sorted);
    }

    #[test]
    fn test_price_around_uses_distance_window() {
        let reply = price_query(&fixture_catalog(), "something near 300 dollars in price");
        assert!(reply
            .products
            .iter()
            .all(|p| (p.price - 300.0).abs() <= 200.0));
        // Closest first.
        assert_eq!(reply.products.first().map(|p| p.id.as_str()), Some("5"));
    }

    #[test]
    fn test_price_threshold_defaults_to_500() {
        let reply = price_query(&fixture_catalog(), "under budget");
        assert_eq!(
            reply.content,
            "Here are excellent products under $500 that offer great value:"
        );
    }

    #[test]
    fn test_price_branch_keywords_are_case_sensitive() {
        // Handlers see the raw message; "Under" with a capital U misses the
        // under-branch and lands in the around-$N branch.
        let reply = price_query(&fixture_catalog(), "Under $200");
        assert_eq!(reply.content, "Here are products around $200 price range:");
    }

    #[test]
    fn test_search_matches_terms_after_stoplist() {
        let reply = product_search(&fixture_catalog(), "show me some laptop", &mut rng());
        assert!(reply.products.iter().any(|p| p.name == "Beta Laptop"));
        // Every template interpolates the match count.
        assert!(reply.content.contains('1'));
    }

    #[test]
    fn test_search_zero_matches_returns_first_six_in_order() {
        let catalog = fixture_catalog();
        let reply = product_search(&catalog, "find xyzzy", &mut rng());
        assert_eq!(reply.content, replies::SEARCH_NO_MATCH_REPLY);
        let ids: Vec<&str> = reply.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_search_stopwords_only_message_falls_back() {
        let reply = product_search(&fixture_catalog(), "show me some", &mut rng());
        assert_eq!(reply.content, replies::SEARCH_NO_MATCH_REPLY);
        assert_eq!(reply.products.len(), 6);
    }

    #[test]
    fn test_comparison_with_two_brands_returns_their_products() {
        let reply = comparison(&fixture_catalog(), "apple vs dell");
        assert!(!reply.products.is_empty());
        assert!(reply
            .products
            .iter()
            .all(|p| p.brand == "Apple" || p.brand == "Dell"));
    }

    #[test]
    fn test_comparison_without_brands_returns_most_popular() {
        let reply = comparison(&fixture_catalog(), "which is better");
        // Delta Console has the highest rating * reviews in the fixture.
        assert_eq!(reply.products.first().map(|p| p.id.as_str()), Some("4"));
        assert_eq!(reply.products.len(), 6);
    }

    #[test]
    fn test_recommendation_narrows_to_detected_category() {
        let reply = recommendation(&fixture_catalog(), "recommend a gaming setup", &mut rng());
        assert!(reply.products.iter().all(|p| {
            p.tags.iter().any(|t| t == "gaming") || p.category.to_lowercase().contains("gaming")
        }));
    }

    #[test]
    fn test_recommendation_sorts_by_popularity() {
        let reply = recommendation(&fixture_catalog(), "what should i buy", &mut rng());
        let scores: Vec<f64> = reply.products.iter().map(Product::popularity).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(scores, sorted);
    }

    #[test]
    fn test_availability_only_in_stock_in_catalog_order() {
        let reply = availability(&fixture_catalog());
        assert!(reply.products.iter().all(|p| p.in_stock));
        assert!(!reply.products.iter().any(|p| p.id.as_str() == "3"));
        let ids: Vec<&str> = reply.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_category_search_matches_tags_category_and_name() {
        let reply = category_search(&fixture_catalog(), "audio");
        let ids: Vec<&str> = reply.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "7"]);
        assert_eq!(
            reply.content,
            "Discover amazing audio products for the best sound experience:"
        );
    }

    #[test]
    fn test_brand_search_filters_brand_field() {
        let reply = brand_search(&fixture_catalog(), "apple");
        let ids: Vec<&str> = reply.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "6"]);
        assert_eq!(reply.content, "Here are the best Apple products we have:");
        assert_eq!(
            reply.suggestions.first().map(String::as_str),
            Some("Latest apple products")
        );
    }

    #[test]
    fn test_fallback_short_words_ignored_and_popular_substituted() {
        let reply = fallback(&fixture_catalog(), "ab cd", &mut rng());
        // No word longer than 2 chars, so nothing matches and the most
        // popular products fill in.
        assert_eq!(reply.products.first().map(|p| p.id.as_str()), Some("4"));
    }

    #[test]
    fn test_fallback_matches_loose_keywords() {
        let reply = fallback(&fixture_catalog(), "cordless cleaning", &mut rng());
        assert!(reply.products.iter().any(|p| p.id.as_str() == "8"));
    }

    #[test]
    fn test_extract_amount() {
        assert_eq!(extract_amount("under $1000"), Some(1000));
        assert_eq!(extract_amount("under 50 bucks"), Some(50));
        assert_eq!(extract_amount("no numbers here"), None);
        assert_eq!(extract_amount("$12abc34"), Some(12));
    }

    #[test]
    fn test_greeting_and_help_have_no_products() {
        assert!(greeting(&mut rng()).products.is_empty());
        assert!(help(&mut rng()).products.is_empty());
    }
}
