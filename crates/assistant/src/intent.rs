//! Message-intent classifier.
//!
//! A message is assigned exactly one [`Intent`] by checking keyword groups
//! in a fixed priority order, first match wins. Checks are plain substring
//! containment against the lowercased message, with no token boundaries
//! ("this" greets because it contains "hi"), so the ordering below is
//! observable behavior: reordering it silently reclassifies edge-case
//! inputs like "show me laptops under $1000".

/// Greeting keywords, checked first.
pub const GREETING_KEYWORDS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

/// Product-search keywords. Checked before price keywords, so a message
/// containing both ("show me laptops under $1000") is a product search.
pub const SEARCH_KEYWORDS: &[&str] = &[
    "show",
    "find",
    "search",
    "looking for",
    "need",
    "want",
    "get me",
];

/// Price-query keywords.
pub const PRICE_KEYWORDS: &[&str] = &[
    "price", "cost", "expensive", "cheap", "budget", "under", "over", "$",
];

/// Comparison keywords.
pub const COMPARISON_KEYWORDS: &[&str] =
    &["compare", "vs", "versus", "difference", "better", "best"];

/// Recommendation keywords.
pub const RECOMMENDATION_KEYWORDS: &[&str] = &[
    "recommend",
    "suggest",
    "advice",
    "what should",
    "help me choose",
];

/// Availability keywords.
pub const AVAILABILITY_KEYWORDS: &[&str] =
    &["available", "in stock", "stock", "delivery", "shipping"];

/// Help keywords.
pub const HELP_KEYWORDS: &[&str] = &["help", "what can you do", "how", "guide", "assist"];

/// Keyword-to-canonical-tag table for category detection, in priority order.
/// The first key found as a substring of the message wins.
pub const CATEGORY_TAGS: &[(&str, &str)] = &[
    ("phone", "smartphone"),
    ("smartphone", "smartphone"),
    ("iphone", "smartphone"),
    ("android", "smartphone"),
    ("laptop", "laptop"),
    ("computer", "laptop"),
    ("macbook", "laptop"),
    ("notebook", "laptop"),
    ("headphone", "audio"),
    ("headphones", "audio"),
    ("earphone", "audio"),
    ("speaker", "audio"),
    ("audio", "audio"),
    ("music", "audio"),
    ("gaming", "gaming"),
    ("game", "gaming"),
    ("console", "gaming"),
    ("watch", "wearable"),
    ("smartwatch", "wearable"),
    ("tablet", "tablet"),
    ("ipad", "tablet"),
];

/// Brand names recognized by the brand-match intent.
pub const BRANDS: &[&str] = &[
    "apple", "samsung", "sony", "dell", "hp", "asus", "lg", "xiaomi", "oneplus", "google",
    "nintendo", "dyson", "amazon",
];

/// The classified purpose of a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A greeting, no catalog access needed.
    Greeting,
    /// Free-text product search.
    ProductSearch,
    /// Price-threshold query ("under $500").
    PriceQuery,
    /// Brand or product comparison.
    Comparison,
    /// Recommendation request.
    Recommendation,
    /// Stock/delivery question.
    Availability,
    /// Help request.
    Help,
    /// Category-specific search, with the canonical category tag.
    Category(&'static str),
    /// Brand-specific search, with the detected brand keyword.
    Brand(&'static str),
    /// Nothing else matched.
    Fallback,
}

/// The priority chain for keyword intents. Evaluated in order, first match
/// wins; category, brand, and fallback detection follow after.
const KEYWORD_CHECKS: &[(Intent, &[&str])] = &[
    (Intent::Greeting, GREETING_KEYWORDS),
    (Intent::ProductSearch, SEARCH_KEYWORDS),
    (Intent::PriceQuery, PRICE_KEYWORDS),
    (Intent::Comparison, COMPARISON_KEYWORDS),
    (Intent::Recommendation, RECOMMENDATION_KEYWORDS),
    (Intent::Availability, AVAILABILITY_KEYWORDS),
    (Intent::Help, HELP_KEYWORDS),
];

/// Classify a lowercased user message into exactly one intent.
///
/// The caller is responsible for lowercasing; handlers later receive the
/// original message unchanged.
#[must_use]
pub fn classify(message: &str) -> Intent {
    for (intent, keywords) in KEYWORD_CHECKS {
        if contains_any(message, keywords) {
            return *intent;
        }
    }

    if let Some(tag) = detect_category(message) {
        return Intent::Category(tag);
    }

    if let Some(brand) = detect_brand(message) {
        return Intent::Brand(brand);
    }

    Intent::Fallback
}

/// Whether the message contains any of the given keywords as a substring.
#[must_use]
pub fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| message.contains(keyword))
}

/// Detect a canonical category tag: the first table key found as a
/// substring of the message.
#[must_use]
pub fn detect_category(message: &str) -> Option<&'static str> {
    CATEGORY_TAGS
        .iter()
        .find(|(keyword, _)| message.contains(keyword))
        .map(|(_, tag)| *tag)
}

/// Detect the first known brand mentioned in the message.
#[must_use]
pub fn detect_brand(message: &str) -> Option<&'static str> {
    BRANDS
        .iter()
        .find(|brand| message.contains(*brand))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_wins_over_other_keywords() {
        // "hello" is checked before everything else, even with price and
        // search keywords present.
        assert_eq!(classify("hello, show me something under $100"), Intent::Greeting);
        assert_eq!(classify("hi there"), Intent::Greeting);
        assert_eq!(classify("good morning! any deals?"), Intent::Greeting);
    }

    #[test]
    fn test_search_precedes_price() {
        // "show" precedes the price keywords in the chain, so this is a
        // product search even though "under" and "$" both match price.
        assert_eq!(classify("show me laptops under $1000"), Intent::ProductSearch);
    }

    #[test]
    fn test_price_query() {
        assert_eq!(classify("under $300 please"), Intent::PriceQuery);
        assert_eq!(classify("what does it cost"), Intent::PriceQuery);
        // "anything under $300" never reaches the price check: "anything"
        // contains "hi".
        assert_eq!(classify("anything under $300?"), Intent::Greeting);
    }

    #[test]
    fn test_comparison() {
        assert_eq!(classify("apple vs samsung"), Intent::Comparison);
    }

    #[test]
    fn test_recommendation() {
        assert_eq!(classify("recommend a tablet"), Intent::Recommendation);
    }

    #[test]
    fn test_availability_substring_semantics() {
        assert_eq!(classify("what do you have in stock?"), Intent::Availability);
        assert_eq!(classify("delivery estimate?"), Intent::Availability);
        // "is this in stock" never gets there: "this" contains "hi".
        assert_eq!(classify("is this in stock?"), Intent::Greeting);
    }

    #[test]
    fn test_help() {
        assert_eq!(classify("what can you do"), Intent::Help);
    }

    #[test]
    fn test_category_match_after_keyword_intents() {
        assert_eq!(classify("ipad"), Intent::Category("tablet"));
        assert_eq!(classify("macbook deals"), Intent::Category("laptop"));
        // First table key wins: "phone" appears before "smartphone".
        assert_eq!(detect_category("smartphone"), Some("smartphone"));
    }

    #[test]
    fn test_brand_only_message_reaches_brand_intent() {
        // "apple" carries no other keywords, so it falls through greeting,
        // search, price, comparison, recommendation, availability, help,
        // and category checks before hitting the brand table.
        assert_eq!(classify("apple"), Intent::Brand("apple"));
        assert_eq!(classify("dyson"), Intent::Brand("dyson"));
    }

    #[test]
    fn test_fallback() {
        // Note "things" would match greeting ("hi" is a substring), which is
        // exactly the kind of edge the fixed ordering pins down.
        assert_eq!(classify("blue gadget"), Intent::Fallback);
        assert_eq!(classify("things"), Intent::Greeting);
    }
}
