//! Free-text catalog search with optional filters.
//!
//! Exposed independently of the chat flow so a header search box can use
//! the same matching rules as the assistant. Unlike chat replies this does
//! not truncate: the full filtered set comes back, sorted by popularity.

use shopbot_core::{Product, SearchFilter};

/// Search the catalog.
///
/// Query terms of length > 1 are matched as substrings against the
/// concatenated lowercased name, description, brand, category, and tags;
/// any term matching keeps the product. All supplied filters must also
/// match. Results are sorted descending by popularity (`rating * reviews`),
/// stable on catalog order. An empty query skips text matching entirely; a
/// whitespace-only query yields no terms and therefore no matches.
#[must_use]
pub fn search_products(
    catalog: &[Product],
    query: &str,
    filters: Option<&SearchFilter>,
) -> Vec<Product> {
    let mut results: Vec<Product> = catalog
        .iter()
        .filter(|product| matches_query(product, query))
        .filter(|product| filters.is_none_or(|f| matches_filters(product, f)))
        .cloned()
        .collect();

    results.sort_by(|a, b| b.popularity().total_cmp(&a.popularity()));
    results
}

/// Whether the product's searchable text contains any query term.
fn matches_query(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let lowercase = query.to_lowercase();
    let terms = lowercase.split_whitespace().filter(|term| term.len() > 1);

    let searchable = format!(
        "{} {} {} {} {}",
        product.name,
        product.description,
        product.brand,
        product.category,
        product.tags.join(" ")
    )
    .to_lowercase();

    let mut terms = terms.peekable();
    terms.peek().is_some() && terms.any(|term| searchable.contains(term))
}

/// Whether the product passes every supplied filter.
fn matches_filters(product: &Product, filters: &SearchFilter) -> bool {
    if let Some(category) = &filters.category
        && product.category != *category
    {
        return false;
    }

    if let Some(brand) = &filters.brand
        && product.brand != *brand
    {
        return false;
    }

    if let Some((min, max)) = filters.price_range
        && (product.price < min || product.price > max)
    {
        return false;
    }

    if let Some(rating) = filters.rating
        && product.rating < rating
    {
        return false;
    }

    if let Some(in_stock) = filters.in_stock
        && product.in_stock != in_stock
    {
        return false;
    }

    true
}
