//! Catalog search filters.

use serde::{Deserialize, Serialize};

/// Optional filters applied on top of a free-text catalog search.
///
/// All present filters must match (intersection). Text matching itself is
/// handled by the search utility, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    /// Exact category match (e.g., "Electronics").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Inclusive price bounds as `(min, max)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<(f64, f64)>,
    /// Exact brand match (e.g., "Apple").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Minimum average rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Restrict to a specific stock state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl SearchFilter {
    /// A filter that matches everything.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}
