// Centralized header alias configuration for catalog column resolution.
//
// Goal: keep spreadsheet header matching flexible without scattering alias
// lists across the query layer.

use std::collections::HashMap;

// NOTE:
// - Aliases are matched against a normalized header (lowercase,
//   space/dash -> underscore), so "Content Rating", "content_rating" and
//   "Content_Rating" all land on the same key.
// - Resolution is first-candidate-wins over the alias list.

pub const APP_ALIASES: &[&str] = &["app", "app_name", "application", "name"];

pub const CATEGORY_ALIASES: &[&str] = &["category", "genre"];

pub const RATING_ALIASES: &[&str] = &["rating", "score"];

pub const REVIEWS_ALIASES: &[&str] = &["reviews", "review_count"];

pub const INSTALLS_ALIASES: &[&str] = &["installs", "downloads"];

pub const TYPE_ALIASES: &[&str] = &["type"];

pub const PRICE_ALIASES: &[&str] = &["price"];

pub const CONTENT_RATING_ALIASES: &[&str] = &["content_rating", "content rating"];

pub fn normalize_header(s: &str) -> String {
    s.trim()
        .trim_matches('"')
        .to_ascii_lowercase()
        .replace(' ', "_")
        .replace('-', "_")
}

/// Mapping from the eight logical catalog fields to the actual column
/// labels found in the dataset at load time.
///
/// Built once; a field that never resolves stays absent for the process
/// lifetime and projects as `null` in every response.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    pub app: Option<String>,
    pub category: Option<String>,
    pub rating: Option<String>,
    pub reviews: Option<String>,
    pub installs: Option<String>,
    pub app_type: Option<String>,
    pub price: Option<String>,
    pub content_rating: Option<String>,
}

impl ColumnMap {
    pub fn from_headers(headers: &[String]) -> Self {
        let mut lookup: HashMap<String, &str> = HashMap::with_capacity(headers.len());
        for label in headers {
            // First occurrence wins for headers that normalize identically.
            lookup.entry(normalize_header(label)).or_insert(label.as_str());
        }

        Self {
            app: resolve(&lookup, APP_ALIASES),
            category: resolve(&lookup, CATEGORY_ALIASES),
            rating: resolve(&lookup, RATING_ALIASES),
            reviews: resolve(&lookup, REVIEWS_ALIASES),
            installs: resolve(&lookup, INSTALLS_ALIASES),
            app_type: resolve(&lookup, TYPE_ALIASES),
            price: resolve(&lookup, PRICE_ALIASES),
            content_rating: resolve(&lookup, CONTENT_RATING_ALIASES),
        }
    }
}

fn resolve(lookup: &HashMap<String, &str>, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find_map(|candidate| lookup.get(&normalize_header(candidate)))
        .map(|label| (*label).to_string())
}
