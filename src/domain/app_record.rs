use serde::{Deserialize, Serialize};

/// Fixed-shape catalog record returned by every query endpoint.
///
/// Every field is independently optional: a source column that never
/// resolved, a blank cell, or a cell that fails type coercion all surface
/// as `null` in the response, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRecord {
    #[serde(rename = "App")]
    pub app: Option<String>,
    #[serde(rename = "Category")]
    pub category: Option<String>,
    #[serde(rename = "Rating")]
    pub rating: Option<f64>,
    #[serde(rename = "Reviews")]
    pub reviews: Option<i64>,
    #[serde(rename = "Installs")]
    pub installs: Option<String>,
    #[serde(rename = "Type")]
    pub app_type: Option<String>,
    #[serde(rename = "Price")]
    pub price: Option<String>,
    #[serde(rename = "Content_Rating")]
    pub content_rating: Option<String>,
}
