use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_status() -> String {
    "Selling".to_owned()
}

fn default_published() -> bool {
    true
}

/// A catalog product as persisted in the JSON products file.
///
/// Seed entries carry only the required fields; the serde defaults fill in
/// the rest when an older file is decoded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    pub stock: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
