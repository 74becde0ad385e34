use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductParams {
    #[validate(length(min = 1, message = "Missing required fields: name, category, price, stock"))]
    pub name: String,
    #[validate(length(min = 1, message = "Missing required fields: name, category, price, stock"))]
    pub category: String,
    #[validate(range(exclusive_min = 0.0, message = "Missing required fields: name, category, price, stock"))]
    pub price: f64,
    pub sale_price: Option<f64>,
    #[validate(range(min = 0, message = "Missing required fields: name, category, price, stock"))]
    pub stock: i32,
    pub description: Option<String>,
    pub status: Option<String>,
    pub published: Option<bool>,
    pub image_url: Option<String>,
}

#[derive(Deserialize, Validate, ToSchema, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductParams {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub sale_price: Option<f64>,
    pub stock: Option<i32>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub published: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
}

/// Keeps an absent field apart from an explicit null: absent stays `None`,
/// null becomes `Some(None)` and clears the stored value.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
