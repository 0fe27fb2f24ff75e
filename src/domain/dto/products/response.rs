use serde::{Deserialize, Serialize};
use crate::domain::dto::format_datetime;
use crate::domain::entities::products::product::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: product.title,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            created_at: format_datetime(&product.created_at),
            updated_at: format_datetime(&product.updated_at),
        }
    }
}
