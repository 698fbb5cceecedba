use serde::{Deserialize, Serialize};

/// A catalog entry as exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub asin: String,
    pub title: String,
    pub img_url: String,
    pub product_url: String,
    pub stars: f32,
    pub reviews: i32,
    pub price: f32,
    pub is_best_seller: bool,
    pub bought_in_last_month: i32,
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AddItemToBasketRequest {
    pub product_id: String,
    pub user_id: String,
    pub basket_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CheckoutBasketRequest {
    pub user_id: String,
    pub basket_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
