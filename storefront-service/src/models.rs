use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct ProductRow {
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

impl From<ProductRow> for shared::Product {
    fn from(row: ProductRow) -> Self {
        Self {
            asin: row.asin,
            title: row.title,
            img_url: row.img_url,
            product_url: row.product_url,
            stars: row.stars,
            reviews: row.reviews,
            price: row.price,
            is_best_seller: row.is_best_seller,
            bought_in_last_month: row.bought_in_last_month,
            category_name: row.category_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::baskets)]
pub struct BasketLine {
    pub basket_id: String,
    pub product_id: String,
    pub user_id: String,
    pub is_checked_out: bool,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::baskets)]
pub struct NewBasketLine<'a> {
    pub basket_id: &'a str,
    pub product_id: &'a str,
    pub user_id: &'a str,
    pub is_checked_out: bool,
}
