//! Shared setup for the tests that need a PostgreSQL database.

use std::sync::Once;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use storefront_service::db::{self, DbPool};
use storefront_service::schema::{product_counts, products};
use uuid::Uuid;

static MIGRATIONS: Once = Once::new();

pub async fn test_pool() -> DbPool {
    let url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must point at a PostgreSQL database");

    MIGRATIONS.call_once(|| db::run_migrations(&url).unwrap());
    db::build_pool(&url, 8).await.unwrap()
}

pub fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

pub async fn seed_product(pool: &DbPool, asin: &str, category: &str, count: i32) {
    let mut conn = pool.get().await.unwrap();

    diesel::insert_into(products::table)
        .values((
            products::asin.eq(asin),
            products::title.eq(format!("Product {}", asin)),
            products::img_url.eq(format!("https://img.example/{}.jpg", asin)),
            products::product_url.eq(format!("https://shop.example/{}", asin)),
            products::stars.eq(4.5_f32),
            products::reviews.eq(120),
            products::price.eq(19.99_f32),
            products::is_best_seller.eq(false),
            products::bought_in_last_month.eq(50),
            products::category_name.eq(category),
        ))
        .execute(&mut conn)
        .await
        .unwrap();

    diesel::insert_into(product_counts::table)
        .values((product_counts::asin.eq(asin), product_counts::count.eq(count)))
        .execute(&mut conn)
        .await
        .unwrap();
}
