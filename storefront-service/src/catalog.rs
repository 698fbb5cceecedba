use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use shared::{Category, Product};
use tracing::debug;

use crate::db::DbPool;
use crate::error::ShopResult;
use crate::models::ProductRow;
use crate::schema::products;

/// Read-only access to the product catalog.
#[derive(Clone)]
pub struct CatalogReader {
    pool: DbPool,
}

impl CatalogReader {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list_categories(&self) -> ShopResult<Vec<Category>> {
        let mut conn = self.pool.get().await?;

        let names = products::table
            .select(products::category_name)
            .distinct()
            .load::<String>(&mut conn)
            .await?;

        debug!("Loaded {} categories", names.len());
        Ok(names.into_iter().map(|name| Category { name }).collect())
    }

    /// Products whose category matches exactly. Unknown categories yield an empty list.
    pub async fn list_products(&self, category: &str) -> ShopResult<Vec<Product>> {
        let mut conn = self.pool.get().await?;

        let rows = products::table
            .filter(products::category_name.eq(category))
            .select(ProductRow::as_select())
            .load::<ProductRow>(&mut conn)
            .await?;

        debug!("Loaded {} products for category {}", rows.len(), category);
        Ok(rows.into_iter().map(Product::from).collect())
    }
}
