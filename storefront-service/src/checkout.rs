use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::info;

use crate::db::DbPool;
use crate::error::ShopResult;
use crate::schema::baskets;

#[derive(Clone)]
pub struct CheckoutService {
    pool: DbPool,
}

impl CheckoutService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Marks every line of the user's basket as checked out and returns how
    /// many rows the update touched. An empty basket is not an error.
    pub async fn checkout(&self, user_id: &str, basket_id: &str) -> ShopResult<usize> {
        let mut conn = self.pool.get().await?;

        let updated = diesel::update(
            baskets::table
                .filter(baskets::user_id.eq(user_id))
                .filter(baskets::basket_id.eq(basket_id)),
        )
        .set(baskets::is_checked_out.eq(true))
        .execute(&mut conn)
        .await?;

        info!(
            "Checked out basket {} for user {} ({} lines)",
            basket_id, user_id, updated
        );
        Ok(updated)
    }
}
