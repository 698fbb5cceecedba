use diesel::prelude::*;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use tracing::{info, warn};

use crate::db::DbPool;
use crate::error::{ShopError, ShopResult};
use crate::models::NewBasketLine;
use crate::schema::{baskets, product_counts};

#[derive(Clone)]
pub struct BasketService {
    pool: DbPool,
}

impl BasketService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Adds one unit of `product_id` to the basket and takes it out of stock.
    ///
    /// Runs as a single transaction: the inventory row is locked, checked,
    /// a basket line is inserted and the count is decremented. Any failure,
    /// including `ProductNotFound` and `OutOfStock`, rolls the whole thing back.
    ///
    /// Repeating the call adds another line and takes another unit.
    pub async fn add_item(&self, product_id: &str, user_id: &str, basket_id: &str) -> ShopResult<()> {
        let mut conn = self.pool.get().await?;

        match Self::reserve_and_add(&mut conn, product_id, user_id, basket_id).await {
            Ok(remaining) => {
                info!(
                    "Added {} to basket {} for user {}, {} left in stock",
                    product_id, basket_id, user_id, remaining
                );
                Ok(())
            }
            Err(e @ (ShopError::ProductNotFound | ShopError::OutOfStock)) => {
                warn!("Refused to add {} to basket {}: {}", product_id, basket_id, e);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    async fn reserve_and_add(
        conn: &mut AsyncPgConnection,
        product_id: &str,
        user_id: &str,
        basket_id: &str,
    ) -> ShopResult<i32> {
        let product_id = product_id.to_owned();
        let user_id = user_id.to_owned();
        let basket_id = basket_id.to_owned();

        conn.transaction::<_, ShopError, _>(|conn| {
            Box::pin(async move {
                // Row lock serializes concurrent adds of the same product.
                let count = product_counts::table
                    .find(&product_id)
                    .select(product_counts::count)
                    .for_update()
                    .get_result::<i32>(conn)
                    .await
                    .optional()?
                    .ok_or(ShopError::ProductNotFound)?;

                if count <= 0 {
                    return Err(ShopError::OutOfStock);
                }

                let line = NewBasketLine {
                    basket_id: &basket_id,
                    product_id: &product_id,
                    user_id: &user_id,
                    is_checked_out: false,
                };

                diesel::insert_into(baskets::table)
                    .values(&line)
                    .execute(conn)
                    .await?;

                diesel::update(product_counts::table.find(&product_id))
                    .set(product_counts::count.eq(product_counts::count - 1))
                    .execute(conn)
                    .await?;

                Ok(count - 1)
            })
        })
        .await
    }
}
