use crate::data::database::Database;
use crate::data::models::order::{Order, OrderItem};
use crate::data::models::schema::{order_items, orders};
use crate::data::repos::traits::{OrderStore, StoreError};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct OrderRepo {
    db: Database,
}

impl OrderRepo {
    pub fn new(db: Database) -> Self {
        OrderRepo { db }
    }
}

#[async_trait]
impl OrderStore for OrderRepo {
    async fn insert(&self, order: Order, items: Vec<OrderItem>) -> Result<(), StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        conn.transaction::<(), result::Error, _>(|connection| {
            async move {
                diesel::insert_into(orders::table)
                    .values(&order)
                    .execute(connection)
                    .await?;

                diesel::insert_into(order_items::table)
                    .values(&items)
                    .execute(connection)
                    .await?;

                Ok(())
            }
            .scope_boxed()
        })
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let rows = orders::table
            .order(orders::created_at.desc())
            .load::<Order>(&mut conn)
            .await?;

        Ok(rows)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Order>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let rows = orders::table
            .filter(orders::user_id.eq(user_id))
            .order(orders::created_at.desc())
            .load::<Order>(&mut conn)
            .await?;

        Ok(rows)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Order>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let row = orders::table
            .filter(orders::id.eq(id))
            .first::<Order>(&mut conn)
            .await
            .optional()?;

        Ok(row)
    }

    async fn items_for(&self, order_id: &str) -> Result<Vec<OrderItem>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let rows = order_items::table
            .filter(order_items::order_id.eq(order_id))
            .load::<OrderItem>(&mut conn)
            .await?;

        Ok(rows)
    }

    async fn set_status(&self, id: &str, status: &str) -> Result<bool, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let updated = diesel::update(orders::table.filter(orders::id.eq(id)))
            .set(orders::status.eq(status))
            .execute(&mut conn)
            .await?;

        Ok(updated > 0)
    }
}
