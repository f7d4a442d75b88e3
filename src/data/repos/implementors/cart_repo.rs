use crate::data::database::Database;
use crate::data::models::cart_item::CartItem;
use crate::data::models::schema::cart_items;
use crate::data::repos::traits::{CartStore, StoreError};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct CartRepo {
    db: Database,
}

impl CartRepo {
    pub fn new(db: Database) -> Self {
        CartRepo { db }
    }
}

#[async_trait]
impl CartStore for CartRepo {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<CartItem>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let rows = cart_items::table
            .filter(cart_items::user_id.eq(user_id))
            .order(cart_items::created_at.asc())
            .load::<CartItem>(&mut conn)
            .await?;

        Ok(rows)
    }

    async fn add_merging(&self, item: CartItem) -> Result<CartItem, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        // Lock the existing line (if any) so concurrent adds of the
        // same product serialize instead of losing an increment.
        let merged = conn
            .transaction::<CartItem, result::Error, _>(|connection| {
                async move {
                    let existing = cart_items::table
                        .filter(
                            cart_items::user_id
                                .eq(&item.user_id)
                                .and(cart_items::product_id.eq(&item.product_id)),
                        )
                        .for_update()
                        .first::<CartItem>(connection)
                        .await
                        .optional()?;

                    match existing {
                        Some(mut row) => {
                            row.quantity += item.quantity;
                            diesel::update(
                                cart_items::table.filter(cart_items::id.eq(&row.id)),
                            )
                            .set(cart_items::quantity.eq(row.quantity))
                            .execute(connection)
                            .await?;
                            Ok(row)
                        }
                        None => {
                            diesel::insert_into(cart_items::table)
                                .values(&item)
                                .execute(connection)
                                .await?;
                            Ok(item)
                        }
                    }
                }
                .scope_boxed()
            })
            .await?;

        Ok(merged)
    }

    async fn set_quantity(
        &self,
        item_id: &str,
        user_id: &str,
        quantity: i32,
    ) -> Result<Option<CartItem>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        // MySQL reports zero affected rows for a no-op update, so the
        // existence check has to be a select.
        let existing = cart_items::table
            .filter(
                cart_items::id
                    .eq(item_id)
                    .and(cart_items::user_id.eq(user_id)),
            )
            .first::<CartItem>(&mut conn)
            .await
            .optional()?;

        let Some(mut row) = existing else {
            return Ok(None);
        };

        diesel::update(cart_items::table.filter(cart_items::id.eq(item_id)))
            .set(cart_items::quantity.eq(quantity))
            .execute(&mut conn)
            .await?;

        row.quantity = quantity;
        Ok(Some(row))
    }

    async fn delete(&self, item_id: &str, user_id: &str) -> Result<bool, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let deleted = diesel::delete(
            cart_items::table.filter(
                cart_items::id
                    .eq(item_id)
                    .and(cart_items::user_id.eq(user_id)),
            ),
        )
        .execute(&mut conn)
        .await?;

        Ok(deleted > 0)
    }

    async fn clear(&self, user_id: &str) -> Result<u64, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let deleted = diesel::delete(cart_items::table.filter(cart_items::user_id.eq(user_id)))
            .execute(&mut conn)
            .await?;

        Ok(deleted as u64)
    }
}
