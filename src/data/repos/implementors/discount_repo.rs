use crate::data::database::Database;
use crate::data::models::discount_code::DiscountCode;
use crate::data::models::schema::discount_codes;
use crate::data::repos::traits::{DiscountStore, StoreError};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

pub struct DiscountRepo {
    db: Database,
}

impl DiscountRepo {
    pub fn new(db: Database) -> Self {
        DiscountRepo { db }
    }
}

#[async_trait]
impl DiscountStore for DiscountRepo {
    async fn insert(&self, code: DiscountCode) -> Result<(), StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        diesel::insert_into(discount_codes::table)
            .values(&code)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<DiscountCode>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let rows = discount_codes::table
            .load::<DiscountCode>(&mut conn)
            .await?;

        Ok(rows)
    }

    async fn get_active_by_code(
        &self,
        code: &str,
    ) -> Result<Option<DiscountCode>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let row = discount_codes::table
            .filter(
                discount_codes::code
                    .eq(code)
                    .and(discount_codes::is_active.eq(true)),
            )
            .first::<DiscountCode>(&mut conn)
            .await
            .optional()?;

        Ok(row)
    }
}
