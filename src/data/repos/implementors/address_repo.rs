use crate::data::database::Database;
use crate::data::models::address::Address;
use crate::data::models::schema::addresses;
use crate::data::repos::traits::{AddressStore, StoreError};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

pub struct AddressRepo {
    db: Database,
}

impl AddressRepo {
    pub fn new(db: Database) -> Self {
        AddressRepo { db }
    }
}

#[async_trait]
impl AddressStore for AddressRepo {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Address>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let rows = addresses::table
            .filter(addresses::user_id.eq(user_id))
            .load::<Address>(&mut conn)
            .await?;

        Ok(rows)
    }

    async fn clear_defaults(&self, user_id: &str) -> Result<(), StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        diesel::update(addresses::table.filter(addresses::user_id.eq(user_id)))
            .set(addresses::is_default.eq(false))
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    async fn insert(&self, address: Address) -> Result<(), StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        diesel::insert_into(addresses::table)
            .values(&address)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    async fn get_for_user(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<Address>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let row = addresses::table
            .filter(addresses::id.eq(id).and(addresses::user_id.eq(user_id)))
            .first::<Address>(&mut conn)
            .await
            .optional()?;

        Ok(row)
    }

    async fn delete(&self, id: &str, user_id: &str) -> Result<bool, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let deleted = diesel::delete(
            addresses::table.filter(addresses::id.eq(id).and(addresses::user_id.eq(user_id))),
        )
        .execute(&mut conn)
        .await?;

        Ok(deleted > 0)
    }
}
