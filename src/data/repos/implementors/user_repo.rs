use crate::data::database::Database;
use crate::data::models::schema::users;
use crate::data::models::user::User;
use crate::data::repos::traits::{StoreError, UserStore};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

pub struct UserRepo {
    db: Database,
}

impl UserRepo {
    pub fn new(db: Database) -> Self {
        UserRepo { db }
    }
}

#[async_trait]
impl UserStore for UserRepo {
    async fn insert(&self, user: User) -> Result<(), StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        diesel::insert_into(users::table)
            .values(&user)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let user = users::table
            .filter(users::id.eq(id))
            .first::<User>(&mut conn)
            .await
            .optional()?;

        Ok(user)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let user = users::table
            .filter(users::email.eq(email))
            .first::<User>(&mut conn)
            .await
            .optional()?;

        Ok(user)
    }
}
