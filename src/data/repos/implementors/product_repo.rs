use crate::data::database::Database;
use crate::data::models::product::{Product, ProductChanges, ProductFilter};
use crate::data::models::review::{Review, average_rating};
use crate::data::models::schema::{products, reviews};
use crate::data::repos::traits::{ProductStore, StoreError};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

pub struct ProductRepo {
    db: Database,
}

impl ProductRepo {
    pub fn new(db: Database) -> Self {
        ProductRepo { db }
    }
}

#[async_trait]
impl ProductStore for ProductRepo {
    async fn list(&self, filter: ProductFilter) -> Result<Vec<Product>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        // An explicit id list short-circuits every other criterion.
        if let Some(ids) = filter.ids {
            let rows = products::table
                .filter(products::id.eq_any(ids))
                .load::<Product>(&mut conn)
                .await?;
            return Ok(rows);
        }

        let mut query = products::table.into_boxed();

        if let Some(category) = filter.category {
            query = query.filter(products::category.eq(category));
        }
        if let Some(brand) = filter.brand {
            query = query.filter(products::brand.eq(brand));
        }
        if let Some(search) = filter.search {
            // MySQL LIKE is case-insensitive under the default collation.
            // Escape its wildcards so the search text matches literally.
            let escaped = search
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_");
            query = query.filter(products::name.like(format!("%{escaped}%")));
        }
        if let Some(min_price) = filter.min_price {
            query = query.filter(products::price.ge(min_price));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(products::price.le(max_price));
        }
        if let Some(min_rating) = filter.min_rating {
            query = query.filter(products::rating.ge(min_rating));
        }

        let rows = query.load::<Product>(&mut conn).await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let product = products::table
            .filter(products::id.eq(id))
            .first::<Product>(&mut conn)
            .await
            .optional()?;

        Ok(product)
    }

    async fn insert(&self, product: Product) -> Result<(), StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        diesel::insert_into(products::table)
            .values(&product)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        changes: ProductChanges,
    ) -> Result<Option<Product>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        if !changes.is_empty() {
            diesel::update(products::table.filter(products::id.eq(id)))
                .set(&changes)
                .execute(&mut conn)
                .await?;
        }

        let updated = products::table
            .filter(products::id.eq(id))
            .first::<Product>(&mut conn)
            .await
            .optional()?;

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let deleted = diesel::delete(products::table.filter(products::id.eq(id)))
            .execute(&mut conn)
            .await?;

        Ok(deleted > 0)
    }

    async fn append_review(
        &self,
        product_id: &str,
        review: Review,
    ) -> Result<Option<Product>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let pid = product_id.to_string();

        // The product row is locked for the whole transaction so two
        // simultaneous appends cannot lose a rating update.
        let updated = conn
            .transaction::<Option<Product>, result::Error, _>(|connection| {
                async move {
                    let existing = products::table
                        .filter(products::id.eq(&pid))
                        .for_update()
                        .first::<Product>(connection)
                        .await
                        .optional()?;

                    if existing.is_none() {
                        return Ok(None);
                    }

                    diesel::insert_into(reviews::table)
                        .values(&review)
                        .execute(connection)
                        .await?;

                    let ratings: Vec<i32> = reviews::table
                        .filter(reviews::product_id.eq(&pid))
                        .select(reviews::rating)
                        .load(connection)
                        .await?;

                    diesel::update(products::table.filter(products::id.eq(&pid)))
                        .set((
                            products::rating.eq(average_rating(&ratings)),
                            products::review_count.eq(ratings.len() as i32),
                        ))
                        .execute(connection)
                        .await?;

                    let refreshed = products::table
                        .filter(products::id.eq(&pid))
                        .first::<Product>(connection)
                        .await?;

                    Ok(Some(refreshed))
                }
                .scope_boxed()
            })
            .await?;

        Ok(updated)
    }

    async fn reviews_for(&self, product_id: &str) -> Result<Vec<Review>, StoreError> {
        let mut conn = self
            .db
            .get_connection()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))?;

        let rows = reviews::table
            .filter(reviews::product_id.eq(product_id))
            .order(reviews::created_at.asc())
            .load::<Review>(&mut conn)
            .await?;

        Ok(rows)
    }
}
