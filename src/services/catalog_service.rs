use crate::data::models::product::{Product, ProductChanges, ProductFilter};
use crate::data::models::review::Review;
use crate::data::models::user::User;
use crate::data::repos::traits::ProductStore;
use crate::services::errors::ServiceError;
use bigdecimal::BigDecimal;
use std::sync::Arc;
use uuid::Uuid;

/// New-product fields as validated at the API boundary.
#[derive(Clone, Debug)]
pub struct NewProductFields {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category: String,
    pub brand: String,
    pub images: Vec<String>,
    pub stock: i32,
}

#[derive(Clone)]
pub struct CatalogService {
    products: Arc<dyn ProductStore>,
}

impl CatalogService {
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        CatalogService { products }
    }

    pub async fn list(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<(Product, Vec<Review>)>, ServiceError> {
        let products = self.products.list(filter).await?;

        let mut out = Vec::with_capacity(products.len());
        for product in products {
            let reviews = self.products.reviews_for(&product.id).await?;
            out.push((product, reviews));
        }
        Ok(out)
    }

    pub async fn get(&self, id: &str) -> Result<(Product, Vec<Review>), ServiceError> {
        let product = self
            .products
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("Product"))?;
        let reviews = self.products.reviews_for(id).await?;
        Ok((product, reviews))
    }

    pub async fn create(&self, fields: NewProductFields) -> Result<Product, ServiceError> {
        if fields.name.trim().is_empty() {
            return Err(ServiceError::Validation("Product name is required".into()));
        }
        if fields.price < BigDecimal::from(0) {
            return Err(ServiceError::Validation(
                "Price must not be negative".into(),
            ));
        }

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            brand: fields.brand,
            images: serde_json::to_string(&fields.images)
                .unwrap_or_else(|_| String::from("[]")),
            stock: fields.stock,
            rating: 0.0,
            review_count: 0,
            created_at: chrono::Utc::now().naive_utc(),
        };

        self.products.insert(product.clone()).await?;
        tracing::info!(product_id = %product.id, "Product created");

        Ok(product)
    }

    pub async fn update(
        &self,
        id: &str,
        changes: ProductChanges,
    ) -> Result<(Product, Vec<Review>), ServiceError> {
        if let Some(price) = &changes.price {
            if *price < BigDecimal::from(0) {
                return Err(ServiceError::Validation(
                    "Price must not be negative".into(),
                ));
            }
        }

        let product = self
            .products
            .update(id, changes)
            .await?
            .ok_or(ServiceError::NotFound("Product"))?;
        let reviews = self.products.reviews_for(id).await?;
        Ok((product, reviews))
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if self.products.delete(id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound("Product"))
        }
    }

    /// Appends a review and returns it with the refreshed product.
    /// Rating recomputation happens inside the store so concurrent
    /// submissions on the same product cannot drop an update.
    pub async fn add_review(
        &self,
        product_id: &str,
        user: &User,
        rating: i32,
        comment: String,
    ) -> Result<(Review, Product), ServiceError> {
        if !(1..=5).contains(&rating) {
            return Err(ServiceError::Validation(
                "Rating must be between 1 and 5".into(),
            ));
        }

        let review = Review {
            id: Uuid::new_v4().to_string(),
            product_id: product_id.to_string(),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            rating,
            comment,
            created_at: chrono::Utc::now().naive_utc(),
        };

        let product = self
            .products
            .append_review(product_id, review.clone())
            .await?
            .ok_or(ServiceError::NotFound("Product"))?;

        Ok((review, product))
    }
}
