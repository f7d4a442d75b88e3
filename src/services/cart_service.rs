use crate::data::models::cart_item::CartItem;
use crate::data::repos::traits::{CartStore, ProductStore};
use crate::services::errors::ServiceError;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct CartService {
    carts: Arc<dyn CartStore>,
    products: Arc<dyn ProductStore>,
}

impl CartService {
    pub fn new(carts: Arc<dyn CartStore>, products: Arc<dyn ProductStore>) -> Self {
        CartService { carts, products }
    }

    pub async fn list(&self, user_id: &str) -> Result<Vec<CartItem>, ServiceError> {
        Ok(self.carts.list_for_user(user_id).await?)
    }

    /// Adding a product the user already carries merges into the
    /// existing line instead of creating a second one.
    pub async fn add(
        &self,
        user_id: &str,
        product_id: &str,
        quantity: i32,
    ) -> Result<CartItem, ServiceError> {
        if quantity < 1 {
            return Err(ServiceError::Validation(
                "Quantity must be at least 1".into(),
            ));
        }

        self.products
            .get_by_id(product_id)
            .await?
            .ok_or(ServiceError::NotFound("Product"))?;

        let item = CartItem {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            product_id: product_id.to_string(),
            quantity,
            created_at: chrono::Utc::now().naive_utc(),
        };

        Ok(self.carts.add_merging(item).await?)
    }

    pub async fn update(
        &self,
        item_id: &str,
        user_id: &str,
        quantity: i32,
    ) -> Result<CartItem, ServiceError> {
        if quantity < 1 {
            return Err(ServiceError::Validation(
                "Quantity must be at least 1".into(),
            ));
        }

        self.carts
            .set_quantity(item_id, user_id, quantity)
            .await?
            .ok_or(ServiceError::NotFound("Cart item"))
    }

    pub async fn remove(&self, item_id: &str, user_id: &str) -> Result<(), ServiceError> {
        if self.carts.delete(item_id, user_id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound("Cart item"))
        }
    }

    pub async fn clear(&self, user_id: &str) -> Result<(), ServiceError> {
        self.carts.clear(user_id).await?;
        Ok(())
    }
}
