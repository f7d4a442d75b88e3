use crate::data::models::address::Address;
use crate::data::models::cart_item::CartItem;
use crate::data::models::discount_code::DiscountCode;
use crate::data::models::order::{Order, OrderItem};
use crate::data::models::product::{Product, ProductChanges, ProductFilter};
use crate::data::models::review::Review;
use crate::data::models::user::User;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("connection pool error: {0}")]
    Pool(String),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: User) -> Result<(), StoreError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self, filter: ProductFilter) -> Result<Vec<Product>, StoreError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Product>, StoreError>;
    async fn insert(&self, product: Product) -> Result<(), StoreError>;
    async fn update(
        &self,
        id: &str,
        changes: ProductChanges,
    ) -> Result<Option<Product>, StoreError>;
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
    /// Appends a review and refreshes the product's derived rating and
    /// review count in one serialized storage operation. Returns the
    /// refreshed product, or `None` when the product does not exist.
    async fn append_review(
        &self,
        product_id: &str,
        review: Review,
    ) -> Result<Option<Product>, StoreError>;
    async fn reviews_for(&self, product_id: &str) -> Result<Vec<Review>, StoreError>;
}

#[async_trait]
pub trait CartStore: Send + Sync {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<CartItem>, StoreError>;
    /// Upsert-with-merge: if the user already has a line for this
    /// product, its quantity is incremented instead of inserting a
    /// duplicate row. Must be atomic under concurrent adds.
    async fn add_merging(&self, item: CartItem) -> Result<CartItem, StoreError>;
    async fn set_quantity(
        &self,
        item_id: &str,
        user_id: &str,
        quantity: i32,
    ) -> Result<Option<CartItem>, StoreError>;
    async fn delete(&self, item_id: &str, user_id: &str) -> Result<bool, StoreError>;
    async fn clear(&self, user_id: &str) -> Result<u64, StoreError>;
}

#[async_trait]
pub trait AddressStore: Send + Sync {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Address>, StoreError>;
    async fn clear_defaults(&self, user_id: &str) -> Result<(), StoreError>;
    async fn insert(&self, address: Address) -> Result<(), StoreError>;
    async fn get_for_user(&self, id: &str, user_id: &str)
        -> Result<Option<Address>, StoreError>;
    async fn delete(&self, id: &str, user_id: &str) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists the order header and its line items together.
    async fn insert(&self, order: Order, items: Vec<OrderItem>) -> Result<(), StoreError>;
    /// All orders, newest first.
    async fn list_all(&self) -> Result<Vec<Order>, StoreError>;
    /// One user's orders, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Order>, StoreError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Order>, StoreError>;
    async fn items_for(&self, order_id: &str) -> Result<Vec<OrderItem>, StoreError>;
    async fn set_status(&self, id: &str, status: &str) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait DiscountStore: Send + Sync {
    async fn insert(&self, code: DiscountCode) -> Result<(), StoreError>;
    async fn list(&self) -> Result<Vec<DiscountCode>, StoreError>;
    /// Exact-match lookup over active codes only. Callers normalize
    /// the code to upper case first.
    async fn get_active_by_code(&self, code: &str) -> Result<Option<DiscountCode>, StoreError>;
}
