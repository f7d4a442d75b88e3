#![allow(dead_code)]

use async_trait::async_trait;
use bigdecimal::{BigDecimal, FromPrimitive};
use std::sync::{Arc, Mutex};
use storefront_server_lib::api::state::{AppState, Credentials};
use storefront_server_lib::data::models::address::Address;
use storefront_server_lib::data::models::cart_item::CartItem;
use storefront_server_lib::data::models::discount_code::DiscountCode;
use storefront_server_lib::data::models::order::{Order, OrderItem};
use storefront_server_lib::data::models::product::{Product, ProductChanges, ProductFilter};
use storefront_server_lib::data::models::review::{Review, average_rating};
use storefront_server_lib::data::models::user::{ROLE_ADMIN, ROLE_CUSTOMER, User};
use storefront_server_lib::data::repos::traits::{
    AddressStore, CartStore, DiscountStore, OrderStore, ProductStore, StoreError, UserStore,
};
use storefront_server_lib::security::jwt::JwtService;
use storefront_server_lib::security::provider::ProviderClient;
use storefront_server_lib::services::address_service::AddressService;
use storefront_server_lib::services::cart_service::CartService;
use storefront_server_lib::services::catalog_service::CatalogService;
use storefront_server_lib::services::discount_service::DiscountService;
use storefront_server_lib::services::order_service::OrderService;
use uuid::Uuid;

pub const TEST_SECRET: &str = "test-secret";

// In-memory stand-ins for the diesel repos, mirroring their merge and
// recompute semantics.

#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: User) -> Result<(), StoreError> {
        self.rows.lock().unwrap().push(user);
        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[derive(Default)]
pub struct MemoryProductStore {
    products: Mutex<Vec<Product>>,
    reviews: Mutex<Vec<Review>>,
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self, filter: ProductFilter) -> Result<Vec<Product>, StoreError> {
        let rows = self.products.lock().unwrap();

        if let Some(ids) = filter.ids {
            return Ok(rows.iter().filter(|p| ids.contains(&p.id)).cloned().collect());
        }

        Ok(rows
            .iter()
            .filter(|p| filter.category.as_ref().is_none_or(|c| &p.category == c))
            .filter(|p| filter.brand.as_ref().is_none_or(|b| &p.brand == b))
            .filter(|p| {
                filter
                    .search
                    .as_ref()
                    .is_none_or(|s| p.name.to_lowercase().contains(&s.to_lowercase()))
            })
            .filter(|p| filter.min_price.as_ref().is_none_or(|m| &p.price >= m))
            .filter(|p| filter.max_price.as_ref().is_none_or(|m| &p.price <= m))
            .filter(|p| filter.min_rating.is_none_or(|m| p.rating >= m))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Product>, StoreError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn insert(&self, product: Product) -> Result<(), StoreError> {
        self.products.lock().unwrap().push(product);
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        changes: ProductChanges,
    ) -> Result<Option<Product>, StoreError> {
        let mut rows = self.products.lock().unwrap();
        let Some(product) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        changes.apply_to(product);
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut rows = self.products.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok(rows.len() < before)
    }

    async fn append_review(
        &self,
        product_id: &str,
        review: Review,
    ) -> Result<Option<Product>, StoreError> {
        let mut products = self.products.lock().unwrap();
        let mut reviews = self.reviews.lock().unwrap();

        let Some(product) = products.iter_mut().find(|p| p.id == product_id) else {
            return Ok(None);
        };

        reviews.push(review);
        let ratings: Vec<i32> = reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .map(|r| r.rating)
            .collect();
        product.rating = average_rating(&ratings);
        product.review_count = ratings.len() as i32;

        Ok(Some(product.clone()))
    }

    async fn reviews_for(&self, product_id: &str) -> Result<Vec<Review>, StoreError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryCartStore {
    rows: Mutex<Vec<CartItem>>,
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<CartItem>, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn add_merging(&self, item: CartItem) -> Result<CartItem, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows
            .iter_mut()
            .find(|c| c.user_id == item.user_id && c.product_id == item.product_id)
        {
            existing.quantity += item.quantity;
            return Ok(existing.clone());
        }
        rows.push(item.clone());
        Ok(item)
    }

    async fn set_quantity(
        &self,
        item_id: &str,
        user_id: &str,
        quantity: i32,
    ) -> Result<Option<CartItem>, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(item) = rows
            .iter_mut()
            .find(|c| c.id == item_id && c.user_id == user_id)
        else {
            return Ok(None);
        };
        item.quantity = quantity;
        Ok(Some(item.clone()))
    }

    async fn delete(&self, item_id: &str, user_id: &str) -> Result<bool, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| !(c.id == item_id && c.user_id == user_id));
        Ok(rows.len() < before)
    }

    async fn clear(&self, user_id: &str) -> Result<u64, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.user_id != user_id);
        Ok((before - rows.len()) as u64)
    }
}

#[derive(Default)]
pub struct MemoryAddressStore {
    rows: Mutex<Vec<Address>>,
}

#[async_trait]
impl AddressStore for MemoryAddressStore {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Address>, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn clear_defaults(&self, user_id: &str) -> Result<(), StoreError> {
        for address in self
            .rows
            .lock()
            .unwrap()
            .iter_mut()
            .filter(|a| a.user_id == user_id)
        {
            address.is_default = false;
        }
        Ok(())
    }

    async fn insert(&self, address: Address) -> Result<(), StoreError> {
        self.rows.lock().unwrap().push(address);
        Ok(())
    }

    async fn get_for_user(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<Address>, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id && a.user_id == user_id)
            .cloned())
    }

    async fn delete(&self, id: &str, user_id: &str) -> Result<bool, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| !(a.id == id && a.user_id == user_id));
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct MemoryOrderStore {
    orders: Mutex<Vec<Order>>,
    items: Mutex<Vec<OrderItem>>,
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn insert(&self, order: Order, items: Vec<OrderItem>) -> Result<(), StoreError> {
        self.orders.lock().unwrap().push(order);
        self.items.lock().unwrap().extend(items);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        let mut rows = self.orders.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Order>, StoreError> {
        let mut rows: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Order>, StoreError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .cloned())
    }

    async fn items_for(&self, order_id: &str) -> Result<Vec<OrderItem>, StoreError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn set_status(&self, id: &str, status: &str) -> Result<bool, StoreError> {
        let mut rows = self.orders.lock().unwrap();
        let Some(order) = rows.iter_mut().find(|o| o.id == id) else {
            return Ok(false);
        };
        order.status = status.to_string();
        Ok(true)
    }
}

#[derive(Default)]
pub struct MemoryDiscountStore {
    rows: Mutex<Vec<DiscountCode>>,
}

#[async_trait]
impl DiscountStore for MemoryDiscountStore {
    async fn insert(&self, code: DiscountCode) -> Result<(), StoreError> {
        self.rows.lock().unwrap().push(code);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<DiscountCode>, StoreError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get_active_by_code(
        &self,
        code: &str,
    ) -> Result<Option<DiscountCode>, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.code == code && d.is_active)
            .cloned())
    }
}

/// Fully wired app state over in-memory stores, with handles kept for
/// seeding and inspection.
pub struct TestEnv {
    pub state: Arc<AppState>,
    pub users: Arc<dyn UserStore>,
    pub products: Arc<dyn ProductStore>,
    pub carts: Arc<dyn CartStore>,
    pub addresses: Arc<dyn AddressStore>,
    pub orders: Arc<dyn OrderStore>,
    pub discounts: Arc<dyn DiscountStore>,
    pub jwt: JwtService,
}

pub fn env() -> TestEnv {
    build_env(false)
}

/// Same wiring, but with `Credentials::Delegated` pointing at an
/// unreachable provider domain.
pub fn delegated_env() -> TestEnv {
    build_env(true)
}

fn build_env(delegated: bool) -> TestEnv {
    let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::default());
    let products: Arc<dyn ProductStore> = Arc::new(MemoryProductStore::default());
    let carts: Arc<dyn CartStore> = Arc::new(MemoryCartStore::default());
    let addresses: Arc<dyn AddressStore> = Arc::new(MemoryAddressStore::default());
    let orders: Arc<dyn OrderStore> = Arc::new(MemoryOrderStore::default());
    let discounts: Arc<dyn DiscountStore> = Arc::new(MemoryDiscountStore::default());

    let jwt = JwtService::new(TEST_SECRET, 7);
    let credentials = if delegated {
        let provider = ProviderClient::new(
            "provider.invalid",
            "test-client",
            std::time::Duration::from_secs(1),
        )
        .expect("failed to build provider client");
        Credentials::Delegated { provider }
    } else {
        Credentials::Local { jwt: jwt.clone() }
    };

    let state = Arc::new(AppState {
        users: users.clone(),
        catalog: CatalogService::new(products.clone()),
        cart: CartService::new(carts.clone(), products.clone()),
        addresses: AddressService::new(addresses.clone()),
        discounts: DiscountService::new(discounts.clone()),
        orders: OrderService::new(
            orders.clone(),
            carts.clone(),
            products.clone(),
            addresses.clone(),
            discounts.clone(),
        ),
        credentials,
    });

    TestEnv {
        state,
        users,
        products,
        carts,
        addresses,
        orders,
        discounts,
        jwt,
    }
}

pub fn router(env: &TestEnv) -> axum::Router {
    storefront_server_lib::api::server::app(env.state.clone(), &[])
}

pub fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> axum::http::Request<axum::body::Body> {
    let mut builder = axum::http::Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(axum::body::Body::from(json.to_string()))
            .expect("failed to build request"),
        None => builder
            .body(axum::body::Body::empty())
            .expect("failed to build request"),
    }
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}

pub fn token_for(env: &TestEnv, user: &User) -> String {
    env.jwt.generate_token(&user.id).expect("token generation failed")
}

pub fn make_user(role: &str) -> User {
    User {
        id: Uuid::new_v4().to_string(),
        email: format!("{}@example.com", Uuid::new_v4()),
        password_hash: None,
        name: "Test User".into(),
        role: role.to_string(),
        created_at: chrono::Utc::now().naive_utc(),
    }
}

pub async fn seed_user(env: &TestEnv, role: &str) -> User {
    let user = make_user(role);
    env.users.insert(user.clone()).await.unwrap();
    user
}

pub async fn seed_customer(env: &TestEnv) -> User {
    seed_user(env, ROLE_CUSTOMER).await
}

pub async fn seed_admin(env: &TestEnv) -> User {
    seed_user(env, ROLE_ADMIN).await
}

pub fn make_product(name: &str, price: f64, category: &str, brand: &str) -> Product {
    Product {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        description: "A test product".into(),
        price: BigDecimal::from_f64(price).unwrap(),
        category: category.to_string(),
        brand: brand.to_string(),
        images: r#"["https://img.example.com/a.jpg"]"#.into(),
        stock: 10,
        rating: 0.0,
        review_count: 0,
        created_at: chrono::Utc::now().naive_utc(),
    }
}

pub async fn seed_product(
    env: &TestEnv,
    name: &str,
    price: f64,
    category: &str,
    brand: &str,
) -> Product {
    let product = make_product(name, price, category, brand);
    env.products.insert(product.clone()).await.unwrap();
    product
}

pub async fn seed_address(env: &TestEnv, user_id: &str, is_default: bool) -> Address {
    let address = Address {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        full_name: "Jamie Doe".into(),
        phone: "555-0100".into(),
        address_line1: "1 Main St".into(),
        address_line2: None,
        city: "Springfield".into(),
        state: "IL".into(),
        zip_code: "62704".into(),
        country: "US".into(),
        is_default,
    };
    env.addresses.insert(address.clone()).await.unwrap();
    address
}

pub async fn seed_discount(
    env: &TestEnv,
    code: &str,
    discount_type: &str,
    value: f64,
    is_active: bool,
) -> DiscountCode {
    let record = DiscountCode {
        id: Uuid::new_v4().to_string(),
        code: code.to_string(),
        discount_type: discount_type.to_string(),
        discount_value: BigDecimal::from_f64(value).unwrap(),
        is_active,
        created_at: chrono::Utc::now().naive_utc(),
    };
    env.discounts.insert(record.clone()).await.unwrap();
    record
}
