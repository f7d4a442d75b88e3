use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Delegated variant: authorization code + PKCE verifier exchange.
#[derive(Deserialize)]
pub struct CallbackRequest {
    pub code: String,
    pub code_verifier: String,
    pub redirect_uri: String,
}

#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    pub brand: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub stock: i32,
}

#[derive(Deserialize, Default)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub images: Option<Vec<String>>,
    pub stock: Option<i32>,
}

/// Catalog list filters; `ids` is comma-separated and short-circuits
/// everything else.
#[derive(Deserialize, Default)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub brand: Option<String>,
    pub min_rating: Option<f64>,
    pub ids: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub rating: i32,
    pub comment: String,
}

#[derive(Deserialize)]
pub struct AddCartItemRequest {
    pub product_id: String,
    pub quantity: i32,
}

#[derive(Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

#[derive(Deserialize)]
pub struct CreateAddressRequest {
    pub full_name: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Totals are recomputed server-side from the cart and live catalog
/// prices; only the address choice and an optional code come in.
#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub shipping_address_id: String,
    pub discount_code: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct CreateDiscountRequest {
    pub code: String,
    pub discount_type: String,
    pub discount_value: f64,
}

#[derive(Deserialize)]
pub struct ApplyDiscountRequest {
    pub code: String,
    pub subtotal: f64,
}
