use crate::data::models::address::Address;
use crate::data::models::cart_item::CartItem;
use crate::data::models::discount_code::DiscountCode;
use crate::data::models::order::{Order, OrderItem};
use crate::data::models::product::Product;
use crate::data::models::review::Review;
use crate::data::models::user::User;
use crate::services::discount_service::DiscountOutcome;
use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

fn iso(t: NaiveDateTime) -> String {
    DateTime::<Utc>::from_naive_utc_and_offset(t, Utc).to_rfc3339()
}

fn money(d: &BigDecimal) -> f64 {
    d.to_f64().unwrap_or_default()
}

#[derive(Serialize, Debug, Clone)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id,
            email: u.email,
            name: u.name,
            role: u.role,
            created_at: iso(u.created_at),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Serialize, Debug, Clone)]
pub struct ReviewResponse {
    pub user_id: String,
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        ReviewResponse {
            user_id: r.user_id,
            user_name: r.user_name,
            rating: r.rating,
            comment: r.comment,
            created_at: iso(r.created_at),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub brand: String,
    pub images: Vec<String>,
    pub stock: i32,
    pub rating: f64,
    pub review_count: i32,
    pub reviews: Vec<ReviewResponse>,
    pub created_at: String,
}

impl ProductResponse {
    pub fn from_parts(product: Product, reviews: Vec<Review>) -> Self {
        let images = product.image_list();
        ProductResponse {
            id: product.id,
            name: product.name,
            description: product.description,
            price: money(&product.price),
            category: product.category,
            brand: product.brand,
            images,
            stock: product.stock,
            rating: product.rating,
            review_count: product.review_count,
            reviews: reviews.into_iter().map(ReviewResponse::from).collect(),
            created_at: iso(product.created_at),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CartItemResponse {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub created_at: String,
}

impl From<CartItem> for CartItemResponse {
    fn from(c: CartItem) -> Self {
        CartItemResponse {
            id: c.id,
            user_id: c.user_id,
            product_id: c.product_id,
            quantity: c.quantity,
            created_at: iso(c.created_at),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct AddressResponse {
    pub id: String,
    pub user_id: String,
    pub full_name: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub is_default: bool,
}

impl From<Address> for AddressResponse {
    fn from(a: Address) -> Self {
        AddressResponse {
            id: a.id,
            user_id: a.user_id,
            full_name: a.full_name,
            phone: a.phone,
            address_line1: a.address_line1,
            address_line2: a.address_line2,
            city: a.city,
            state: a.state,
            zip_code: a.zip_code,
            country: a.country,
            is_default: a.is_default,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ShippingAddressResponse {
    pub full_name: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct OrderItemResponse {
    pub product_id: String,
    pub product_name: String,
    pub product_image: String,
    pub price: f64,
    pub quantity: i32,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(i: OrderItem) -> Self {
        OrderItemResponse {
            product_id: i.product_id,
            product_name: i.product_name,
            product_image: i.product_image,
            price: money(&i.price),
            quantity: i.quantity,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItemResponse>,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
    pub shipping_address: ShippingAddressResponse,
    pub status: String,
    pub payment_status: String,
    pub created_at: String,
}

impl OrderResponse {
    pub fn from_parts(order: Order, items: Vec<OrderItem>) -> Self {
        OrderResponse {
            id: order.id,
            user_id: order.user_id,
            items: items.into_iter().map(OrderItemResponse::from).collect(),
            subtotal: money(&order.subtotal),
            discount: money(&order.discount),
            total: money(&order.total),
            shipping_address: ShippingAddressResponse {
                full_name: order.ship_full_name,
                phone: order.ship_phone,
                address_line1: order.ship_address_line1,
                address_line2: order.ship_address_line2,
                city: order.ship_city,
                state: order.ship_state,
                zip_code: order.ship_zip_code,
                country: order.ship_country,
            },
            status: order.status,
            payment_status: order.payment_status,
            created_at: iso(order.created_at),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct DiscountCodeResponse {
    pub id: String,
    pub code: String,
    pub discount_type: String,
    pub discount_value: f64,
    pub is_active: bool,
    pub created_at: String,
}

impl From<DiscountCode> for DiscountCodeResponse {
    fn from(d: DiscountCode) -> Self {
        DiscountCodeResponse {
            id: d.id,
            code: d.code,
            discount_type: d.discount_type,
            discount_value: money(&d.discount_value),
            is_active: d.is_active,
            created_at: iso(d.created_at),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ApplyDiscountResponse {
    pub valid: bool,
    pub discount: f64,
    pub message: String,
}

impl From<DiscountOutcome> for ApplyDiscountResponse {
    fn from(o: DiscountOutcome) -> Self {
        ApplyDiscountResponse {
            valid: o.valid,
            discount: money(&o.discount),
            message: o.message,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}
