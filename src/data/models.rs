pub mod address;
pub mod cart_item;
pub mod discount_code;
pub mod order;
pub mod product;
pub mod review;
pub mod schema;
pub mod user;
