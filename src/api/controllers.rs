pub mod address_controller;
pub mod auth_controller;
pub mod cart_controller;
pub mod discount_controller;
pub mod order_controller;
pub mod product_controller;
