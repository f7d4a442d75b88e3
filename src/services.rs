pub mod address_service;
pub mod cart_service;
pub mod catalog_service;
pub mod discount_service;
pub mod errors;
pub mod order_service;
