pub mod auth;
pub mod errors;
pub mod jwt;
pub mod provider;
