use crate::api::controllers::address_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{delete, get};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(address_controller::get_addresses).post(address_controller::create_address),
        )
        .route("/{id}", delete(address_controller::delete_address))
}
