use crate::api::controllers::order_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{get, put};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(order_controller::get_orders).post(order_controller::create_order),
        )
        .route("/{id}", get(order_controller::get_order_by_id))
        .route("/{id}/status", put(order_controller::update_order_status))
}
