use crate::api::controllers::cart_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(cart_controller::get_cart)
                .post(cart_controller::add_to_cart)
                .delete(cart_controller::clear_cart),
        )
        .route(
            "/{id}",
            axum::routing::put(cart_controller::update_cart_item)
                .delete(cart_controller::remove_from_cart),
        )
}
