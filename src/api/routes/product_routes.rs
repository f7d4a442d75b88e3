use crate::api::controllers::product_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(product_controller::get_products).post(product_controller::create_product),
        )
        .route(
            "/{id}",
            get(product_controller::get_product_by_id)
                .put(product_controller::update_product)
                .delete(product_controller::delete_product),
        )
        .route("/{id}/reviews", post(product_controller::add_review))
}
