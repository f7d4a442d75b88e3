use crate::api::controllers::discount_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(discount_controller::get_discount_codes)
                .post(discount_controller::create_discount_code),
        )
        .route("/apply", post(discount_controller::apply_discount))
}
