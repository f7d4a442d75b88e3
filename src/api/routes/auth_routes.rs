use crate::api::config::AuthMode;
use crate::api::controllers::auth_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Registration/login exist only in the local variant; the PKCE
/// callback only in the delegated one. `/auth/me` is always mounted.
pub fn routes(mode: AuthMode) -> Router<Arc<AppState>> {
    let router = Router::new().route("/auth/me", get(auth_controller::me));

    match mode {
        AuthMode::Local => router
            .route("/auth/register", post(auth_controller::register))
            .route("/auth/login", post(auth_controller::login)),
        AuthMode::Delegated => router.route(
            "/shopify-auth/callback",
            post(auth_controller::provider_callback),
        ),
    }
}
