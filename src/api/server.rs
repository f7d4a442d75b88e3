use crate::api::routes::{
    address_routes, auth_routes, cart_routes, discount_routes, order_routes, product_routes,
};
use crate::api::state::AppState;
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Assembles the full router. Split out of `start` so tests can drive
/// it with in-memory stores via `tower::ServiceExt::oneshot`.
pub fn app(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let api = Router::new()
        .merge(auth_routes::routes(state.auth_mode()))
        .nest("/products", product_routes::routes())
        .nest("/cart", cart_routes::routes())
        .nest("/addresses", address_routes::routes())
        .nest("/orders", order_routes::routes())
        .nest("/discount", discount_routes::routes());

    Router::new()
        .route("/", get(|| async { "Storefront API is running!" }))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

pub async fn start(state: Arc<AppState>, bind_addr: &str, cors_origins: &[String]) {
    let router = app(state, cors_origins);

    let listener = TcpListener::bind(bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running on http://{bind_addr}");

    axum::serve(listener, router)
        .await
        .expect("Failed to start the server");
}
