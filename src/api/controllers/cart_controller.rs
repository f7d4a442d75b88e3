use crate::api::errors::ApiError;
use crate::api::extractors::CurrentUser;
use crate::api::request::{AddCartItemRequest, UpdateCartItemRequest};
use crate::api::response::{CartItemResponse, MessageResponse};
use crate::api::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

pub async fn get_cart(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<CartItemResponse>>, ApiError> {
    let items = state.cart.list(&user.id).await?;
    Ok(Json(items.into_iter().map(CartItemResponse::from).collect()))
}

pub async fn add_to_cart(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<AddCartItemRequest>,
) -> Result<Json<CartItemResponse>, ApiError> {
    let item = state
        .cart
        .add(&user.id, &body.product_id, body.quantity)
        .await?;
    Ok(Json(CartItemResponse::from(item)))
}

pub async fn update_cart_item(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(body): Json<UpdateCartItemRequest>,
) -> Result<Json<CartItemResponse>, ApiError> {
    let item = state.cart.update(&id, &user.id, body.quantity).await?;
    Ok(Json(CartItemResponse::from(item)))
}

pub async fn remove_from_cart(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.cart.remove(&id, &user.id).await?;
    Ok(Json(MessageResponse::new("Item removed from cart")))
}

pub async fn clear_cart(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<MessageResponse>, ApiError> {
    state.cart.clear(&user.id).await?;
    Ok(Json(MessageResponse::new("Cart cleared")))
}
