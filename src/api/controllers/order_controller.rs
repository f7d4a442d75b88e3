use crate::api::errors::ApiError;
use crate::api::extractors::{AdminUser, CurrentUser};
use crate::api::request::{CreateOrderRequest, UpdateOrderStatusRequest};
use crate::api::response::{MessageResponse, OrderResponse};
use crate::api::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

pub async fn create_order(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<CreateOrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let (order, items) = state
        .orders
        .create(&user, &body.shipping_address_id, body.discount_code.as_deref())
        .await?;

    Ok(Json(OrderResponse::from_parts(order, items)))
}

pub async fn get_orders(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let orders = state.orders.list(&user).await?;
    Ok(Json(
        orders
            .into_iter()
            .map(|(order, items)| OrderResponse::from_parts(order, items))
            .collect(),
    ))
}

pub async fn get_order_by_id(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let (order, items) = state.orders.get(&id, &user).await?;
    Ok(Json(OrderResponse::from_parts(order, items)))
}

pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<String>,
    Json(body): Json<UpdateOrderStatusRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.orders.update_status(&id, &body.status).await?;
    Ok(Json(MessageResponse::new("Order status updated")))
}
