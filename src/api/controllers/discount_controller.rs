use crate::api::errors::ApiError;
use crate::api::extractors::AdminUser;
use crate::api::request::{ApplyDiscountRequest, CreateDiscountRequest};
use crate::api::response::{ApplyDiscountResponse, DiscountCodeResponse};
use crate::api::state::AppState;
use axum::Json;
use axum::extract::State;
use bigdecimal::{BigDecimal, FromPrimitive};
use std::sync::Arc;

pub async fn apply_discount(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ApplyDiscountRequest>,
) -> Result<Json<ApplyDiscountResponse>, ApiError> {
    let subtotal = BigDecimal::from_f64(body.subtotal)
        .ok_or_else(|| ApiError::Validation("subtotal is not a valid number".into()))?;

    let outcome = state.discounts.apply(&body.code, &subtotal).await?;
    Ok(Json(ApplyDiscountResponse::from(outcome)))
}

pub async fn create_discount_code(
    State(state): State<Arc<AppState>>,
    AdminUser(_admin): AdminUser,
    Json(body): Json<CreateDiscountRequest>,
) -> Result<Json<DiscountCodeResponse>, ApiError> {
    let value = BigDecimal::from_f64(body.discount_value)
        .ok_or_else(|| ApiError::Validation("discount_value is not a valid number".into()))?;

    let code = state
        .discounts
        .create(&body.code, &body.discount_type, value)
        .await?;

    Ok(Json(DiscountCodeResponse::from(code)))
}

pub async fn get_discount_codes(
    State(state): State<Arc<AppState>>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Vec<DiscountCodeResponse>>, ApiError> {
    let codes = state.discounts.list().await?;
    Ok(Json(
        codes.into_iter().map(DiscountCodeResponse::from).collect(),
    ))
}
