use crate::api::errors::ApiError;
use crate::api::extractors::CurrentUser;
use crate::api::request::CreateAddressRequest;
use crate::api::response::{AddressResponse, MessageResponse};
use crate::api::state::AppState;
use crate::services::address_service::NewAddressFields;
use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;

pub async fn get_addresses(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<AddressResponse>>, ApiError> {
    let addresses = state.addresses.list(&user.id).await?;
    Ok(Json(
        addresses.into_iter().map(AddressResponse::from).collect(),
    ))
}

pub async fn create_address(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<CreateAddressRequest>,
) -> Result<Json<AddressResponse>, ApiError> {
    let fields = NewAddressFields {
        full_name: body.full_name,
        phone: body.phone,
        address_line1: body.address_line1,
        address_line2: body.address_line2,
        city: body.city,
        state: body.state,
        zip_code: body.zip_code,
        country: body.country,
        is_default: body.is_default,
    };

    let address = state.addresses.create(&user.id, fields).await?;
    Ok(Json(AddressResponse::from(address)))
}

pub async fn delete_address(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.addresses.delete(&id, &user.id).await?;
    Ok(Json(MessageResponse::new("Address deleted")))
}
