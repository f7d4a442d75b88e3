use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::data::models::user::User;
use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use std::sync::Arc;

/// Authenticated caller, resolved from the `Authorization: Bearer`
/// header through the configured credential variant.
pub struct CurrentUser(pub User);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                tracing::warn!("Missing or malformed authorization header");
                ApiError::Unauthenticated
            })?;

        let user = state.resolve_bearer(bearer.token()).await?;
        Ok(CurrentUser(user))
    }
}

/// Like [`CurrentUser`], but additionally requires the admin role.
/// Applied to every mutating catalog, discount and order-status
/// endpoint regardless of the credential variant.
pub struct AdminUser(pub User);

impl FromRequestParts<Arc<AppState>> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            return Err(ApiError::Forbidden);
        }

        Ok(AdminUser(user))
    }
}
