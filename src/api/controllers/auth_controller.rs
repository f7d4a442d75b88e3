use crate::api::errors::ApiError;
use crate::api::extractors::CurrentUser;
use crate::api::request::{CallbackRequest, LoginRequest, RegisterRequest};
use crate::api::response::{AuthResponse, UserResponse};
use crate::api::state::{AppState, Credentials};
use crate::data::models::user::{ROLE_CUSTOMER, User};
use crate::data::repos::traits::StoreError;
use crate::security::auth;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;
use uuid::Uuid;

fn store_failure(e: StoreError) -> ApiError {
    tracing::error!("Store failure: {e}");
    ApiError::Internal
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Credentials::Local { jwt } = &state.credentials else {
        return Err(ApiError::NotFound("Resource"));
    };

    if !body.email.contains('@') {
        return Err(ApiError::Validation("A valid email is required".into()));
    }
    if body.password.is_empty() {
        return Err(ApiError::Validation("Password is required".into()));
    }

    if state
        .users
        .get_by_email(&body.email)
        .await
        .map_err(store_failure)?
        .is_some()
    {
        return Err(ApiError::Conflict);
    }

    let hashed = auth::hash_password(&body.password).await?;

    let user = User {
        id: Uuid::new_v4().to_string(),
        email: body.email,
        password_hash: Some(hashed),
        name: body.name,
        role: ROLE_CUSTOMER.to_string(),
        created_at: chrono::Utc::now().naive_utc(),
    };

    state.users.insert(user.clone()).await.map_err(store_failure)?;
    tracing::info!(user_id = %user.id, "User registered");

    let token = jwt.generate_token(&user.id)?;
    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(user),
    }))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Credentials::Local { jwt } = &state.credentials else {
        return Err(ApiError::NotFound("Resource"));
    };

    let user = state
        .users
        .get_by_email(&body.email)
        .await
        .map_err(store_failure)?
        .ok_or(ApiError::Unauthenticated)?;

    let hash = user
        .password_hash
        .as_deref()
        .ok_or(ApiError::Unauthenticated)?;

    if !auth::verify_password(&body.password, hash).await? {
        return Err(ApiError::Unauthenticated);
    }

    let token = jwt.generate_token(&user.id)?;
    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(user),
    }))
}

pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}

/// Delegated variant: swap the PKCE authorization code for a provider
/// token, then resolve and upsert the identity it belongs to.
pub async fn provider_callback(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CallbackRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Credentials::Delegated { provider } = &state.credentials else {
        return Err(ApiError::NotFound("Resource"));
    };

    let exchange = provider
        .exchange_code(&body.code, &body.code_verifier, &body.redirect_uri)
        .await?;

    let identity = provider.introspect(&exchange.access_token).await?;
    let user = state
        .upsert_delegated_user(identity.email, identity.name)
        .await?;

    Ok(Json(AuthResponse {
        token: exchange.access_token,
        user: UserResponse::from(user),
    }))
}
