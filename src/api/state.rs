use crate::api::config::AuthMode;
use crate::api::errors::ApiError;
use crate::data::models::user::{ROLE_CUSTOMER, User};
use crate::data::repos::traits::UserStore;
use crate::security::jwt::JwtService;
use crate::security::provider::ProviderClient;
use crate::services::address_service::AddressService;
use crate::services::cart_service::CartService;
use crate::services::catalog_service::CatalogService;
use crate::services::discount_service::DiscountService;
use crate::services::order_service::OrderService;
use std::sync::Arc;
use uuid::Uuid;

/// How bearer tokens are issued and resolved.
pub enum Credentials {
    Local { jwt: JwtService },
    Delegated { provider: ProviderClient },
}

/// Everything a request handler needs, wired once at startup (or from
/// in-memory doubles in tests).
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub catalog: CatalogService,
    pub cart: CartService,
    pub addresses: AddressService,
    pub discounts: DiscountService,
    pub orders: OrderService,
    pub credentials: Credentials,
}

impl AppState {
    pub fn auth_mode(&self) -> AuthMode {
        match self.credentials {
            Credentials::Local { .. } => AuthMode::Local,
            Credentials::Delegated { .. } => AuthMode::Delegated,
        }
    }

    /// Access gate: bearer token to caller identity. The delegated
    /// variant asks the provider on every call and upserts the
    /// resolved identity so role policy is uniform across variants.
    pub async fn resolve_bearer(&self, token: &str) -> Result<User, ApiError> {
        match &self.credentials {
            Credentials::Local { jwt } => {
                let claims = jwt.decode_token(token)?;
                self.users
                    .get_by_id(&claims.sub)
                    .await
                    .map_err(|e| {
                        tracing::error!("User lookup failed: {e}");
                        ApiError::Internal
                    })?
                    .ok_or(ApiError::Unauthenticated)
            }
            Credentials::Delegated { provider } => {
                let identity = provider.introspect(token).await?;
                self.upsert_delegated_user(identity.email, identity.name).await
            }
        }
    }

    pub async fn upsert_delegated_user(
        &self,
        email: String,
        name: String,
    ) -> Result<User, ApiError> {
        let existing = self.users.get_by_email(&email).await.map_err(|e| {
            tracing::error!("User lookup failed: {e}");
            ApiError::Internal
        })?;

        if let Some(user) = existing {
            return Ok(user);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email,
            password_hash: None,
            name,
            role: ROLE_CUSTOMER.to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        };

        self.users.insert(user.clone()).await.map_err(|e| {
            tracing::error!("User insert failed: {e}");
            ApiError::Internal
        })?;

        Ok(user)
    }
}
