use crate::security::errors::AuthError;
use serde::{Deserialize, Serialize};

/// Signed bearer tokens for the local credential variant. Constructed
/// once from config and shared through the app state.
#[derive(Clone)]
pub struct JwtService {
    secret: String,
    expiration_days: i64,
}

impl JwtService {
    pub fn new(secret: impl Into<String>, expiration_days: i64) -> Self {
        JwtService {
            secret: secret.into(),
            expiration_days,
        }
    }

    pub fn generate_token(&self, user_id: &str) -> Result<String, AuthError> {
        let now = chrono::Utc::now().timestamp() as usize;

        let claims = AccessClaims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + (self.expiration_days * 24 * 60 * 60) as usize,
        };

        jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|_| AuthError::TokenCreationError)
    }

    /// Expired and malformed tokens are kept distinct for diagnostics;
    /// the API maps both to 401.
    pub fn decode_token(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let validation = jsonwebtoken::Validation::default();

        let token_data = jsonwebtoken::decode::<AccessClaims>(
            token,
            &jsonwebtoken::DecodingKey::from_secret(self.secret.as_ref()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?;

        Ok(token_data.claims)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user id)
    pub sub: String,
    /// Issued at (as UTC timestamp)
    pub iat: usize,
    /// Expiration time (as UTC timestamp)
    pub exp: usize,
}
