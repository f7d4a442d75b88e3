#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Password hashing failed")]
    HashingError,
    #[error("Password verification failed")]
    VerificationError,
    #[error("Token creation failed")]
    TokenCreationError,
    #[error("Authentication token has expired")]
    TokenExpired,
    #[error("Invalid token credentials provided")]
    InvalidToken,
    #[error("Identity provider error: {0}")]
    ProviderUnavailable(String),
}
