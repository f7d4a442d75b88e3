use crate::data::repos::traits::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Missing resource, or a resource not owned by the caller. Both
    /// answer 404 so foreign resources stay unconfirmed.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error("Email already registered")]
    DuplicateEmail,
    #[error(transparent)]
    Store(#[from] StoreError),
}
