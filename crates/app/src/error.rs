use thiserror::Error;

use maison_auth::AuthError;
use maison_core::DomainError;
use maison_store::StoreError;

/// Application-level error: everything a storefront action can surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    /// Whether this is the "not found" view state (empty page, not a fault).
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::NotFound))
    }
}
