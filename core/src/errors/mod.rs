//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Whether the caller should treat this as "not authenticated" and send
    /// the client back to the login page
    pub fn is_authentication_failure(&self) -> bool {
        match self {
            DomainError::Auth(_) => true,
            DomainError::Token(e) => e.is_authentication_failure(),
            _ => false,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
