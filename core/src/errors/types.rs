//! Error types for session token and authentication operations

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Token-related errors
///
/// `InvalidSignature`, `Malformed` and `Expired` all mean "not authenticated"
/// to callers but stay distinct for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token signing failed")]
    SigningFailure,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Token expired")]
    Expired,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },
}

impl TokenError {
    /// True for rejections of a presented token, false for internal failures
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            TokenError::InvalidSignature | TokenError::Malformed | TokenError::Expired
        )
    }
}
