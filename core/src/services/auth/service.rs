//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::session::{IssuedToken, SessionClaims};
use crate::errors::{DomainError, DomainResult};
use crate::services::token::TokenService;

use super::credentials::CredentialVerifier;

/// Authentication service for the login flow
pub struct AuthService<V: CredentialVerifier> {
    /// Credential check run before every issuance
    verifier: V,
    /// Token service for signing and verifying session tokens
    token_service: Arc<TokenService>,
}

impl<V: CredentialVerifier> AuthService<V> {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `verifier` - Credential check for login attempts
    /// * `token_service` - Shared token service
    pub fn new(verifier: V, token_service: Arc<TokenService>) -> Self {
        Self {
            verifier,
            token_service,
        }
    }

    /// Token service backing this auth service
    pub fn token_service(&self) -> &Arc<TokenService> {
        &self.token_service
    }

    /// Checks credentials and issues a session token
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - Signed token and its expiry
    /// * `Err(DomainError::Auth)` - Credentials were rejected
    /// * `Err(DomainError::Token)` - Issuance failed
    pub fn login(&self, username: &str, password: &str) -> DomainResult<IssuedToken> {
        if let Err(e) = self.verifier.verify(username, password) {
            tracing::info!(username, "login rejected");
            return Err(DomainError::Auth(e));
        }

        let issued = self.token_service.issue(username)?;
        tracing::info!(username, expires_at = %issued.expires_at, "login succeeded");
        Ok(issued)
    }

    /// Verifies a presented session token
    pub fn authenticate(&self, token: &str) -> DomainResult<SessionClaims> {
        Ok(self.token_service.verify(token)?)
    }
}
