//! Credential verification seam

use crate::errors::AuthError;

/// Checks a username/password pair before a session token is issued
pub trait CredentialVerifier: Send + Sync {
    /// Returns `Ok(())` if the credentials are acceptable
    fn verify(&self, username: &str, password: &str) -> Result<(), AuthError>;
}

/// Accepts every login with a non-empty username, whatever the password.
///
/// This is demo behavior only. Deployments must supply a verifier backed by
/// an identity store.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnyCredentials;

impl CredentialVerifier for AcceptAnyCredentials {
    fn verify(&self, username: &str, _password: &str) -> Result<(), AuthError> {
        if username.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(())
    }
}

impl<V: CredentialVerifier + ?Sized> CredentialVerifier for std::sync::Arc<V> {
    fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        (**self).verify(username, password)
    }
}
