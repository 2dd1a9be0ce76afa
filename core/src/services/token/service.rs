//! Main token service implementation

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use tracing::debug;

use crate::domain::entities::session::{IssuedToken, SessionClaims};
use crate::errors::TokenError;

use super::config::TokenServiceConfig;
use super::signing_key::SigningKey;

const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Service issuing and verifying signed session tokens
///
/// Holds no per-call state, so a single instance can be shared across
/// request handlers without locking.
pub struct TokenService {
    key: SigningKey,
    config: TokenServiceConfig,
    header: Header,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `key` - Signing key used for both issuance and verification
    /// * `config` - Token service configuration
    pub fn new(key: SigningKey, config: TokenServiceConfig) -> Self {
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        // Expiry is checked against the caller's clock in `verify_at`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            key,
            config,
            header: Header::new(SIGNING_ALGORITHM),
            validation,
        }
    }

    /// Lifetime given to newly issued tokens
    pub fn session_ttl(&self) -> chrono::Duration {
        self.config.session_ttl
    }

    /// Issues a session token for `username` expiring one TTL from now
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The signed token and its absolute expiry
    /// * `Err(TokenError::MissingClaim)` - `username` is empty
    /// * `Err(TokenError::SigningFailure)` - The token could not be signed
    pub fn issue(&self, username: &str) -> Result<IssuedToken, TokenError> {
        self.issue_at(username, Utc::now())
    }

    /// Issues a session token as if the current time were `now`
    pub fn issue_at(&self, username: &str, now: DateTime<Utc>) -> Result<IssuedToken, TokenError> {
        if username.is_empty() {
            return Err(TokenError::MissingClaim {
                claim: "username".to_string(),
            });
        }

        let claims = SessionClaims::new(username, now, self.config.session_ttl).ok_or_else(|| {
            tracing::error!(
                ttl_seconds = self.config.session_ttl.num_seconds(),
                "session expiry is out of range"
            );
            TokenError::SigningFailure
        })?;
        let token = encode(&self.header, &claims, self.key.encoding_key()).map_err(|e| {
            tracing::error!(error = %e, "failed to sign session token");
            TokenError::SigningFailure
        })?;

        debug!(username, exp = claims.exp, "issued session token");
        Ok(IssuedToken {
            token,
            expires_at: claims.expires_at(),
        })
    }

    /// Verifies a session token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(SessionClaims)` - The token is authentic and unexpired
    /// * `Err(TokenError::InvalidSignature)` - Tampered or foreign token
    /// * `Err(TokenError::Malformed)` - Not a structurally valid session token
    /// * `Err(TokenError::Expired)` - Authentic but past its expiry
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a session token against the clock reading `now`
    ///
    /// Deterministic for a fixed `(token, now, key)`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, TokenError> {
        let claims = decode::<SessionClaims>(token, self.key.decoding_key(), &self.validation)
            .map_err(|e| classify(e.kind()))?
            .claims;

        if claims.is_expired_at(now) {
            debug!(username = %claims.username, exp = claims.exp, "session token expired");
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

fn classify(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => {
            debug!(?kind, "rejected malformed session token");
            TokenError::Malformed
        }
    }
}
