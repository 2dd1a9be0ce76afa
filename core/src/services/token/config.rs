//! Configuration for the token service

use chrono::Duration;
use ts_shared::config::auth::DEFAULT_SESSION_TTL_SECONDS;
use ts_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Lifetime of an issued session token
    pub session_ttl: Duration,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            session_ttl: Duration::seconds(DEFAULT_SESSION_TTL_SECONDS),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        // Out of range lifetimes saturate; issuing then fails with `SigningFailure`.
        let session_ttl =
            Duration::try_seconds(config.session_ttl_seconds).unwrap_or(Duration::MAX);
        Self { session_ttl }
    }
}
