//! Startup configuration checks and signing key construction

use log::warn;
use thiserror::Error;
use ts_core::errors::DomainError;
use ts_core::services::token::SigningKey;
use ts_shared::config::auth::{MAX_SESSION_TTL_SECONDS, MIN_SECRET_LENGTH};
use ts_shared::AppConfig;

/// Configuration errors that prevent the server from starting
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set in {environment}")]
    MissingSecret { environment: String },

    #[error("JWT_SECRET must be at least {min} bytes in production")]
    WeakSecret { min: usize },

    #[error("Session TTL must be between 1 second and one day, got {0} seconds")]
    InvalidTtl(i64),

    #[error("Invalid signing key: {0}")]
    SigningKey(#[from] DomainError),
}

/// Validates the loaded configuration
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if !config.auth.jwt.has_valid_session_ttl() {
        return Err(ConfigError::InvalidTtl(config.auth.jwt.session_ttl_seconds));
    }

    if config.environment.is_production() {
        if !config.auth.jwt.has_secret() {
            return Err(ConfigError::MissingSecret {
                environment: config.environment.to_string(),
            });
        }
        if !config.auth.jwt.has_strong_secret() {
            return Err(ConfigError::WeakSecret {
                min: MIN_SECRET_LENGTH,
            });
        }
    }

    Ok(())
}

/// Builds the process signing key from configuration
///
/// Without a configured secret (only allowed outside production) a random
/// key is generated, so sessions do not survive a restart.
pub fn signing_key(config: &AppConfig) -> Result<SigningKey, ConfigError> {
    match config.auth.jwt.secret.as_deref() {
        Some(secret) if !secret.is_empty() => Ok(SigningKey::from_secret(secret)?),
        _ if config.environment.is_production() => Err(ConfigError::MissingSecret {
            environment: config.environment.to_string(),
        }),
        _ => {
            warn!("JWT_SECRET is not set; using an ephemeral signing key");
            Ok(SigningKey::generate())
        }
    }
}
