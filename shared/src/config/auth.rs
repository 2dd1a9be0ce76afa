//! Session token and cookie configuration

use std::env;

/// Default lifetime of an issued session token (5 minutes)
pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 5 * 60;

/// Longest session lifetime the server accepts (one day)
pub const MAX_SESSION_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Shortest secret accepted in production, in bytes
pub const MIN_SECRET_LENGTH: usize = 32;

/// JWT signing configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret for signing session tokens.
    ///
    /// `None` means no secret was configured; outside production the server
    /// then generates an ephemeral key at startup.
    pub secret: Option<String>,

    /// Session token lifetime in seconds
    pub session_ttl_seconds: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: None,
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            ..Default::default()
        }
    }

    /// Whether the session lifetime is within `1..=MAX_SESSION_TTL_SECONDS`
    pub fn has_valid_session_ttl(&self) -> bool {
        (1..=MAX_SESSION_TTL_SECONDS).contains(&self.session_ttl_seconds)
    }

    /// Whether a secret was supplied explicitly
    pub fn has_secret(&self) -> bool {
        self.secret.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Whether the configured secret is long enough for production use
    pub fn has_strong_secret(&self) -> bool {
        self.secret
            .as_deref()
            .is_some_and(|s| s.len() >= MIN_SECRET_LENGTH)
    }
}

/// Session cookie configuration
#[derive(Debug, Clone)]
pub struct CookieConfig {
    /// Cookie name carrying the session token
    pub name: String,

    /// Cookie `Secure` flag (HTTPS only)
    pub secure: bool,

    /// Cookie `HttpOnly` flag
    pub http_only: bool,

    /// Cookie `SameSite` attribute (Strict, Lax or None)
    pub same_site: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: String::from("token"),
            secure: false,
            http_only: true,
            same_site: String::from("Lax"),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session cookie configuration
    pub cookie: CookieConfig,
}

impl AuthConfig {
    /// Overlay `JWT_SECRET`, `JWT_SESSION_TTL`, `SESSION_COOKIE_NAME` and
    /// `SESSION_COOKIE_SECURE` when present
    pub fn apply_env(&mut self) {
        if let Ok(secret) = env::var("JWT_SECRET") {
            if !secret.is_empty() {
                self.jwt.secret = Some(secret);
            }
        }
        if let Some(ttl) = env::var("JWT_SESSION_TTL").ok().and_then(|t| t.parse().ok()) {
            self.jwt.session_ttl_seconds = ttl;
        }
        if let Ok(name) = env::var("SESSION_COOKIE_NAME") {
            if !name.is_empty() {
                self.cookie.name = name;
            }
        }
        if let Some(secure) = env::var("SESSION_COOKIE_SECURE").ok().and_then(|s| s.parse().ok()) {
            self.cookie.secure = secure;
        }
    }
}
