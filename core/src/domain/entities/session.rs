//! Session claim entities for signed session tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for the session token payload
///
/// Only the expiry bound is carried; the issue time is not tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Authenticated principal
    pub username: String,

    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
}

impl SessionClaims {
    /// Creates claims for `username` expiring `ttl` after `now`
    ///
    /// The expiry is truncated to whole seconds, matching what ends up in the
    /// encoded token. Returns `None` when `now + ttl` is not a representable
    /// instant.
    pub fn new(username: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Option<Self> {
        let expires_at = now.checked_add_signed(ttl)?;
        Some(Self {
            username: username.into(),
            exp: expires_at.timestamp(),
        })
    }

    /// Absolute expiry as a `DateTime`
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Checks if the claims have expired at `now`
    ///
    /// Expiry is exclusive: a claim is no longer valid at `exp` itself.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// A freshly signed session token together with its absolute expiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Opaque signed token string (URL and cookie safe)
    pub token: String,

    /// When the token stops verifying
    pub expires_at: DateTime<Utc>,
}
