//! Session cookie construction

use actix_web::cookie::{time::OffsetDateTime, Cookie, SameSite};
use ts_core::domain::entities::session::IssuedToken;
use ts_core::errors::DomainError;
use ts_shared::config::CookieConfig;

fn same_site(config: &CookieConfig) -> SameSite {
    match config.same_site.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}

/// Cookie carrying a freshly issued session token, expiring with it
pub fn session_cookie(
    config: &CookieConfig,
    issued: &IssuedToken,
) -> Result<Cookie<'static>, DomainError> {
    let expires = OffsetDateTime::from_unix_timestamp(issued.expires_at.timestamp()).map_err(|e| {
        DomainError::Internal {
            message: format!("Session expiry out of range: {}", e),
        }
    })?;

    Ok(Cookie::build(config.name.clone(), issued.token.clone())
        .path("/")
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(same_site(config))
        .expires(expires)
        .finish())
}

/// Cookie instructing the client to drop its session token
pub fn removal_cookie(config: &CookieConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build(config.name.clone(), "")
        .path("/")
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(same_site(config))
        .finish();
    cookie.make_removal();
    cookie
}
