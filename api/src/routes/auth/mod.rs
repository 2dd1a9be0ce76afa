//! Authentication route handlers
//!
//! - Login page and login form submission
//! - Logout (cookie removal)
//! - Session cookie construction

pub mod cookie;
pub mod login;
pub mod logout;

use std::sync::Arc;

use ts_core::services::auth::{AuthService, CredentialVerifier};
use ts_shared::config::CookieConfig;

/// Application state shared by all workers
pub struct AppState {
    /// Login and session verification
    pub auth_service: AuthService<Arc<dyn CredentialVerifier>>,
    /// How the session token is carried to the client
    pub cookie: CookieConfig,
}

impl AppState {
    pub fn new(auth_service: AuthService<Arc<dyn CredentialVerifier>>, cookie: CookieConfig) -> Self {
        Self {
            auth_service,
            cookie,
        }
    }
}
