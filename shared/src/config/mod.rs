//! Configuration module
//!
//! - `auth` - Session token signing and cookie configuration
//! - `environment` - Deployment environment detection
//! - `logging` - Log output defaults per environment
//! - `server` - HTTP server bind configuration

pub mod auth;
pub mod environment;
pub mod logging;
pub mod server;

pub use auth::{AuthConfig, CookieConfig, JwtConfig};
pub use environment::Environment;
pub use logging::LoggingConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Defaults for `environment` before any variables are applied
    ///
    /// Production binds every interface and marks the session cookie
    /// `Secure`.
    pub fn for_environment(environment: Environment) -> Self {
        let (server, secure_cookie) = if environment.is_production() {
            (ServerConfig::new("0.0.0.0", 8080), true)
        } else {
            (ServerConfig::default(), false)
        };

        Self {
            environment,
            server,
            auth: AuthConfig {
                jwt: JwtConfig::default(),
                cookie: CookieConfig {
                    secure: secure_cookie,
                    ..Default::default()
                },
            },
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Create configuration for development environment
    pub fn development() -> Self {
        Self::for_environment(Environment::Development)
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self::for_environment(Environment::Production)
    }

    /// Load configuration from environment
    ///
    /// Starts from the per-environment defaults and overlays any
    /// `SERVER_*`, `JWT_*` and `SESSION_COOKIE_*` variables that are set.
    pub fn from_env() -> Self {
        let mut config = Self::for_environment(Environment::from_env());
        config.server.apply_env();
        config.auth.apply_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_defaults_use_secure_cookie() {
        let config = AppConfig::production();
        assert!(config.environment.is_production());
        assert!(config.auth.cookie.secure);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.default_filter, "info");
    }

    #[test]
    fn test_development_defaults() {
        let config = AppConfig::development();
        assert_eq!(config.environment, Environment::Development);
        assert!(!config.auth.cookie.secure);
        assert_eq!(config.auth.jwt.session_ttl_seconds, 300);
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_staging_keeps_insecure_cookie() {
        let config = AppConfig::for_environment(Environment::Staging);
        assert_eq!(config.environment, Environment::Staging);
        assert!(!config.auth.cookie.secure);
        assert_eq!(
            config.logging,
            LoggingConfig::for_environment(Environment::Staging)
        );
    }
}
