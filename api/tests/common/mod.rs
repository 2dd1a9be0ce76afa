//! Shared setup for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use ts_api::routes::auth::AppState;
use ts_core::services::auth::{AcceptAnyCredentials, AuthService, CredentialVerifier};
use ts_core::services::token::{SigningKey, TokenService, TokenServiceConfig};
use ts_shared::config::CookieConfig;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789";

pub fn token_service() -> Arc<TokenService> {
    let key = SigningKey::from_secret(TEST_SECRET).expect("test secret is non-empty");
    Arc::new(TokenService::new(key, TokenServiceConfig::default()))
}

pub fn app_state_with(verifier: Arc<dyn CredentialVerifier>) -> web::Data<AppState> {
    web::Data::new(AppState::new(
        AuthService::new(verifier, token_service()),
        CookieConfig::default(),
    ))
}

pub fn app_state() -> web::Data<AppState> {
    app_state_with(Arc::new(AcceptAnyCredentials))
}
