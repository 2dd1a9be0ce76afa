//! Tests for the token service

#[cfg(test)]
mod service_tests;

use chrono::{DateTime, TimeZone, Utc};

use crate::services::token::{SigningKey, TokenService, TokenServiceConfig};

pub(super) const TEST_SECRET: &str = "test-secret-with-at-least-32-bytes!!";

pub(super) fn create_test_service() -> TokenService {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let key = SigningKey::from_secret(TEST_SECRET).expect("test secret is non-empty");
    TokenService::new(key, TokenServiceConfig::default())
}

pub(super) fn issued_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
}
