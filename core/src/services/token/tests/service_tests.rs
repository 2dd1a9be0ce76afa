//! Issuance, verification and expiry tests for the token service

use std::sync::Arc;

use chrono::Duration;
use ts_shared::config::JwtConfig;

use super::{create_test_service, issued_instant, TEST_SECRET};
use crate::errors::TokenError;
use crate::services::token::{SigningKey, TokenService, TokenServiceConfig};

#[test]
fn test_verify_returns_issued_username() {
    let service = create_test_service();

    for username in ["alice", "bob", "Zoë Ünicode", "a.b.c", "name with spaces", "x"] {
        let issued = service.issue(username).unwrap();
        let claims = service.verify(&issued.token).unwrap();
        assert_eq!(claims.username, username);
    }
}

#[test]
fn test_issue_sets_five_minute_expiry() {
    let service = create_test_service();
    let now = issued_instant();

    let issued = service.issue_at("alice", now).unwrap();

    assert_eq!(issued.expires_at, now + Duration::minutes(5));
    let claims = service.verify_at(&issued.token, now).unwrap();
    assert_eq!(claims.expires_at(), issued.expires_at);
}

#[test]
fn test_token_valid_just_before_expiry() {
    let service = create_test_service();
    let now = issued_instant();
    let issued = service.issue_at("alice", now).unwrap();

    let at = now + Duration::minutes(4) + Duration::seconds(59);
    let claims = service.verify_at(&issued.token, at).unwrap();
    assert_eq!(claims.username, "alice");
}

#[test]
fn test_token_expired_just_after_expiry() {
    let service = create_test_service();
    let now = issued_instant();
    let issued = service.issue_at("alice", now).unwrap();

    let at = now + Duration::minutes(5) + Duration::seconds(1);
    assert_eq!(service.verify_at(&issued.token, at), Err(TokenError::Expired));
}

#[test]
fn test_token_expired_exactly_at_expiry() {
    let service = create_test_service();
    let now = issued_instant();
    let issued = service.issue_at("alice", now).unwrap();

    assert_eq!(
        service.verify_at(&issued.token, issued.expires_at),
        Err(TokenError::Expired)
    );
}

#[test]
fn test_sub_second_issue_instant_truncates_expiry() {
    let service = create_test_service();
    let now = issued_instant() + Duration::milliseconds(999);
    let issued = service.issue_at("alice", now).unwrap();

    assert_eq!(issued.expires_at, issued_instant() + Duration::minutes(5));

    let before = now + Duration::minutes(4) + Duration::seconds(59);
    assert!(service.verify_at(&issued.token, before).is_ok());

    // Expiry is truncated to the second the token was issued in.
    let at_expiry = issued_instant() + Duration::minutes(5);
    assert_eq!(service.verify_at(&issued.token, at_expiry), Err(TokenError::Expired));

    let after = now + Duration::minutes(5) + Duration::seconds(1);
    assert_eq!(service.verify_at(&issued.token, after), Err(TokenError::Expired));
}

#[test]
fn test_login_then_home_scenario() {
    let service = create_test_service();
    let now = issued_instant();

    let issued = service.issue_at("alice", now).unwrap();
    assert_eq!(issued.expires_at, now + Duration::minutes(5));

    let claims = service
        .verify_at(&issued.token, now + Duration::minutes(1))
        .unwrap();
    assert_eq!(claims.username, "alice");

    assert_eq!(
        service.verify_at(&issued.token, now + Duration::minutes(6)),
        Err(TokenError::Expired)
    );
}

#[test]
fn test_verify_is_deterministic() {
    let service = create_test_service();
    let now = issued_instant();
    let issued = service.issue_at("alice", now).unwrap();

    let at = now + Duration::minutes(2);
    assert_eq!(
        service.verify_at(&issued.token, at),
        service.verify_at(&issued.token, at)
    );
}

#[test]
fn test_different_usernames_same_instant_differ() {
    let service = create_test_service();
    let now = issued_instant();

    let alice = service.issue_at("alice", now).unwrap();
    let bob = service.issue_at("bob", now).unwrap();

    assert_ne!(alice.token, bob.token);
    assert_eq!(alice.expires_at, bob.expires_at);
}

#[test]
fn test_empty_username_is_rejected() {
    let service = create_test_service();

    let result = service.issue("");
    assert_eq!(
        result,
        Err(TokenError::MissingClaim {
            claim: "username".to_string()
        })
    );
}

#[test]
fn test_token_is_cookie_safe() {
    let service = create_test_service();
    let issued = service.issue("alice; path=/").unwrap();

    assert_eq!(issued.token.split('.').count(), 3);
    assert!(issued
        .token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')));
}

#[test]
fn test_configured_ttl_is_applied() {
    let key = SigningKey::from_secret("another-secret").unwrap();
    let service = TokenService::new(
        key,
        TokenServiceConfig {
            session_ttl: Duration::seconds(30),
        },
    );
    let now = issued_instant();

    let issued = service.issue_at("carol", now).unwrap();

    assert_eq!(service.session_ttl(), Duration::seconds(30));
    assert_eq!(issued.expires_at, now + Duration::seconds(30));
    assert!(service.verify_at(&issued.token, now + Duration::seconds(29)).is_ok());
    assert_eq!(
        service.verify_at(&issued.token, now + Duration::seconds(30)),
        Err(TokenError::Expired)
    );
}

#[test]
fn test_out_of_range_ttl_fails_to_sign() {
    for session_ttl_seconds in [100_000_000_000_000, i64::MAX] {
        let config = JwtConfig {
            session_ttl_seconds,
            ..JwtConfig::new(TEST_SECRET)
        };
        let service = TokenService::new(
            SigningKey::from_secret(TEST_SECRET).unwrap(),
            TokenServiceConfig::from(&config),
        );

        assert_eq!(service.issue("alice"), Err(TokenError::SigningFailure));
    }
}

#[test]
fn test_generated_keys_are_independent() {
    let first = TokenService::new(SigningKey::generate(), TokenServiceConfig::default());
    let second = TokenService::new(SigningKey::generate(), TokenServiceConfig::default());

    let issued = first.issue("alice").unwrap();

    assert!(first.verify(&issued.token).is_ok());
    assert_eq!(
        second.verify(&issued.token),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_service_is_shared_across_threads() {
    let service = Arc::new(create_test_service());

    std::thread::scope(|scope| {
        for i in 0..8 {
            let service = Arc::clone(&service);
            scope.spawn(move || {
                let username = format!("user-{}", i);
                let issued = service.issue(&username).unwrap();
                let claims = service.verify(&issued.token).unwrap();
                assert_eq!(claims.username, username);
            });
        }
    });
}
