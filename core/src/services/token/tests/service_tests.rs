//! Unit tests for the token service

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::domain::entities::token::Claims;
use crate::errors::{AuthError, ConfigError, DomainError, TokenError};
use crate::repositories::{MockUserDirectory, UserDirectory};
use crate::services::token::{resolve_bearer, TokenService, TokenServiceConfig};

fn authorities(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn create_test_service() -> TokenService<MockUserDirectory> {
    TokenService::new(MockUserDirectory::new(), TokenServiceConfig::default()).unwrap()
}

fn create_test_service_with_directory() -> (TokenService<MockUserDirectory>, MockUserDirectory) {
    let directory = MockUserDirectory::new();
    let service =
        TokenService::new(directory.clone(), TokenServiceConfig::default()).unwrap();
    (service, directory)
}

/// Directory stand-in whose lookups always fail
struct BrokenDirectory;

#[async_trait]
impl UserDirectory for BrokenDirectory {
    async fn load_authorities_by_subject(
        &self,
        _subject: &str,
    ) -> Result<Option<HashSet<String>>, DomainError> {
        Err(DomainError::Internal {
            message: "directory unavailable".to_string(),
        })
    }
}

/// Flips a single character of the token at the given position
fn flip_char(token: &str, index: usize) -> String {
    let mut chars: Vec<char> = token.chars().collect();
    chars[index] = if chars[index] == 'A' { 'B' } else { 'A' };
    chars.into_iter().collect()
}

#[test]
fn test_empty_secret_is_rejected_at_construction() {
    let config = TokenServiceConfig {
        jwt_secret: String::new(),
        ..Default::default()
    };
    let result = TokenService::new(MockUserDirectory::new(), config);

    assert!(matches!(
        result.err().unwrap(),
        DomainError::Config(ConfigError::MissingJwtSecret)
    ));
}

#[test]
fn test_issue_and_verify_round_trip() {
    let service = create_test_service();
    let granted = authorities(&["ROLE_USER", "ROLE_ADMIN"]);

    let token = service.issue_token("alice", &granted).unwrap();
    let claims = service.verify_token(&token).unwrap();

    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.authorities(), granted);
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_issue_with_empty_authority_set() {
    let service = create_test_service();

    let token = service.issue_token("alice", &HashSet::new()).unwrap();
    let claims = service.verify_token(&token).unwrap();

    assert!(claims.authorities().is_empty());
}

#[test]
fn test_issue_rejects_empty_subject() {
    let service = create_test_service();
    let result = service.issue_token("", &HashSet::new());

    assert!(matches!(
        result.err().unwrap(),
        DomainError::Validation { .. }
    ));
}

#[test]
fn test_verify_rejects_garbage() {
    let service = create_test_service();

    for input in ["", "not-a-token", "a.b", "a.b.c.d"] {
        let result = service.verify_token(input);
        assert!(matches!(
            result.err().unwrap(),
            DomainError::Token(TokenError::InvalidOrExpired)
        ));
    }
}

#[test]
fn test_verify_rejects_wrong_secret() {
    let service = create_test_service();
    let other = TokenService::new(
        MockUserDirectory::new(),
        TokenServiceConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..Default::default()
        },
    )
    .unwrap();

    let token = service.issue_token("alice", &HashSet::new()).unwrap();
    let result = other.verify_token(&token);

    assert!(matches!(
        result.err().unwrap(),
        DomainError::Token(TokenError::InvalidOrExpired)
    ));
}

#[test]
fn test_verify_rejects_expired_token() {
    let service = create_test_service();

    // issued two hours ago with a one-hour window
    let issued = Utc::now() - Duration::hours(2);
    let token = service
        .issue_token_at("alice", &HashSet::new(), issued)
        .unwrap();

    let result = service.verify_token(&token);
    assert!(matches!(
        result.err().unwrap(),
        DomainError::Token(TokenError::InvalidOrExpired)
    ));
}

#[test]
fn test_verify_accepts_token_within_window() {
    let service = create_test_service();

    let issued = Utc::now() - Duration::minutes(30);
    let token = service
        .issue_token_at("alice", &HashSet::new(), issued)
        .unwrap();

    assert!(service.verify_token(&token).is_ok());
}

#[test]
fn test_expiry_boundary_is_exclusive() {
    let service = create_test_service();

    // exp pinned to the current second: now == exp must already read as
    // expired, and the clock can only move further past it
    let mut claims = Claims::new("alice", &HashSet::new(), 3_600_000);
    claims.exp = Utc::now().timestamp();
    let token = service.encode_jwt(&claims).unwrap();

    let result = service.verify_token(&token);
    assert!(matches!(
        result.err().unwrap(),
        DomainError::Token(TokenError::InvalidOrExpired)
    ));
}

#[test]
fn test_any_single_character_mutation_invalidates() {
    let service = create_test_service();
    let token = service
        .issue_token("alice", &authorities(&["ROLE_USER"]))
        .unwrap();

    // one flip in each of the three segments
    let dots: Vec<usize> = token
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .map(|(i, _)| i)
        .collect();
    assert_eq!(dots.len(), 2);

    let probes = [dots[0] / 2, dots[0] + 1 + (dots[1] - dots[0]) / 2, (dots[1] + token.len()) / 2];
    for index in probes {
        let tampered = flip_char(&token, index);
        assert_ne!(tampered, token);
        assert!(
            service.verify_token(&tampered).is_err(),
            "mutation at {} was accepted",
            index
        );
    }
}

#[test]
fn test_distinct_artifacts_for_distinct_instants() {
    let service = create_test_service();
    let granted = authorities(&["ROLE_USER"]);

    let first = service
        .issue_token_at("alice", &granted, Utc::now() - Duration::seconds(5))
        .unwrap();
    let second = service.issue_token("alice", &granted).unwrap();

    assert_ne!(first, second);
    assert!(service.verify_token(&first).is_ok());
    assert!(service.verify_token(&second).is_ok());
}

#[tokio::test]
async fn test_authenticate_uses_live_authorities() {
    let (service, directory) = create_test_service_with_directory();

    // granted set has moved on since the token was issued
    let token = service
        .issue_token("alice", &authorities(&["ROLE_USER"]))
        .unwrap();
    directory
        .insert("alice", authorities(&["ROLE_USER", "ROLE_ADMIN"]))
        .await;

    let principal = service.authenticate(&token).await.unwrap();

    assert_eq!(principal.subject, "alice");
    assert_eq!(
        principal.authorities,
        authorities(&["ROLE_USER", "ROLE_ADMIN"])
    );
    assert!(principal.has_authority("ROLE_ADMIN"));
}

#[tokio::test]
async fn test_authenticate_missing_subject() {
    let (service, directory) = create_test_service_with_directory();

    let token = service
        .issue_token("alice", &authorities(&["ROLE_USER"]))
        .unwrap();
    directory.insert("alice", authorities(&["ROLE_USER"])).await;
    directory.remove("alice").await;

    let result = service.authenticate(&token).await;
    assert!(matches!(
        result.err().unwrap(),
        DomainError::Auth(AuthError::SubjectNotFound)
    ));
}

#[tokio::test]
async fn test_authenticate_subject_with_no_authorities() {
    let (service, directory) = create_test_service_with_directory();

    let token = service.issue_token("bob", &HashSet::new()).unwrap();
    directory.insert("bob", HashSet::new()).await;

    let principal = service.authenticate(&token).await.unwrap();
    assert!(principal.authorities.is_empty());
}

#[tokio::test]
async fn test_authenticate_rejects_invalid_token_before_lookup() {
    let (service, directory) = create_test_service_with_directory();
    directory.insert("alice", authorities(&["ROLE_USER"])).await;

    let result = service.authenticate("not-a-token").await;
    assert!(matches!(
        result.err().unwrap(),
        DomainError::Token(TokenError::InvalidOrExpired)
    ));
}

#[tokio::test]
async fn test_authenticate_propagates_directory_failure() {
    let service =
        TokenService::new(BrokenDirectory, TokenServiceConfig::default()).unwrap();
    let issuer = create_test_service();

    let token = issuer.issue_token("alice", &HashSet::new()).unwrap();
    let result = service.authenticate(&token).await;

    assert!(matches!(
        result.err().unwrap(),
        DomainError::Internal { .. }
    ));
}

#[test]
fn test_resolve_bearer() {
    assert_eq!(resolve_bearer(Some("Bearer abc123")), Some("abc123"));
    assert_eq!(resolve_bearer(Some("abc123")), None);
    assert_eq!(resolve_bearer(Some("bearer abc123")), None);
    assert_eq!(resolve_bearer(None), None);
}
