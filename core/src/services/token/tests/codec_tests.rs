//! Unit tests for the access token codec

use chrono::{Duration, Utc};

use crate::domain::entities::person::{Person, Role};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{AccessTokenCodec, TokenServiceConfig};

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        secret: "unit-test-secret-unit-test-secret".to_string(),
        issuer: "hcm".to_string(),
        audience: "hcm-api".to_string(),
        access_token_minutes: 5,
        refresh_token_hours: 1,
    }
}

fn sample_person() -> Person {
    Person::new("John", "Doe", "john@example.com", "IT", Role::Employee)
}

fn assert_unauthenticated(result: Result<crate::domain::entities::token::Claims, DomainError>) {
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::Unauthenticated))
    ));
}

/// Replaces one character of `token` at `index` so the byte differs but the
/// string stays well-formed base64url.
fn flip_char(token: &str, index: usize) -> String {
    let mut chars: Vec<char> = token.chars().collect();
    chars[index] = if chars[index] == 'A' { 'B' } else { 'A' };
    chars.into_iter().collect()
}

#[test]
fn test_round_trip() {
    let codec = AccessTokenCodec::new(&test_config());
    let person = sample_person();
    let issued_at = Utc::now();

    let token = codec.encode(&person, issued_at).unwrap();
    let claims = codec.decode(&token, issued_at).unwrap();

    assert_eq!(claims.person_id().unwrap(), person.id);
    assert_eq!(claims.role, Role::Employee);
    assert_eq!(claims.department, "IT");
    assert_eq!(claims.iss, "hcm");
    assert_eq!(claims.aud, "hcm-api");
    assert_eq!(claims.exp, claims.iat + 5 * 60);
}

#[test]
fn test_decode_succeeds_until_just_before_expiry() {
    let codec = AccessTokenCodec::new(&test_config());
    let issued_at = Utc::now();
    let token = codec.encode(&sample_person(), issued_at).unwrap();

    let almost_expired = issued_at + Duration::minutes(5) - Duration::seconds(1);
    assert!(codec.decode(&token, almost_expired).is_ok());
}

#[test]
fn test_decode_fails_at_and_after_expiry() {
    let codec = AccessTokenCodec::new(&test_config());
    let issued_at = Utc::now();
    let token = codec.encode(&sample_person(), issued_at).unwrap();

    assert_unauthenticated(codec.decode(&token, issued_at + Duration::minutes(5)));
    assert_unauthenticated(codec.decode(&token, issued_at + Duration::hours(2)));
}

#[test]
fn test_tampered_payload_rejected() {
    let codec = AccessTokenCodec::new(&test_config());
    let now = Utc::now();
    let token = codec.encode(&sample_person(), now).unwrap();

    // Second dot-separated segment is the claims payload
    let payload_start = token.find('.').unwrap() + 1;
    let tampered = flip_char(&token, payload_start + 3);

    assert_ne!(token, tampered);
    assert_unauthenticated(codec.decode(&tampered, now));
}

#[test]
fn test_tampered_signature_rejected() {
    let codec = AccessTokenCodec::new(&test_config());
    let now = Utc::now();
    let token = codec.encode(&sample_person(), now).unwrap();

    let signature_start = token.rfind('.').unwrap() + 1;
    let tampered = flip_char(&token, signature_start + 3);

    assert_ne!(token, tampered);
    assert_unauthenticated(codec.decode(&tampered, now));
}

#[test]
fn test_token_signed_with_other_secret_rejected() {
    let codec = AccessTokenCodec::new(&test_config());
    let mut other_config = test_config();
    other_config.secret = "another-secret-entirely-another-one".to_string();
    let other_codec = AccessTokenCodec::new(&other_config);

    let now = Utc::now();
    let token = other_codec.encode(&sample_person(), now).unwrap();

    assert_unauthenticated(codec.decode(&token, now));
}

#[test]
fn test_malformed_token_rejected() {
    let codec = AccessTokenCodec::new(&test_config());
    let now = Utc::now();

    assert_unauthenticated(codec.decode("", now));
    assert_unauthenticated(codec.decode("not-a-token", now));
    assert_unauthenticated(codec.decode("a.b.c", now));
}
