//! Unit tests for the mock token repository

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::repositories::token::mock::MockTokenRepository;
use crate::repositories::TokenRepository;

#[tokio::test]
async fn test_create_and_find_by_value() {
    let repo = MockTokenRepository::new();
    let person_id = Uuid::new_v4();

    let created = repo.create(person_id, 1).await.unwrap();
    let found = repo.find_by_value(&created.token).await.unwrap();

    let found = found.expect("created token should be findable");
    assert_eq!(found.person_id, person_id);
    assert_eq!(found.token, created.token);
}

#[tokio::test]
async fn test_find_unknown_value_returns_none() {
    let repo = MockTokenRepository::new();

    let found = repo.find_by_value("never-issued").await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_save_duplicate_value_fails() {
    let repo = MockTokenRepository::new();
    let token = RefreshToken::new(Uuid::new_v4(), 1);

    repo.save(token.clone()).await.unwrap();
    let result = repo.save(token).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let repo = MockTokenRepository::new();
    let created = repo.create(Uuid::new_v4(), 1).await.unwrap();

    assert!(repo.delete(&created.token).await.unwrap());
    // Second delete of the same value is a no-op, not an error
    assert!(!repo.delete(&created.token).await.unwrap());
}

#[tokio::test]
async fn test_delete_all_for_person_spares_others() {
    let repo = MockTokenRepository::new();
    let person_a = Uuid::new_v4();
    let person_b = Uuid::new_v4();

    repo.create(person_a, 1).await.unwrap();
    repo.create(person_a, 1).await.unwrap();
    let kept = repo.create(person_b, 1).await.unwrap();

    let deleted = repo.delete_all_for_person(person_a).await.unwrap();

    assert_eq!(deleted, 2);
    assert!(repo.find_by_value(&kept.token).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_expired_spares_live_tokens() {
    let repo = MockTokenRepository::new();
    let now = Utc::now();

    let mut expired = RefreshToken::new(Uuid::new_v4(), 1);
    expired.expires_at = now - Duration::hours(1);
    repo.save(expired.clone()).await.unwrap();
    let live = repo.create(Uuid::new_v4(), 1).await.unwrap();

    let deleted = repo.delete_expired(now).await.unwrap();

    assert_eq!(deleted, 1);
    assert!(repo.find_by_value(&expired.token).await.unwrap().is_none());
    assert!(repo.find_by_value(&live.token).await.unwrap().is_some());
}
