//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken entity persistence operations
///
/// This trait defines the contract for managing refresh tokens in the
/// database. Rows are keyed by the opaque token value; expiry is enforced
/// by the validity check at refresh time, so expired rows may linger until
/// [`delete_expired`](TokenRepository::delete_expired) runs.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a refresh token
    ///
    /// # Arguments
    /// * `token` - The RefreshToken entity to persist
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved token
    /// * `Err(DomainError)` - Save failed (e.g., duplicate token value)
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its opaque value
    ///
    /// # Arguments
    /// * `token` - The token value presented by the client
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Token found
    /// * `Ok(None)` - No token with the given value
    /// * `Err(DomainError)` - Database error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use hcm_core::repositories::TokenRepository;
    /// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_by_value("opaque-token-value").await? {
    ///     Some(token) => println!("token belongs to {}", token.person_id),
    ///     None => println!("token not found"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_value(&self, token: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Delete a refresh token by its value. Idempotent: deleting an absent
    /// value is not an error.
    ///
    /// # Arguments
    /// * `token` - The token value to delete
    ///
    /// # Returns
    /// * `Ok(true)` - A row was deleted
    /// * `Ok(false)` - No row with the given value
    /// * `Err(DomainError)` - Deletion failed
    async fn delete(&self, token: &str) -> Result<bool, DomainError>;

    /// Delete all refresh tokens for a person (logout everywhere)
    ///
    /// # Arguments
    /// * `person_id` - The UUID of the person
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of tokens deleted
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_all_for_person(&self, person_id: Uuid) -> Result<u64, DomainError>;

    /// Delete refresh tokens that expired before `now`
    ///
    /// Intended for periodic cleanup; correctness never depends on it
    /// having run.
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of expired tokens deleted
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError>;

    /// Generate and persist a fresh refresh token for a person
    ///
    /// The token value comes from a cryptographically secure random source
    /// and the expiry is set to now plus `lifetime_hours`.
    ///
    /// # Arguments
    /// * `person_id` - The UUID of the owning person
    /// * `lifetime_hours` - Token lifetime in hours
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The persisted token, including its value
    /// * `Err(DomainError)` - Save failed
    async fn create(
        &self,
        person_id: Uuid,
        lifetime_hours: i64,
    ) -> Result<RefreshToken, DomainError> {
        self.save(RefreshToken::new(person_id, lifetime_hours)).await
    }
}
