//! Token issuance and rotation

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::person::Person;
use crate::domain::entities::token::{RefreshToken, TokenPair};
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::codec::AccessTokenCodec;
use super::config::TokenServiceConfig;
use super::validator::is_refresh_token_valid;

/// Issues access/refresh token pairs and rotates refresh tokens.
///
/// Holds no state of its own beyond the injected repository handle and
/// codec, so it is safe to share across concurrently handled requests.
/// All coordination happens through the backing store.
pub struct TokenIssuer<R: TokenRepository> {
    repository: R,
    codec: AccessTokenCodec,
    config: TokenServiceConfig,
}

impl<R: TokenRepository> TokenIssuer<R> {
    /// Creates a new token issuer
    ///
    /// # Arguments
    ///
    /// * `repository` - Refresh token repository for persistence
    /// * `config` - Token service configuration
    pub fn new(repository: R, config: TokenServiceConfig) -> Self {
        let codec = AccessTokenCodec::new(&config);
        Self {
            repository,
            codec,
            config,
        }
    }

    /// The codec used for access tokens, for the authentication layer to
    /// verify bearer credentials without a store round-trip
    pub fn codec(&self) -> &AccessTokenCodec {
        &self.codec
    }

    /// The underlying refresh token repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Issues a fresh access/refresh token pair for a person
    ///
    /// When `prior` is supplied this is a rotation: the new refresh token
    /// is created first and the prior one deleted after. A crash between
    /// the two steps leaves two valid refresh tokens (the stale one dies
    /// at natural expiry), never zero, so a session cannot be stranded.
    ///
    /// Two concurrent rotations of the same refresh token may both get
    /// here after reading it as valid; deletes are idempotent, so the
    /// loser's delete is a no-op and both pairs are honored.
    ///
    /// # Arguments
    ///
    /// * `person` - The person the tokens represent
    /// * `prior` - The stored refresh token being rotated, if any
    /// * `now` - Issuance instant for the access token
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The new pair; the caller transmits the refresh
    ///   token as an HTTP-only cookie and the access token as a bearer
    ///   credential
    /// * `Err(DomainError)` - Signing or persistence failed; a partial
    ///   issuance is never presented as success
    pub async fn issue_new_token_pair(
        &self,
        person: &Person,
        prior: Option<&RefreshToken>,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, DomainError> {
        let access_token = self.codec.encode(person, now)?;

        let refresh_token = self
            .repository
            .create(person.id, self.config.refresh_token_hours)
            .await?;

        if let Some(prior) = prior {
            let deleted = self.repository.delete(&prior.token).await?;
            if !deleted {
                // Lost a double-submit race; the winner already removed it.
                tracing::debug!(person_id = %person.id, "prior refresh token was already gone");
            }
        }

        tracing::info!(
            person_id = %person.id,
            rotated = prior.is_some(),
            "issued new token pair"
        );

        Ok(TokenPair::new(
            access_token,
            refresh_token.token,
            self.config.access_token_minutes,
            self.config.refresh_token_hours,
        ))
    }

    /// Looks up a presented refresh token value and gates it on validity
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshToken)` - The stored record, to be passed as `prior`
    ///   to [`issue_new_token_pair`](Self::issue_new_token_pair)
    /// * `Err(DomainError)` - [`TokenError::InvalidRefresh`] whether the
    ///   value is unknown or expired; the two are indistinguishable
    pub async fn verify_refresh_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<RefreshToken, DomainError> {
        let record = self.repository.find_by_value(token).await?;

        match record {
            Some(record) if is_refresh_token_valid(Some(&record), now) => Ok(record),
            _ => Err(TokenError::InvalidRefresh.into()),
        }
    }

    /// Revokes a single refresh token (logout)
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - True if a token was deleted, false if none existed
    pub async fn revoke_refresh_token(&self, token: &str) -> Result<bool, DomainError> {
        let deleted = self.repository.delete(token).await?;
        if deleted {
            tracing::info!("refresh token revoked");
        }
        Ok(deleted)
    }

    /// Revokes every refresh token for a person (logout everywhere)
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - Number of tokens deleted
    pub async fn revoke_all_for_person(&self, person_id: Uuid) -> Result<u64, DomainError> {
        let revoked = self.repository.delete_all_for_person(person_id).await?;
        tracing::info!(person_id = %person_id, count = revoked, "revoked all refresh tokens");
        Ok(revoked)
    }
}
