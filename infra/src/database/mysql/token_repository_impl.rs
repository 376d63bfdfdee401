//! MySQL implementation of the TokenRepository trait.
//!
//! Backing table:
//!
//! ```sql
//! CREATE TABLE refresh_tokens (
//!     id         CHAR(36)     NOT NULL PRIMARY KEY,
//!     person_id  CHAR(36)     NOT NULL,
//!     token      VARCHAR(64)  NOT NULL,
//!     created_at TIMESTAMP(6) NOT NULL,
//!     expires_at TIMESTAMP(6) NOT NULL,
//!     UNIQUE KEY uq_refresh_tokens_token (token),
//!     KEY ix_refresh_tokens_person_id (person_id)
//! );
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use hcm_core::domain::entities::token::RefreshToken;
use hcm_core::errors::DomainError;
use hcm_core::repositories::TokenRepository;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| persistence(format!("failed to get id: {}", e)))?;

        let person_id: String = row
            .try_get("person_id")
            .map_err(|e| persistence(format!("failed to get person_id: {}", e)))?;

        Ok(RefreshToken {
            id: Uuid::parse_str(&id)
                .map_err(|e| persistence(format!("invalid token UUID: {}", e)))?,
            person_id: Uuid::parse_str(&person_id)
                .map_err(|e| persistence(format!("invalid person UUID: {}", e)))?,
            token: row
                .try_get("token")
                .map_err(|e| persistence(format!("failed to get token: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| persistence(format!("failed to get created_at: {}", e)))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| persistence(format!("failed to get expires_at: {}", e)))?,
        })
    }
}

fn persistence(message: String) -> DomainError {
    DomainError::Persistence { message }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                id, person_id, token, created_at, expires_at
            ) VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.person_id.to_string())
            .bind(&token.token)
            .bind(token.created_at)
            .bind(token.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| persistence(format!("failed to save refresh token: {}", e)))?;

        Ok(token)
    }

    async fn find_by_value(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, person_id, token, created_at, expires_at
            FROM refresh_tokens
            WHERE token = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| persistence(format!("failed to find refresh token: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, token: &str) -> Result<bool, DomainError> {
        let query = "DELETE FROM refresh_tokens WHERE token = ?";

        let result = sqlx::query(query)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| persistence(format!("failed to delete refresh token: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all_for_person(&self, person_id: Uuid) -> Result<u64, DomainError> {
        let query = "DELETE FROM refresh_tokens WHERE person_id = ?";

        let result = sqlx::query(query)
            .bind(person_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| persistence(format!("failed to delete person tokens: {}", e)))?;

        tracing::debug!(
            person_id = %person_id,
            count = result.rows_affected(),
            "deleted refresh tokens for person"
        );

        Ok(result.rows_affected())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let query = "DELETE FROM refresh_tokens WHERE expires_at < ?";

        let result = sqlx::query(query)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| persistence(format!("failed to delete expired tokens: {}", e)))?;

        Ok(result.rows_affected())
    }
}
