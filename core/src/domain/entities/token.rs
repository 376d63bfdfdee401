//! Token entities for the session engine.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::person::{Person, Role};

/// Number of random bytes in a refresh token value (256 bits of entropy)
const REFRESH_TOKEN_BYTES: usize = 32;

/// Claims structure for the signed access-token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (person ID)
    pub sub: String,

    /// Application role of the subject
    pub role: Role,

    /// Department of the subject
    pub department: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    /// Creates new claims for an access token.
    ///
    /// Expiry is always `issued_at` plus the configured access lifetime.
    pub fn new_access_token(
        person: &Person,
        issued_at: DateTime<Utc>,
        lifetime_minutes: i64,
        issuer: &str,
        audience: &str,
    ) -> Self {
        let expiry = issued_at + Duration::minutes(lifetime_minutes);

        Self {
            sub: person.id.to_string(),
            role: person.role,
            department: person.department.clone(),
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
        }
    }

    /// Gets the person ID from the claims
    pub fn person_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Checks whether the claims have expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// Refresh token entity stored in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the refresh token row
    pub id: Uuid,

    /// Person this token belongs to
    pub person_id: Uuid,

    /// Opaque token value presented by the client; unique across rows
    pub token: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new refresh token with a freshly generated value
    pub fn new(person_id: Uuid, lifetime_hours: i64) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            person_id,
            token: generate_token_value(),
            created_at: now,
            expires_at: now + Duration::hours(lifetime_hours),
        }
    }

    /// Checks whether the token has expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Generates an unguessable, cookie-safe token value from the OS CSPRNG.
fn generate_token_value() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Opaque refresh token value
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub access_expires_in: i64,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with lifetimes from configuration
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_minutes: i64,
        refresh_hours: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in: access_minutes * 60,
            refresh_expires_in: refresh_hours * 60 * 60,
        }
    }
}
