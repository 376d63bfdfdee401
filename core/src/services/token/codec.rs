//! Signed access-token codec

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::person::Person;
use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Encodes and verifies signed access tokens (HMAC-SHA-256 over the
/// serialized claims, single shared secret).
///
/// There is no revocation list: an access token stays valid until its
/// natural expiry, and the short configured lifetime bounds the blast
/// radius of a leaked one.
pub struct AccessTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    access_token_minutes: i64,
}

impl AccessTokenCodec {
    /// Creates a new codec from token service configuration
    pub fn new(config: &TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        // Expiry is checked against the caller-supplied clock in `decode`,
        // not the wall clock inside the JWT library.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key,
            decoding_key,
            validation,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            access_token_minutes: config.access_token_minutes,
        }
    }

    /// Encodes a signed access token for a person
    ///
    /// # Arguments
    ///
    /// * `person` - The person the token represents
    /// * `issued_at` - Issuance instant; expiry is this plus the configured
    ///   access lifetime
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token, safe for a bearer-style header
    /// * `Err(DomainError)` - Signing failed
    pub fn encode(
        &self,
        person: &Person,
        issued_at: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = Claims::new_access_token(
            person,
            issued_at,
            self.access_token_minutes,
            &self.issuer,
            &self.audience,
        );

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Verifies an access token and returns its claims
    ///
    /// Signature mismatch, malformed payload, and expiry relative to `now`
    /// all collapse to [`TokenError::Unauthenticated`]; the caller learns
    /// nothing about which check failed.
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| DomainError::Token(TokenError::Unauthenticated))?;

        if token_data.claims.is_expired_at(now) {
            return Err(DomainError::Token(TokenError::Unauthenticated));
        }

        Ok(token_data.claims)
    }
}
