//! Validity predicate for stored refresh tokens

use chrono::{DateTime, Utc};

use crate::domain::entities::token::RefreshToken;

/// Decides whether a stored refresh token record is usable at `now`.
///
/// Pure predicate with no side effects; it never deletes expired rows.
/// An absent record and an expired one are deliberately indistinguishable,
/// so a caller probing token values learns nothing about which exist.
pub fn is_refresh_token_valid(record: Option<&RefreshToken>, now: DateTime<Utc>) -> bool {
    match record {
        Some(token) => !token.is_expired_at(now),
        None => false,
    }
}
