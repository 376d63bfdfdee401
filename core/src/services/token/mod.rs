//! Token services for session management
//!
//! This module handles all token-related operations:
//! - Signed access-token encoding and verification
//! - Refresh token issuance and rotation
//! - Stored refresh-token validity checks
//! - Revocation on logout

mod codec;
mod config;
mod issuer;
mod validator;

#[cfg(test)]
mod tests;

pub use codec::AccessTokenCodec;
pub use config::TokenServiceConfig;
pub use issuer::TokenIssuer;
pub use validator::is_refresh_token_valid;
