//! Business services.

pub mod token;

pub use token::{is_refresh_token_valid, AccessTokenCodec, TokenIssuer, TokenServiceConfig};
