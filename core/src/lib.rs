//! # HCM Core
//!
//! Core business logic and domain layer for the HCM backend.
//! This crate contains domain entities, the token services (access-token
//! codec, refresh-token issuance and rotation, stored-token validation),
//! repository interfaces, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::person::{Person, Role};
pub use domain::entities::token::{Claims, RefreshToken, TokenPair};
pub use errors::{DomainError, DomainResult, TokenError};
pub use repositories::TokenRepository;
pub use services::token::{
    is_refresh_token_valid, AccessTokenCodec, TokenIssuer, TokenServiceConfig,
};
