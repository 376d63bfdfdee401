//! Token-specific error types.
//!
//! Failure causes that would let a caller probe for token existence are
//! collapsed: every way an access token can be bad is `Unauthenticated`,
//! and an absent refresh token is indistinguishable from an expired one.

use hcm_shared::types::response::ErrorResponse;
use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Absent, malformed, expired, or signature-invalid access token
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Absent or expired refresh token
    #[error("Invalid refresh token")]
    InvalidRefresh,

    /// Signing the access token failed
    #[error("Token generation failed")]
    GenerationFailed,
}

impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::Unauthenticated => "UNAUTHENTICATED",
            TokenError::InvalidRefresh => "INVALID_REFRESH_TOKEN",
            TokenError::GenerationFailed => "TOKEN_GENERATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

impl From<crate::errors::DomainError> for ErrorResponse {
    fn from(err: crate::errors::DomainError) -> Self {
        use crate::errors::DomainError;

        match err {
            DomainError::Token(token_err) => token_err.into(),
            DomainError::Persistence { .. } => {
                // Details stay in the logs, not in the response body
                ErrorResponse::new("PERSISTENCE_FAILURE", "Persistence failure")
            }
            DomainError::Internal { .. } => ErrorResponse::new("INTERNAL_ERROR", "Internal error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn test_token_error_conversion() {
        let response: ErrorResponse = TokenError::InvalidRefresh.into();
        assert_eq!(response.error, "INVALID_REFRESH_TOKEN");
        assert_eq!(response.message, "Invalid refresh token");
    }

    #[test]
    fn test_persistence_error_hides_details() {
        let err = DomainError::Persistence {
            message: "connection refused to mysql://db:3306".to_string(),
        };
        let response: ErrorResponse = err.into();

        assert_eq!(response.error, "PERSISTENCE_FAILURE");
        assert!(!response.message.contains("mysql"));
    }
}
