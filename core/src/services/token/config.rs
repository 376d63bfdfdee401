//! Configuration for the token services

use hcm_shared::config::JwtConfig;

/// Configuration for the token services
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Signing secret for access tokens
    pub secret: String,
    /// Issuer claim stamped into access tokens
    pub issuer: String,
    /// Audience claim stamped into access tokens
    pub audience: String,
    /// Access token lifetime in minutes
    pub access_token_minutes: i64,
    /// Refresh token lifetime in hours
    pub refresh_token_hours: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        JwtConfig::default().into()
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            issuer: config.issuer,
            audience: config.audience,
            access_token_minutes: config.access_token_minutes,
            refresh_token_hours: config.refresh_token_hours,
        }
    }
}
