//! # Infrastructure Layer
//!
//! Concrete implementations behind the `hcm_core` repository traits.
//! Currently this is MySQL persistence via SQLx for the refresh token
//! store, plus connection pool construction from shared configuration.

pub mod database;

pub use database::MySqlTokenRepository;
