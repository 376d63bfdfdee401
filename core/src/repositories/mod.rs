//! Repository traits for persistence operations.

pub mod token;

pub use token::TokenRepository;
