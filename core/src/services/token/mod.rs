//! Token service module for signed session tokens
//!
//! This module handles:
//! - HS256 signing key construction
//! - Session token issuance with a fixed lifetime
//! - Session token verification (signature, structure, expiry)

mod config;
mod service;
mod signing_key;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
pub use signing_key::{SigningKey, GENERATED_KEY_LENGTH};
