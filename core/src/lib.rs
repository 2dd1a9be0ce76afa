//! # TokenSession Core
//!
//! Core domain layer for the TokenSession backend.
//! This crate contains the session claim entity, the signing key, the token
//! and auth services, and the error types they report.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
