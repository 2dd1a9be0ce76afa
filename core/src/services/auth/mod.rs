//! Authentication service module
//!
//! Combines a credential check with session token issuance:
//! - `CredentialVerifier` is the seam where a real identity store plugs in
//! - `AcceptAnyCredentials` keeps the demo behavior of trusting every login
//! - `AuthService` runs the check, then issues or verifies session tokens

mod credentials;
mod service;

#[cfg(test)]
mod tests;

pub use credentials::{AcceptAnyCredentials, CredentialVerifier};
pub use service::AuthService;
