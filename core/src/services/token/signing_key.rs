//! Symmetric signing key for session tokens

use jsonwebtoken::{DecodingKey, EncodingKey};
use rand::{rngs::OsRng, RngCore};

use crate::errors::DomainError;

/// Length in bytes of keys produced by [`SigningKey::generate`]
pub const GENERATED_KEY_LENGTH: usize = 32;

/// HMAC key used both to sign and to verify session tokens
///
/// Built once at startup and handed to the [`TokenService`]; it is never
/// mutated afterwards.
///
/// [`TokenService`]: super::TokenService
#[derive(Clone)]
pub struct SigningKey {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}

impl SigningKey {
    /// Creates a signing key from a shared secret
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the secret is empty.
    pub fn from_secret(secret: impl AsRef<[u8]>) -> Result<Self, DomainError> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(DomainError::Validation {
                message: "Signing secret must not be empty".to_string(),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        })
    }

    /// Generates a random key from the operating system RNG
    ///
    /// Tokens signed with a generated key only verify within the same process.
    pub fn generate() -> Self {
        let mut secret = [0u8; GENERATED_KEY_LENGTH];
        OsRng.fill_bytes(&mut secret);

        Self {
            encoding_key: EncodingKey::from_secret(&secret),
            decoding_key: DecodingKey::from_secret(&secret),
        }
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}
