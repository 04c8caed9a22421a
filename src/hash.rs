//! Hashing collaborator used by `check_and_hash`.

use secrecy::SecretString;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HashError {
    #[error("Failed to hash input: {0}")]
    Backend(String),
}

/// Turns validated plaintext into a stored hash string. Implementations are
/// expected to salt, so equal inputs need not give equal outputs.
pub trait CredentialHasher {
    fn hash(&self, plaintext: &SecretString) -> Result<String, HashError>;
}

impl<F> CredentialHasher for F
where
    F: Fn(&SecretString) -> Result<String, HashError>,
{
    fn hash(&self, plaintext: &SecretString) -> Result<String, HashError> {
        self(plaintext)
    }
}

/// Argon2id with a random salt, producing a PHC string.
#[cfg(feature = "argon2")]
#[derive(Default, Clone)]
pub struct Argon2Hasher {
    argon: argon2::Argon2<'static>,
}

#[cfg(feature = "argon2")]
impl Argon2Hasher {
    pub fn new(argon: argon2::Argon2<'static>) -> Self {
        Self { argon }
    }
}

#[cfg(feature = "argon2")]
impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &SecretString) -> Result<String, HashError> {
        use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
        use secrecy::ExposeSecret;

        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon
            .hash_password(plaintext.expose_secret().as_bytes(), &salt)
            .map_err(|err| HashError::Backend(err.to_string()))?;
        Ok(hash.to_string())
    }
}
