//! Argon2id password hashing and verification.
//!
//! Hashing and verification are CPU-bound and run on tokio's bounded
//! blocking pool so a burst of registrations cannot stall the async
//! workers handling unrelated requests.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use quill_core::error::AppError;
use quill_core::result::AppResult;

/// Handles password hashing and verification using Argon2id.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    ///
    /// The returned PHC string embeds the salt and parameters, so no
    /// separate salt storage is needed.
    pub async fn hash(&self, password: &str) -> AppResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
        })
        .await
        .map_err(|e| AppError::internal(format!("Hashing task panicked: {e}")))?
    }

    /// Verifies a plaintext password against a stored Argon2id hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    pub async fn verify(&self, stored_hash: &str, password: &str) -> AppResult<bool> {
        let stored_hash = stored_hash.to_owned();
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&stored_hash)
                .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(e) => Err(AppError::internal(format!(
                    "Password verification failed: {e}"
                ))),
            }
        })
        .await
        .map_err(|e| AppError::internal(format!("Verification task panicked: {e}")))?
    }
}
