//! Password value object - Domain layer password handling.
//!
//! Encapsulates how a credential is stored and checked. The storage
//! mode is chosen once at startup (see `PasswordStorage`).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::PasswordStorage;
use crate::errors::{AppError, AppResult};

/// Password value object that handles hashing and verification.
///
/// The stored secret never leaves this type except through `verify`.
#[derive(Clone)]
pub struct Password {
    storage: PasswordStorage,
    secret: String,
}

// Don't expose the secret in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("storage", &self.storage)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a stored password from plain text.
    ///
    /// Any string is accepted, including the empty string.
    ///
    /// # Errors
    /// Returns an internal error if Argon2 hashing fails.
    pub fn new(plain_text: &str, storage: PasswordStorage) -> AppResult<Self> {
        let secret = match storage {
            PasswordStorage::Argon2 => Self::hash(plain_text)?,
            PasswordStorage::Plaintext => plain_text.to_string(),
        };

        Ok(Self { storage, secret })
    }

    /// Storage mode this password was created with.
    pub fn storage(&self) -> PasswordStorage {
        self.storage
    }

    /// Verify a plain text password against this one.
    pub fn verify(&self, plain_text: &str) -> bool {
        match self.storage {
            PasswordStorage::Argon2 => Self::verify_hash(plain_text, &self.secret).unwrap_or(false),
            PasswordStorage::Plaintext => self.secret == plain_text,
        }
    }

    fn hash(plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_hash(plain_text: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Self::argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argon2_hash_and_verify() {
        let plain = "SecurePassword123!";
        let password = Password::new(plain, PasswordStorage::Argon2).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn test_argon2_secret_is_not_plain_text() {
        let password = Password::new("secret", PasswordStorage::Argon2).unwrap();

        assert_ne!(password.secret, "secret");
        assert!(password.secret.starts_with("$argon2"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::new(plain, PasswordStorage::Argon2).unwrap();
        let pass2 = Password::new(plain, PasswordStorage::Argon2).unwrap();

        assert_ne!(pass1.secret, pass2.secret);
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_plaintext_exact_equality() {
        let password = Password::new("secret", PasswordStorage::Plaintext).unwrap();

        assert!(password.verify("secret"));
        assert!(!password.verify("Secret"));
        assert!(!password.verify("secret "));
        assert!(!password.verify(""));
    }

    #[test]
    fn test_empty_password_accepted() {
        for storage in [PasswordStorage::Argon2, PasswordStorage::Plaintext] {
            let password = Password::new("", storage).unwrap();
            assert!(password.verify(""));
            assert!(!password.verify("x"));
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let password = Password::new("hunter2", PasswordStorage::Plaintext).unwrap();
        let debug = format!("{:?}", password);

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
    }
}
