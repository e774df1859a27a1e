//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{
    DEV_JWT_SECRET, MIN_JWT_SECRET_LENGTH, PASSWORD_STORAGE_ARGON2, PASSWORD_STORAGE_PLAINTEXT,
};
use crate::errors::{AppError, AppResult};

/// How account passwords are kept in the credential store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordStorage {
    /// Salted Argon2 hash, verified with the Argon2 verifier
    #[default]
    Argon2,
    /// Verbatim text, verified with exact string equality
    Plaintext,
}

impl FromStr for PasswordStorage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            PASSWORD_STORAGE_ARGON2 => Ok(PasswordStorage::Argon2),
            PASSWORD_STORAGE_PLAINTEXT => Ok(PasswordStorage::Plaintext),
            other => Err(AppError::internal(format!(
                "PASSWORD_STORAGE must be '{}' or '{}', got '{}'",
                PASSWORD_STORAGE_ARGON2, PASSWORD_STORAGE_PLAINTEXT, other
            ))),
        }
    }
}

impl std::fmt::Display for PasswordStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasswordStorage::Argon2 => write!(f, "{}", PASSWORD_STORAGE_ARGON2),
            PasswordStorage::Plaintext => write!(f, "{}", PASSWORD_STORAGE_PLAINTEXT),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    pub password_storage: PasswordStorage,
    pub cors_allowed_origin: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jwt_secret", &"[REDACTED]")
            .field("password_storage", &self.password_storage)
            .field("cors_allowed_origin", &self.cors_allowed_origin)
            .finish()
    }
}

impl Config {
    /// Build a configuration from explicit values.
    ///
    /// # Errors
    /// Returns an error if the secret is shorter than `MIN_JWT_SECRET_LENGTH`.
    pub fn new(jwt_secret: impl Into<String>, password_storage: PasswordStorage) -> AppResult<Self> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::internal(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        Ok(Self {
            jwt_secret,
            password_storage,
            cors_allowed_origin: None,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// In debug builds a missing JWT_SECRET falls back to a development
    /// secret; release builds require it.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            }
            Err(_) => {
                return Err(AppError::internal(
                    "JWT_SECRET environment variable must be set in production",
                ))
            }
        };

        let password_storage = match env::var("PASSWORD_STORAGE") {
            Ok(value) => value.parse()?,
            Err(_) => PasswordStorage::default(),
        };

        if password_storage == PasswordStorage::Plaintext {
            tracing::warn!("PASSWORD_STORAGE=plaintext, passwords are kept unhashed");
        }

        let mut config = Self::new(jwt_secret, password_storage)?;
        config.cors_allowed_origin = env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .filter(|origin| !origin.is_empty());

        Ok(config)
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_storage_parse() {
        assert_eq!("argon2".parse::<PasswordStorage>().unwrap(), PasswordStorage::Argon2);
        assert_eq!(" Plaintext ".parse::<PasswordStorage>().unwrap(), PasswordStorage::Plaintext);
        assert!("bcrypt".parse::<PasswordStorage>().is_err());
    }

    #[test]
    fn test_password_storage_display_round_trips() {
        for storage in [PasswordStorage::Argon2, PasswordStorage::Plaintext] {
            assert_eq!(storage.to_string().parse::<PasswordStorage>().unwrap(), storage);
        }
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = Config::new("very-secret-key", PasswordStorage::Argon2);
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = Config::new(DEV_JWT_SECRET, PasswordStorage::Argon2).unwrap();
        let debug = format!("{:?}", config);

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(DEV_JWT_SECRET));
    }
}
