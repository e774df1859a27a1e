//! Authentication service - registration and login.
//!
//! Registration writes new accounts into the credential store; login
//! checks a password against the stored one and mints a session token.

use async_trait::async_trait;
use chrono::Duration;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::{PasswordStorage, DUMMY_PASSWORD, TOKEN_TTL_HOURS, TOKEN_TYPE_BEARER};
use crate::domain::{Account, Password};
use crate::errors::{AppError, AppResult};
use crate::infra::CredentialStore;

use super::TokenCodec;

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 259200)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account
    async fn register(&self, email: String, display_name: String, password: String) -> AppResult<()>;

    /// Check credentials and return a session token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;
}

/// Concrete implementation of AuthService over a credential store.
pub struct Authenticator<S: CredentialStore> {
    store: Arc<S>,
    tokens: Arc<TokenCodec>,
    storage: PasswordStorage,
    // Verified against when the email is unknown, so both failure
    // paths do the same work.
    dummy_password: Password,
}

impl<S: CredentialStore> Authenticator<S> {
    /// Create a new auth service.
    ///
    /// # Errors
    /// Fails only if the placeholder password cannot be hashed.
    pub fn new(store: Arc<S>, tokens: Arc<TokenCodec>, storage: PasswordStorage) -> AppResult<Self> {
        Ok(Self {
            store,
            tokens,
            storage,
            dummy_password: Password::new(DUMMY_PASSWORD, storage)?,
        })
    }
}

#[async_trait]
impl<S: CredentialStore> AuthService for Authenticator<S> {
    async fn register(&self, email: String, display_name: String, password: String) -> AppResult<()> {
        let password = Password::new(&password, self.storage)?;
        self.store
            .insert(Account::new(email.clone(), display_name, password))
            .await?;

        tracing::info!(email = %email, "account registered");
        Ok(())
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let account = self.store.lookup(&email).await.ok();

        let stored = account
            .as_ref()
            .map(|account| &account.password)
            .unwrap_or(&self.dummy_password);
        let password_valid = stored.verify(&password);

        // Unknown email and wrong password are indistinguishable to the caller
        let account = match account {
            Some(account) if password_valid => account,
            _ => return Err(AppError::InvalidCredentials),
        };

        let ttl = Duration::hours(TOKEN_TTL_HOURS);
        let access_token = self.tokens.issue(&account.email, ttl)?;

        tracing::info!(email = %account.email, "login succeeded");
        Ok(TokenResponse {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: ttl.num_seconds(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryCredentialStore, MockCredentialStore, StoreError};

    const SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

    fn codec() -> Arc<TokenCodec> {
        Arc::new(TokenCodec::new(SECRET))
    }

    fn authenticator(storage: PasswordStorage) -> Authenticator<InMemoryCredentialStore> {
        Authenticator::new(Arc::new(InMemoryCredentialStore::new()), codec(), storage).unwrap()
    }

    fn plaintext_account(email: &str, password: &str) -> Account {
        Account::new(
            email.to_string(),
            "Alice".to_string(),
            Password::new(password, PasswordStorage::Plaintext).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_register_twice_is_duplicate() {
        let auth = authenticator(PasswordStorage::Plaintext);
        auth.register("a@x.com".into(), "Alice".into(), "secret".into())
            .await
            .unwrap();

        let result = auth
            .register("a@x.com".into(), "Bob".into(), "other".into())
            .await;
        assert!(matches!(result, Err(AppError::DuplicateAccount)));
    }

    #[tokio::test]
    async fn test_register_accepts_empty_fields() {
        let auth = authenticator(PasswordStorage::Plaintext);
        auth.register(String::new(), String::new(), String::new())
            .await
            .unwrap();

        let token = auth.login(String::new(), String::new()).await.unwrap();
        assert!(!token.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_login_issues_token_for_subject() {
        for storage in [PasswordStorage::Plaintext, PasswordStorage::Argon2] {
            let auth = authenticator(storage);
            auth.register("a@x.com".into(), "Alice".into(), "secret".into())
                .await
                .unwrap();

            let response = auth.login("a@x.com".into(), "secret".into()).await.unwrap();

            assert_eq!(response.token_type, "Bearer");
            assert_eq!(response.expires_in, 72 * 3600);
            let claims = codec().verify(&response.access_token).unwrap();
            assert_eq!(claims.sub, "a@x.com");
        }
    }

    #[tokio::test]
    async fn test_expires_in_matches_token_lifetime() {
        let auth = authenticator(PasswordStorage::Plaintext);
        auth.register("a@x.com".into(), "Alice".into(), "secret".into())
            .await
            .unwrap();

        let response = auth.login("a@x.com".into(), "secret".into()).await.unwrap();
        let claims = codec().verify(&response.access_token).unwrap();

        assert_eq!(response.expires_in, claims.exp - claims.iat.unwrap());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_are_identical() {
        for storage in [PasswordStorage::Plaintext, PasswordStorage::Argon2] {
            let auth = authenticator(storage);
            auth.register("a@x.com".into(), "Alice".into(), "secret".into())
                .await
                .unwrap();

            let wrong_password = auth
                .login("a@x.com".into(), "wrong".into())
                .await
                .unwrap_err();
            let unknown_email = auth
                .login("b@x.com".into(), "secret".into())
                .await
                .unwrap_err();

            assert!(matches!(wrong_password, AppError::InvalidCredentials));
            assert!(matches!(unknown_email, AppError::InvalidCredentials));
            assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        }
    }

    #[tokio::test]
    async fn test_dummy_password_never_logs_in_unknown_email() {
        let auth = authenticator(PasswordStorage::Plaintext);

        let result = auth.login("ghost@x.com".into(), DUMMY_PASSWORD.into()).await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_uses_store_lookup() {
        let mut store = MockCredentialStore::new();
        store
            .expect_lookup()
            .times(1)
            .returning(|email| Ok(plaintext_account(&email.to_string(), "secret")));

        let auth = Authenticator::new(Arc::new(store), codec(), PasswordStorage::Plaintext).unwrap();
        let response = auth.login("a@x.com".into(), "secret".into()).await.unwrap();

        assert_eq!(codec().verify(&response.access_token).unwrap().sub, "a@x.com");
    }

    #[tokio::test]
    async fn test_login_not_found_maps_to_invalid_credentials() {
        let mut store = MockCredentialStore::new();
        store
            .expect_lookup()
            .times(1)
            .returning(|_| Err(StoreError::NotFound));

        let auth = Authenticator::new(Arc::new(store), codec(), PasswordStorage::Plaintext).unwrap();
        let result = auth.login("a@x.com".into(), "secret".into()).await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_register_conflict_from_store() {
        let mut store = MockCredentialStore::new();
        store
            .expect_insert()
            .times(1)
            .returning(|_| Err(StoreError::AlreadyExists));

        let auth = Authenticator::new(Arc::new(store), codec(), PasswordStorage::Plaintext).unwrap();
        let result = auth
            .register("a@x.com".into(), "Alice".into(), "secret".into())
            .await;

        assert!(matches!(result, Err(AppError::DuplicateAccount)));
    }

    #[tokio::test]
    async fn test_register_stores_configured_password_storage() {
        let mut store = MockCredentialStore::new();
        store
            .expect_insert()
            .withf(|account: &Account| {
                account.email == "a@x.com"
                    && account.display_name == "Alice"
                    && account.password.storage() == PasswordStorage::Argon2
                    && account.password.verify("secret")
            })
            .times(1)
            .returning(|_| Ok(()));

        let auth = Authenticator::new(Arc::new(store), codec(), PasswordStorage::Argon2).unwrap();
        auth.register("a@x.com".into(), "Alice".into(), "secret".into())
            .await
            .unwrap();
    }
}
