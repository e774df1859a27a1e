//! Service Container - wires the services around one credential store.
//!
//! The store and token codec are created once here and shared by
//! handle, so every service sees the same accounts and the same keys.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, AuthorizationGuard, ProfileReader, ProfileService, TokenCodec,
};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::InMemoryCredentialStore;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get profile service
    fn profiles(&self) -> Arc<dyn ProfileService>;

    /// Get authorization guard
    fn guard(&self) -> AuthorizationGuard;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    profile_service: Arc<dyn ProfileService>,
    guard: AuthorizationGuard,
}

impl Services {
    /// Create a service container from manually built services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        profile_service: Arc<dyn ProfileService>,
        guard: AuthorizationGuard,
    ) -> Self {
        Self {
            auth_service,
            profile_service,
            guard,
        }
    }

    /// Create a service container backed by a fresh in-memory store
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let store = Arc::new(InMemoryCredentialStore::new());
        let tokens = Arc::new(TokenCodec::from_config(config));

        let auth_service = Arc::new(Authenticator::new(
            store.clone(),
            tokens.clone(),
            config.password_storage,
        )?);
        let profile_service = Arc::new(ProfileReader::new(store));

        Ok(Self::new(
            auth_service,
            profile_service,
            AuthorizationGuard::new(tokens),
        ))
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileService> {
        self.profile_service.clone()
    }

    fn guard(&self) -> AuthorizationGuard {
        self.guard.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PasswordStorage, DEV_JWT_SECRET};

    #[tokio::test]
    async fn test_services_share_one_store_and_codec() {
        let config = Config::new(DEV_JWT_SECRET, PasswordStorage::Plaintext).unwrap();
        let services = Services::from_config(&config).unwrap();

        services
            .auth()
            .register("a@x.com".into(), "Alice".into(), "secret".into())
            .await
            .unwrap();
        let token = services
            .auth()
            .login("a@x.com".into(), "secret".into())
            .await
            .unwrap();

        let subject = services.guard().authorize(Some(&token.access_token)).unwrap();
        let profile = services.profiles().profile(&subject).await.unwrap();

        assert_eq!(profile.email, "a@x.com");
        assert_eq!(profile.display_name, "Alice");
    }
}
