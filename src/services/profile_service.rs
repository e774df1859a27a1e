//! Profile service - public account data for an authenticated subject.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Profile;
use crate::errors::AppResult;
use crate::infra::CredentialStore;

/// Profile service trait for dependency injection.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Public data of the account identified by `subject` (its email)
    async fn profile(&self, subject: &str) -> AppResult<Profile>;
}

/// Concrete implementation of ProfileService over a credential store.
pub struct ProfileReader<S: CredentialStore> {
    store: Arc<S>,
}

impl<S: CredentialStore> ProfileReader<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: CredentialStore> ProfileService for ProfileReader<S> {
    async fn profile(&self, subject: &str) -> AppResult<Profile> {
        // A valid token for a missing account surfaces as NotFound
        let account = self.store.lookup(subject).await?;
        Ok(Profile::from(account))
    }
}
