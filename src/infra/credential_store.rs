//! Credential store - in-process account storage.
//!
//! The store is the only shared mutable state in the service. Insertion
//! holds the write lock across the existence check and the write, so two
//! concurrent registrations of the same email cannot both succeed.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::domain::Account;

#[cfg(test)]
use mockall::automock;

/// Credential store failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("account already exists")]
    AlreadyExists,

    #[error("account not found")]
    NotFound,
}

/// Account storage abstraction.
///
/// No update or delete: accounts live until the process exits.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Store a new account, keyed by its email.
    async fn insert(&self, account: Account) -> Result<(), StoreError>;

    /// Find an account by exact email.
    async fn lookup(&self, email: &str) -> Result<Account, StoreError>;
}

/// Lock-protected in-memory credential store
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn insert(&self, account: Account) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write().await;
        match accounts.entry(account.email.clone()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(())
            }
        }
    }

    async fn lookup(&self, email: &str) -> Result<Account, StoreError> {
        self.accounts
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}
