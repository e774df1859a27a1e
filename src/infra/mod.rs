//! Infrastructure layer - state the services depend on.
//!
//! Only an in-memory credential store exists; nothing is persisted.

pub mod credential_store;

pub use credential_store::{CredentialStore, InMemoryCredentialStore, StoreError};

#[cfg(test)]
pub use credential_store::MockCredentialStore;
