//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::{AuthService, AuthorizationGuard, ProfileService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Registration and login
    pub auth_service: Arc<dyn AuthService>,
    /// Profile lookup
    pub profile_service: Arc<dyn ProfileService>,
    /// Bearer token validation
    pub guard: AuthorizationGuard,
}

impl AppState {
    /// Create application state with a fresh in-memory credential store.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let services = Services::from_config(config)?;
        Ok(Self::from_container(&services))
    }

    /// Create application state from any service container.
    pub fn from_container(container: &impl ServiceContainer) -> Self {
        Self {
            auth_service: container.auth(),
            profile_service: container.profiles(),
            guard: container.guard(),
        }
    }
}
