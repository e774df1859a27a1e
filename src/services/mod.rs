//! Application services layer - Use cases and business logic.
//!
//! Services depend on the `CredentialStore` abstraction and a shared
//! `TokenCodec`; the container wires one instance of each.

mod auth_service;
pub mod container;
mod guard;
mod profile_service;
mod token;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, TokenResponse};
pub use guard::AuthorizationGuard;
pub use profile_service::{ProfileReader, ProfileService};
pub use token::{Claims, TokenCodec, TokenError};
