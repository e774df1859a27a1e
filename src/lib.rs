//! session-auth - account registration, login and bearer-token sessions.
//!
//! Users register with an email and password, log in to receive a signed
//! session token, and present that token to read their profile.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Accounts and the password value object
//! - **infra**: The in-memory credential store
//! - **services**: Registration, login, token codec, authorization guard, profiles
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! JWT_SECRET=... cargo run -- serve --port 3000
//!
//! # Print the OpenAPI document
//! cargo run -- openapi
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{Config, PasswordStorage};
pub use domain::{Account, Password, Profile};
pub use errors::{AppError, AppResult};
