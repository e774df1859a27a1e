//! Domain layer - Core business entities and logic
//!
//! Accounts and the password value object, independent of storage
//! and transport.

pub mod account;
pub mod password;

pub use account::{Account, Profile};
pub use password::Password;
