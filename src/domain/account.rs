//! Account domain entity and its public projection.

use serde::Serialize;
use utoipa::ToSchema;

use super::Password;

/// Registered account.
///
/// Created once on registration and never mutated. Deliberately not
/// `Serialize`: only `Profile` crosses the API boundary.
#[derive(Debug, Clone)]
pub struct Account {
    pub email: String,
    pub display_name: String,
    pub password: Password,
}

impl Account {
    pub fn new(email: String, display_name: String, password: Password) -> Self {
        Self {
            email,
            display_name,
            password,
        }
    }
}

/// Public account data (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Profile {
    /// Account email address
    #[schema(example = "a@x.com")]
    pub email: String,
    /// Display name
    #[schema(example = "Alice")]
    #[serde(rename = "name")]
    pub display_name: String,
}

impl From<Account> for Profile {
    fn from(account: Account) -> Self {
        Self {
            email: account.email,
            display_name: account.display_name,
        }
    }
}
