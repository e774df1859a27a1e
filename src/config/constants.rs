//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Session token lifetime in hours
pub const TOKEN_TTL_HOURS: i64 = 72;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Development-only signing secret, used when JWT_SECRET is unset in debug builds
pub const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

// =============================================================================
// Password storage
// =============================================================================

/// Store passwords as Argon2 hashes
pub const PASSWORD_STORAGE_ARGON2: &str = "argon2";

/// Store passwords verbatim and compare with exact equality
pub const PASSWORD_STORAGE_PLAINTEXT: &str = "plaintext";

/// Plain text verified against when the requested account does not exist
pub const DUMMY_PASSWORD: &str = "timing-equalisation-placeholder";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;
