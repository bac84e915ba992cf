//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `portal_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "portal.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "portal";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "PORTAL";

/// Separator for nested keys in environment variables (`PORTAL_META__BASE_URL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// META CLIENT CONSTANTS
// ============================================================================

/// Default base URL of the backend serving the public meta document
pub const DEFAULT_META_BASE_URL: &str = "http://127.0.0.1:3000";

/// Default HTTP client timeout in seconds
pub const DEFAULT_META_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "PORTAL_LOG";
