//! Infrastructure layer constants
//!
//! Domain defaults live in `mvb_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "mvb.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "mvb";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "MVB";

/// Separator between nested keys in environment variables
/// (`MVB_MEDIATION__MAX_DEPTH` → `mediation.max_depth`)
pub const CONFIG_ENV_NESTING_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "MVB_LOG";

/// File name stem used for rolling log files
pub const LOG_FILE_STEM: &str = "mvb";

// ============================================================================
// HOST CONSTANTS
// ============================================================================

/// Registry name of the detached host
pub const DETACHED_HOST_NAME: &str = "detached";

/// Registry name of the injection-only host
pub const INJECT_ONLY_HOST_NAME: &str = "inject-only";
