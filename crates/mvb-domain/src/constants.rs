//! Domain constants

/// Maximum nesting of view processing before mediation is reported as a
/// stack overflow
pub const DEFAULT_MAX_MEDIATION_DEPTH: usize = 64;

/// Host used when configuration does not name one
pub const DEFAULT_MEDIATION_HOST: &str = "detached";
