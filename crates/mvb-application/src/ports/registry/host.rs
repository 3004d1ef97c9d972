//! Mediation Host Registry
//!
//! Hosts register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime by name.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ports::host::MediationHost;

/// Configuration for host creation
///
/// Hosts use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct MediationHostConfig {
    /// Host name (e.g., "detached")
    pub name: String,
    /// Additional host-specific configuration
    pub extra: HashMap<String, String>,
}

impl MediationHostConfig {
    /// Create a new config with the given host name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for mediation hosts
pub struct MediationHostEntry {
    /// Unique host name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the host
    pub factory: fn(&MediationHostConfig) -> Result<Arc<dyn MediationHost>, String>,
}

#[linkme::distributed_slice]
pub static MEDIATION_HOSTS: [MediationHostEntry] = [..];

/// Resolve a host by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn MediationHost>)` - Created host
/// * `Err(String)` - Host not found or creation failed
pub fn resolve_mediation_host(
    config: &MediationHostConfig,
) -> Result<Arc<dyn MediationHost>, String> {
    if let Some(entry) = MEDIATION_HOSTS
        .iter()
        .find(|entry| entry.name == config.name)
    {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = MEDIATION_HOSTS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown mediation host '{}'. Available hosts: {:?}",
        config.name, available
    ))
}

/// List all registered hosts as (name, description)
pub fn list_mediation_hosts() -> Vec<(&'static str, &'static str)> {
    MEDIATION_HOSTS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
