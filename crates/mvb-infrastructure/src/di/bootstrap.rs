//! Mediation session bootstrap
//!
//! The injection binder and host are process-wide in a typical embedding.
//! Here they live in an explicit [`MediationContext`] whose lifetime bounds
//! the session: create it once, hand out binders, drop it on teardown.

use std::sync::Arc;

use dill::Catalog;
use mvb_application::MediationBinder;
use mvb_application::ports::host::MediationHost;
use mvb_application::ports::registry::resolve_mediation_host;
use mvb_domain::error::{Error, Result};
use tracing::info;

use crate::config::MediationConfig;
use crate::config::loader::validate_config;
use crate::di::catalog::{MediationHostHandle, build_catalog};
use crate::di::injection_binder::InjectionBinder;

/// Services shared by every binder of a mediation session
pub struct MediationContext {
    catalog: Catalog,
    config: Arc<MediationConfig>,
    injection: Arc<InjectionBinder>,
    host: Arc<dyn MediationHost>,
}

impl MediationContext {
    /// Resolve the session services from a catalog built by [`build_catalog`]
    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        let config = catalog
            .get_one::<MediationConfig>()
            .map_err(|e| Error::configuration(format!("Catalog has no configuration: {e:?}")))?;
        let injection = catalog
            .get_one::<InjectionBinder>()
            .map_err(|e| Error::infrastructure(format!("Catalog has no injection binder: {e:?}")))?;
        let host = catalog
            .get_one::<MediationHostHandle>()
            .map_err(|e| Error::infrastructure(format!("Catalog has no mediation host: {e:?}")))?
            .get();

        Ok(Self {
            catalog,
            config,
            injection,
            host,
        })
    }

    pub fn config(&self) -> &MediationConfig {
        &self.config
    }

    /// Shared injection binder; bindings added here are visible to every
    /// binder created from this context
    pub fn injection_binder(&self) -> &InjectionBinder {
        &self.injection
    }

    pub fn host(&self) -> &Arc<dyn MediationHost> {
        &self.host
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// New binder wired to this session's injector, host and depth ceiling
    pub fn create_binder(&self) -> MediationBinder {
        MediationBinder::new(
            Arc::new(InjectionBinder::clone(&self.injection)),
            Arc::clone(&self.host),
        )
        .with_max_depth(self.config.mediation.max_depth)
    }
}

impl std::fmt::Debug for MediationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediationContext")
            .field("host", &self.host.name())
            .field("max_depth", &self.config.mediation.max_depth)
            .field("injection", &self.injection)
            .finish_non_exhaustive()
    }
}

/// Bootstrap a session with the host named in configuration
pub fn init_context(config: MediationConfig) -> Result<MediationContext> {
    let host = resolve_mediation_host(&config.mediation.host_config())
        .map_err(Error::configuration)?;
    init_context_with_host(config, host)
}

/// Bootstrap a session with an explicit host
pub fn init_context_with_host(
    config: MediationConfig,
    host: Arc<dyn MediationHost>,
) -> Result<MediationContext> {
    validate_config(&config)?;
    info!(host = host.name(), "Initializing mediation context");

    let catalog = build_catalog(config, InjectionBinder::new(), host);
    MediationContext::from_catalog(catalog)
}
