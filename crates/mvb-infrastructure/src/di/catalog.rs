//! dill Catalog - IoC Container Configuration
//!
//! Holds the services a mediation session shares: configuration, the
//! injection binder and the selected host.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let catalog = build_catalog(config, InjectionBinder::new(), host);
//! let injection: Arc<InjectionBinder> = catalog.get_one()?;
//! ```

use std::sync::Arc;

use dill::{Catalog, CatalogBuilder};
use mvb_application::ports::host::MediationHost;
use tracing::info;

use crate::config::MediationConfig;
use crate::di::injection_binder::InjectionBinder;

/// Catalog entry for the session's mediation host
#[derive(Clone)]
pub struct MediationHostHandle {
    host: Arc<dyn MediationHost>,
}

impl MediationHostHandle {
    pub fn new(host: Arc<dyn MediationHost>) -> Self {
        Self { host }
    }

    pub fn get(&self) -> Arc<dyn MediationHost> {
        Arc::clone(&self.host)
    }
}

/// Build the dill Catalog for one mediation session
pub fn build_catalog(
    config: MediationConfig,
    injection: InjectionBinder,
    host: Arc<dyn MediationHost>,
) -> Catalog {
    let host_name = host.name().to_string();

    let catalog = CatalogBuilder::new()
        .add_value(config)
        .add_value(injection)
        .add_value(MediationHostHandle::new(host))
        .build();

    info!(host = %host_name, "Built dill Catalog for mediation session");
    catalog
}
