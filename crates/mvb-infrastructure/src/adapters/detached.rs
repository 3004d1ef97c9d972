//! Detached host
//!
//! For views that live outside any engine scene graph: children come from the
//! view itself, mediators are built by the binding's factory and simply
//! dropped on removal.

use std::sync::Arc;

use mvb_application::MediationBinding;
use mvb_application::ports::host::MediationHost;
use mvb_application::ports::registry::{MEDIATION_HOSTS, MediationHostConfig, MediationHostEntry};
use mvb_domain::ports::{Mediator, ViewRef};
use tracing::{debug, warn};

use crate::constants::DETACHED_HOST_NAME;

/// Host with no component model of its own
#[derive(Debug, Clone, Default)]
pub struct DetachedHost {
    /// Warn instead of staying quiet when a binding has no factory
    warn_on_missing_factory: bool,
}

impl DetachedHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `warn_on_missing_factory` from host options
    pub fn from_config(config: &MediationHostConfig) -> Result<Self, String> {
        let warn_on_missing_factory = match config.extra.get("warn_on_missing_factory") {
            None => false,
            Some(value) => value
                .parse::<bool>()
                .map_err(|e| format!("Invalid warn_on_missing_factory '{value}': {e}"))?,
        };
        Ok(Self {
            warn_on_missing_factory,
        })
    }
}

impl MediationHost for DetachedHost {
    fn name(&self) -> &str {
        DETACHED_HOST_NAME
    }

    fn create_mediator(
        &self,
        view: &ViewRef,
        binding: &MediationBinding,
    ) -> Option<Box<dyn Mediator>> {
        if !binding.has_factory() && self.warn_on_missing_factory {
            warn!(
                view_type = %binding.view_type(),
                mediator_type = %binding.mediator_type(),
                "Binding has no factory and the detached host cannot attach mediators"
            );
        }
        binding.create(view)
    }

    fn destroy_mediator(&self, view: &ViewRef, mediator: Box<dyn Mediator>) {
        debug!(view_type = %view.view_type(), "Detached mediator dropped");
        drop(mediator);
    }
}

#[linkme::distributed_slice(MEDIATION_HOSTS)]
static DETACHED_HOST: MediationHostEntry = MediationHostEntry {
    name: DETACHED_HOST_NAME,
    description: "Mediators built from binding factories, no scene graph",
    factory: |config| Ok(Arc::new(DetachedHost::from_config(config)?)),
};
