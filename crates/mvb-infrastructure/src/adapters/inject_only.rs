//! Injection-only host
//!
//! Reports every view as already mediated, so AWAKE registers and injects
//! views and their children but never creates a mediator. Useful for headless
//! runs where view dependencies matter and behavior does not.

use std::sync::Arc;

use mvb_application::ports::host::MediationHost;
use mvb_application::ports::registry::{MEDIATION_HOSTS, MediationHostEntry};
use mvb_domain::ports::ViewRef;
use mvb_domain::value_objects::TypeKey;

use crate::constants::INJECT_ONLY_HOST_NAME;

/// Host that never attaches mediators
#[derive(Debug, Clone, Copy, Default)]
pub struct InjectOnlyHost;

impl MediationHost for InjectOnlyHost {
    fn name(&self) -> &str {
        INJECT_ONLY_HOST_NAME
    }

    fn has_mediator(&self, _view: &ViewRef, _mediator_type: TypeKey) -> bool {
        true
    }
}

#[linkme::distributed_slice(MEDIATION_HOSTS)]
static INJECT_ONLY_HOST: MediationHostEntry = MediationHostEntry {
    name: INJECT_ONLY_HOST_NAME,
    description: "Registers and injects views without creating mediators",
    factory: |_| Ok(Arc::new(InjectOnlyHost)),
};
