//! Mediation Host Port
//!
//! The host engine owns the component model: it knows what a view's children
//! are, whether a mediator component is already attached, and how to attach
//! or detach one. Each of those decisions is a method here with a default
//! that works for plain in-memory views, so a host only overrides what its
//! component model actually changes.
//!
//! ```text
//! trigger(AWAKE, view)
//!        │
//!        ├── host.child_views(view)          → recursive AWAKE
//!        ├── host.has_mediator(view, M)      → skip creation
//!        ├── host.create_mediator(view, b)   → None ⇒ host.null_mediator_error
//!        └── ...
//! trigger(DESTROYED, view)
//!        └── host.destroy_mediator(view, m)
//! ```

use mvb_domain::error::Error;
use mvb_domain::ports::{Mediator, ViewRef};
use mvb_domain::value_objects::TypeKey;

use crate::binder::MediationBinding;

/// Host-specific hooks consulted by the mediation binder
pub trait MediationHost: Send + Sync {
    /// Name used in diagnostics and for registry lookup
    fn name(&self) -> &str {
        "custom"
    }

    /// Views to process recursively when `view` awakes
    fn child_views(&self, view: &ViewRef) -> Vec<ViewRef> {
        view.child_views()
    }

    /// Whether the host already attached a mediator of `mediator_type`
    fn has_mediator(&self, _view: &ViewRef, _mediator_type: TypeKey) -> bool {
        false
    }

    /// Create (attach) a mediator for `view`
    ///
    /// Returning `None` makes the binder fail with
    /// [`null_mediator_error`](MediationHost::null_mediator_error).
    fn create_mediator(
        &self,
        view: &ViewRef,
        binding: &MediationBinding,
    ) -> Option<Box<dyn Mediator>> {
        binding.create(view)
    }

    /// Detach a mediator after its `on_remove` hook ran
    fn destroy_mediator(&self, _view: &ViewRef, mediator: Box<dyn Mediator>) {
        drop(mediator);
    }

    /// Error reported when [`create_mediator`](MediationHost::create_mediator)
    /// yields nothing
    fn null_mediator_error(&self, view_type: TypeKey, mediator_type: TypeKey) -> Error {
        Error::null_mediator(view_type, mediator_type)
    }
}

/// Host that keeps every default
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHost;

impl MediationHost for DefaultHost {
    fn name(&self) -> &str {
        "default"
    }
}
