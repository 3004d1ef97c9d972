//! Injector scope used while a mediator is being injected
//!
//! The mediated view resolves under its own concrete type for the duration of
//! the mediator's injection; everything else falls through to the binder's
//! injector. Nothing is written into the shared injector.

use mvb_domain::error::Result;
use mvb_domain::ports::injection::Instance;
use mvb_domain::ports::{Injector, ViewRef};
use mvb_domain::value_objects::TypeKey;

pub(crate) struct ViewScopedInjector<'a> {
    parent: &'a dyn Injector,
    view_type: TypeKey,
    view: Instance,
}

impl<'a> ViewScopedInjector<'a> {
    pub(crate) fn new(parent: &'a dyn Injector, view: &ViewRef) -> Self {
        Self {
            parent,
            view_type: view.view_type(),
            view: ViewRef::clone(view).into_any_arc(),
        }
    }
}

impl Injector for ViewScopedInjector<'_> {
    fn resolve_any(&self, key: TypeKey) -> Result<Instance> {
        if key == self.view_type {
            Ok(Instance::clone(&self.view))
        } else {
            self.parent.resolve_any(key)
        }
    }

    fn is_bound(&self, key: TypeKey) -> bool {
        key == self.view_type || self.parent.is_bound(key)
    }
}
