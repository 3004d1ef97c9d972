//! Mediator capability contract
//!
//! A mediator holds the behavior of exactly one live view. It is owned by the
//! mediation map for as long as its view is mapped, so every lifecycle hook
//! receives `&mut self`.

use std::any::Any;
use std::sync::Arc;

use downcast_rs::{Downcast, impl_downcast};

use crate::error::Result;
use crate::ports::injection::Injector;

/// Opaque host handle for the scene object a mediator is attached to
pub type ContextView = Arc<dyn Any + Send + Sync>;

/// Lifecycle hooks invoked by the mediation binder
///
/// The binder calls, in order: [`inject`](Mediator::inject),
/// [`pre_register`](Mediator::pre_register),
/// [`on_register`](Mediator::on_register), then
/// [`on_enabled`](Mediator::on_enabled) when the view is enabled.
/// [`on_remove`](Mediator::on_remove) runs exactly once when the view is
/// destroyed.
///
/// The mediator is owned by the mediation map, so it must hold its view
/// through a [`Weak`](std::sync::Weak) reference (see
/// `Injector::resolve_weak`). A strong reference keeps a view that the host
/// dropped without DESTROYED alive, and its entry is never pruned.
pub trait Mediator: Downcast + Send + Sync {
    /// Receive dependencies; the mediated view itself resolves by its type
    fn inject(&mut self, _injector: &dyn Injector) -> Result<()> {
        Ok(())
    }

    /// Prepare state that registration depends on
    fn pre_register(&mut self) {}

    /// Main activation point
    fn on_register(&mut self) {}

    /// Teardown when the view is destroyed
    fn on_remove(&mut self) {}

    fn on_enabled(&mut self) {}

    fn on_disabled(&mut self) {}

    /// Host handle of the owning view, when the host provides one
    fn context_view(&self) -> Option<ContextView> {
        None
    }
}

impl_downcast!(Mediator);
