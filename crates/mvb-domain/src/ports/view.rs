//! View capability contract
//!
//! A view is any node in the host's component tree that can be mediated.
//! Views are owned by the host and shared with the binder through
//! [`ViewRef`]; every mutable attribute therefore goes through `&self`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use downcast_rs::{DowncastSync, impl_downcast};

use crate::error::Result;
use crate::ports::injection::Injector;
use crate::value_objects::TypeKey;

/// Shared handle to a host-owned view
pub type ViewRef = Arc<dyn View>;

/// Capabilities every mediated view exposes to the binder
pub trait View: DowncastSync {
    /// Exact concrete type used for binding lookup
    fn view_type(&self) -> TypeKey {
        TypeKey::of::<Self>()
    }

    /// Whether the view needs a context to reach it
    ///
    /// Host-side policy: hosts consult it before raising AWAKE. The binder
    /// processes every view it is handed regardless.
    fn requires_context(&self) -> bool {
        true
    }

    /// Whether the binder has already processed this view
    fn registered_with_context(&self) -> bool;

    /// Set by the binder during AWAKE processing
    fn set_registered_with_context(&self, registered: bool);

    /// Policy flag: registration happens automatically on creation
    fn auto_register_with_context(&self) -> bool {
        true
    }

    /// Whether the view is eligible for registration when reached as a child
    fn should_register(&self) -> bool {
        true
    }

    /// Whether the view is currently enabled in the host
    fn enabled(&self) -> bool {
        true
    }

    /// Child views for recursive processing, possibly including `self`
    fn child_views(&self) -> Vec<ViewRef> {
        Vec::new()
    }

    /// Receive dependencies from the injector
    fn inject(&self, _injector: &dyn Injector) -> Result<()> {
        Ok(())
    }
}

impl_downcast!(sync View);

/// Reusable flag storage for [`View`] implementors
#[derive(Debug)]
pub struct ViewState {
    requires_context: AtomicBool,
    registered_with_context: AtomicBool,
    enabled: AtomicBool,
}

impl ViewState {
    /// Fresh, unregistered and enabled state
    pub fn new() -> Self {
        Self {
            requires_context: AtomicBool::new(true),
            registered_with_context: AtomicBool::new(false),
            enabled: AtomicBool::new(true),
        }
    }

    pub fn requires_context(&self) -> bool {
        self.requires_context.load(Ordering::Acquire)
    }

    pub fn set_requires_context(&self, value: bool) {
        self.requires_context.store(value, Ordering::Release);
    }

    pub fn registered_with_context(&self) -> bool {
        self.registered_with_context.load(Ordering::Acquire)
    }

    pub fn set_registered_with_context(&self, value: bool) {
        self.registered_with_context.store(value, Ordering::Release);
    }

    pub fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub fn set_enabled(&self, value: bool) {
        self.enabled.store(value, Ordering::Release);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
