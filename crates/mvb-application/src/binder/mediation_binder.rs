//! Mediation binder state machine
//!
//! Reacts to lifecycle triggers raised by the host:
//!
//! - **AWAKE**: registers the view, recursively awakes its children, injects
//!   the view, then creates, injects and registers its mediator when the view
//!   type is bound.
//! - **DESTROYED**: removes the mediator and runs its `on_remove` hook. A view
//!   that was never mediated is a no-op.
//! - **ENABLED / DISABLED**: forwarded to the mapped mediator, if any.
//!
//! All processing is synchronous and requires `&mut self`, so triggers are
//! serialized by ownership.

use std::sync::Arc;

use mvb_domain::constants::DEFAULT_MAX_MEDIATION_DEPTH;
use mvb_domain::error::{Error, Result};
use mvb_domain::events::MediationEvent;
use mvb_domain::ports::{Injector, Mediator, View, ViewRef};
use mvb_domain::value_objects::{TypeKey, ViewId};
use tracing::{debug, trace, warn};

use super::binding::{BindingBuilder, MediationBinding, MediationBindings};
use super::mediation_map::MediationMap;
use super::scoped_injector::ViewScopedInjector;
use crate::ports::host::MediationHost;

/// Binds view types to mediator types and manages one mediator per live view
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use mvb_application::{DefaultHost, MediationBinder};
/// use mvb_domain::{Mediator, MediationEvent, NullInjector, View, ViewRef, ViewState};
///
/// #[derive(Default)]
/// struct ScoreView { state: ViewState }
///
/// impl View for ScoreView {
///     fn registered_with_context(&self) -> bool { self.state.registered_with_context() }
///     fn set_registered_with_context(&self, value: bool) {
///         self.state.set_registered_with_context(value)
///     }
/// }
///
/// #[derive(Default)]
/// struct ScoreMediator;
/// impl Mediator for ScoreMediator {}
///
/// let mut binder = MediationBinder::new(Arc::new(NullInjector), Arc::new(DefaultHost));
/// binder.bind::<ScoreView>().to::<ScoreMediator>();
///
/// let view: ViewRef = Arc::new(ScoreView::default());
/// binder.trigger(MediationEvent::Awake, &view)?;
/// assert!(binder.mediator_for::<ScoreMediator>(&view).is_some());
///
/// binder.trigger(MediationEvent::Destroyed, &view)?;
/// assert!(binder.mediators().is_empty());
/// # Ok::<(), mvb_domain::Error>(())
/// ```
pub struct MediationBinder {
    bindings: MediationBindings,
    mediators: MediationMap,
    injector: Arc<dyn Injector>,
    host: Arc<dyn MediationHost>,
    max_depth: usize,
}

impl MediationBinder {
    /// Create a binder with the default depth ceiling
    pub fn new(injector: Arc<dyn Injector>, host: Arc<dyn MediationHost>) -> Self {
        Self {
            bindings: MediationBindings::new(),
            mediators: MediationMap::new(),
            injector,
            host,
            max_depth: DEFAULT_MAX_MEDIATION_DEPTH,
        }
    }

    /// Override the nesting ceiling past which AWAKE fails with
    /// `MediatorViewStackOverflow`
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn host(&self) -> &Arc<dyn MediationHost> {
        &self.host
    }

    pub fn injector(&self) -> &Arc<dyn Injector> {
        &self.injector
    }

    // ========================================================================
    // Bindings
    // ========================================================================

    /// Start a binding for view type `V`
    ///
    /// Self-bindings are accepted here and rejected when the view awakes.
    pub fn bind<V: View>(&mut self) -> BindingBuilder<'_> {
        self.bindings.bind::<V>()
    }

    /// Remove the binding for view type `V`
    ///
    /// Mediators already created for `V` stay mapped until their view is
    /// destroyed.
    pub fn unbind<V: View>(&mut self) -> Option<MediationBinding> {
        self.bindings.remove(TypeKey::of::<V>())
    }

    pub fn get_binding(&self, view_type: TypeKey) -> Option<&MediationBinding> {
        self.bindings.get(view_type)
    }

    pub fn bindings(&self) -> &MediationBindings {
        &self.bindings
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    // ========================================================================
    // Mediation map queries
    // ========================================================================

    pub fn mediators(&self) -> &MediationMap {
        &self.mediators
    }

    /// Whether `view` currently has a mediator in the map
    pub fn has_mediator(&self, view: &ViewRef) -> bool {
        self.mediators.contains(view)
    }

    /// The mediator of `view`, if mapped and of type `M`
    pub fn mediator_for<M: Mediator>(&self, view: &ViewRef) -> Option<&M> {
        self.mediators
            .get(view)
            .and_then(|entry| entry.mediator().downcast_ref::<M>())
    }

    // ========================================================================
    // Triggers
    // ========================================================================

    /// Deliver a lifecycle event for `view`
    ///
    /// # Errors
    ///
    /// AWAKE fails with a mediation error of kind `MediatorViewStackOverflow`
    /// when the view type is bound into a cycle or nesting exceeds the depth
    /// ceiling, and with the host's null-mediator error when no mediator
    /// could be created. Injection failures propagate unchanged. The other
    /// events never fail.
    pub fn trigger(&mut self, event: MediationEvent, view: &ViewRef) -> Result<()> {
        trace!(event = %event, view = %ViewId::of(view), view_type = %view.view_type(), "Mediation trigger");

        match event {
            MediationEvent::Awake => self.awake(view, 0),
            MediationEvent::Destroyed => {
                self.unmap_view(view);
                Ok(())
            }
            MediationEvent::Enabled => {
                if let Some(entry) = self.mediators.get_mut(view) {
                    entry.mediator_mut().on_enabled();
                }
                Ok(())
            }
            MediationEvent::Disabled => {
                if let Some(entry) = self.mediators.get_mut(view) {
                    entry.mediator_mut().on_disabled();
                }
                Ok(())
            }
        }
    }

    /// Register and inject `view` and its children without mapping `view`
    ///
    /// Children are still fully awoken, including mediator creation.
    pub fn inject_view_and_children(&mut self, view: &ViewRef) -> Result<()> {
        self.inject_tree(view, 0)
    }

    /// Remove mediators whose view was dropped without a DESTROYED trigger
    ///
    /// Each removed mediator gets its `on_remove` hook. The host is not
    /// consulted since the view no longer exists. Returns the number removed.
    pub fn prune_orphans(&mut self) -> usize {
        let orphans = self.mediators.take_orphans();
        let count = orphans.len();
        for entry in orphans {
            warn!(
                view_type = %entry.view_type(),
                mediator_type = %entry.mediator_type(),
                "Removing mediator of a view dropped without DESTROYED"
            );
            entry.into_mediator().on_remove();
        }
        count
    }

    fn awake(&mut self, view: &ViewRef, depth: usize) -> Result<()> {
        self.inject_tree(view, depth)?;

        let view_type = view.view_type();
        if let Some(binding) = self.bindings.get(view_type).cloned() {
            self.map_view(view, &binding)?;
        } else {
            trace!(view_type = %view_type, "No mediation binding, view injected only");
        }
        Ok(())
    }

    fn inject_tree(&mut self, view: &ViewRef, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::stack_overflow(format!(
                "View processing exceeded the maximum depth of {} at {}",
                self.max_depth,
                view.view_type().name()
            )));
        }

        view.set_registered_with_context(true);

        let root = ViewId::of(view);
        let children = self.host.child_views(view);
        for child in children.iter().rev() {
            if ViewId::of(child) == root || !child.should_register() {
                continue;
            }
            if child.auto_register_with_context() && child.registered_with_context() {
                trace!(view_type = %child.view_type(), "Child already registered, skipping");
                continue;
            }
            child.set_registered_with_context(true);
            self.awake(child, depth + 1)?;
        }

        view.inject(self.injector.as_ref())
    }

    fn map_view(&mut self, view: &ViewRef, binding: &MediationBinding) -> Result<()> {
        let view_type = binding.view_type();
        let mediator_type = binding.mediator_type();

        if let Some(chain) = self.bindings.find_cycle(view_type) {
            let path: Vec<&str> = chain.iter().map(TypeKey::short_name).collect();
            return Err(Error::stack_overflow(format!(
                "{} is mapped to itself through {}. The result would be a stack overflow.",
                view_type.name(),
                path.join(" -> ")
            )));
        }

        if self.mediators.contains(view) || self.host.has_mediator(view, mediator_type) {
            debug!(view_type = %view_type, mediator_type = %mediator_type, "View already mediated");
            return Ok(());
        }

        let Some(mut mediator) = self.host.create_mediator(view, binding) else {
            return Err(self.host.null_mediator_error(view_type, mediator_type));
        };

        let scope = ViewScopedInjector::new(self.injector.as_ref(), view);
        mediator.inject(&scope)?;
        self.mediators.add(view, mediator_type, mediator)?;

        if let Some(entry) = self.mediators.get_mut(view) {
            let mediator = entry.mediator_mut();
            mediator.pre_register();
            mediator.on_register();
            if view.enabled() {
                mediator.on_enabled();
            }
        }

        debug!(
            view = %ViewId::of(view),
            view_type = %view_type,
            mediator_type = %mediator_type,
            "Mediator registered"
        );
        Ok(())
    }

    fn unmap_view(&mut self, view: &ViewRef) {
        let Some(entry) = self.mediators.remove(view) else {
            trace!(view_type = %view.view_type(), "DESTROYED on unmediated view");
            return;
        };

        let mediator_type = entry.mediator_type();
        let mut mediator = entry.into_mediator();
        mediator.on_remove();
        self.host.destroy_mediator(view, mediator);

        debug!(
            view_type = %view.view_type(),
            mediator_type = %mediator_type,
            "Mediator removed"
        );
    }
}

impl std::fmt::Debug for MediationBinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediationBinder")
            .field("host", &self.host.name())
            .field("bindings", &self.bindings.len())
            .field("mediators", &self.mediators.len())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
