//! View → mediator bindings
//!
//! A binding is keyed on the exact concrete view type. It names the mediator
//! type and, unless the host attaches mediators itself, carries the factory
//! that builds one.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use mvb_domain::ports::{Mediator, View, ViewRef};
use mvb_domain::value_objects::TypeKey;

/// Builds a mediator for a view; `None` means nothing could be created
pub type MediatorFactory = Arc<dyn Fn(&ViewRef) -> Option<Box<dyn Mediator>> + Send + Sync>;

/// Declared mapping from one view type to one mediator type
#[derive(Clone)]
pub struct MediationBinding {
    view_type: TypeKey,
    mediator_type: TypeKey,
    factory: Option<MediatorFactory>,
}

impl MediationBinding {
    pub fn view_type(&self) -> TypeKey {
        self.view_type
    }

    pub fn mediator_type(&self) -> TypeKey {
        self.mediator_type
    }

    /// Whether the binding can build its own mediator
    pub fn has_factory(&self) -> bool {
        self.factory.is_some()
    }

    /// Run the factory, `None` when there is no factory or it declined
    pub fn create(&self, view: &ViewRef) -> Option<Box<dyn Mediator>> {
        self.factory.as_ref().and_then(|factory| factory(view))
    }
}

impl fmt::Debug for MediationBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediationBinding")
            .field("view_type", &self.view_type)
            .field("mediator_type", &self.mediator_type)
            .field("has_factory", &self.has_factory())
            .finish()
    }
}

/// All bindings of a binder, keyed by view type
#[derive(Debug, Clone, Default)]
pub struct MediationBindings {
    entries: HashMap<TypeKey, MediationBinding>,
}

impl MediationBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a binding for view type `V`
    pub fn bind<V: View>(&mut self) -> BindingBuilder<'_> {
        BindingBuilder {
            bindings: self,
            view_type: TypeKey::of::<V>(),
        }
    }

    /// Store a binding, replacing any previous one for the same view type
    pub fn insert(&mut self, binding: MediationBinding) -> Option<MediationBinding> {
        self.entries.insert(binding.view_type, binding)
    }

    pub fn remove(&mut self, view_type: TypeKey) -> Option<MediationBinding> {
        self.entries.remove(&view_type)
    }

    pub fn get(&self, view_type: TypeKey) -> Option<&MediationBinding> {
        self.entries.get(&view_type)
    }

    pub fn contains(&self, view_type: TypeKey) -> bool {
        self.entries.contains_key(&view_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediationBinding> {
        self.entries.values()
    }

    /// Follow the binding chain starting at `view_type`
    ///
    /// Returns the chain when it comes back to a type already on it, e.g.
    /// `[A, A]` for a self-binding or `[A, B, A]` for a two-step loop.
    /// A chain that ends at an unbound mediator type is acyclic.
    pub fn find_cycle(&self, view_type: TypeKey) -> Option<Vec<TypeKey>> {
        let mut chain = vec![view_type];
        let mut current = self.entries.get(&view_type)?.mediator_type;

        loop {
            let seen = chain.contains(&current);
            chain.push(current);
            if seen {
                return Some(chain);
            }
            current = self.entries.get(&current)?.mediator_type;
        }
    }
}

/// Fluent builder returned by `bind::<V>()`
pub struct BindingBuilder<'a> {
    bindings: &'a mut MediationBindings,
    view_type: TypeKey,
}

impl<'a> BindingBuilder<'a> {
    /// Bind to `M`, built with `M::default()`
    pub fn to<M>(self) -> &'a MediationBinding
    where
        M: Mediator + Default,
    {
        self.to_factory::<M, _>(|_| Some(Box::new(M::default())))
    }

    /// Bind to `M`, built by `factory`
    pub fn to_factory<M, F>(self, factory: F) -> &'a MediationBinding
    where
        M: Mediator,
        F: Fn(&ViewRef) -> Option<Box<dyn Mediator>> + Send + Sync + 'static,
    {
        self.store(TypeKey::of::<M>(), Some(Arc::new(factory)))
    }

    /// Bind to the type `M` only; the host is expected to attach it
    pub fn to_type<M: ?Sized + 'static>(self) -> &'a MediationBinding {
        self.store(TypeKey::of::<M>(), None)
    }

    fn store(self, mediator_type: TypeKey, factory: Option<MediatorFactory>) -> &'a MediationBinding {
        let view_type = self.view_type;
        let bindings = self.bindings;
        bindings.insert(MediationBinding {
            view_type,
            mediator_type,
            factory,
        });
        let bindings: &'a MediationBindings = bindings;
        &bindings.entries[&view_type]
    }
}
