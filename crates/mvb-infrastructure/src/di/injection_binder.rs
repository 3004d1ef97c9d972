//! In-memory injection binder
//!
//! Default adapter for the [`Injector`] port. Bindings are keyed by
//! [`TypeKey`] and resolve to one of:
//!
//! | Binding | Resolution |
//! |---------|------------|
//! | `to_value` | the same shared instance every time |
//! | `to_new` | a fresh `T::default()` per resolution |
//! | `to_factory` | a fresh instance from the closure per resolution |
//! | `to_singleton` | created on first resolution, then shared |
//!
//! The binder is a cheap cloneable handle; clones share the same bindings.

use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use mvb_domain::error::{Error, Result};
use mvb_domain::ports::injection::Instance;
use mvb_domain::ports::{Injectable, Injector};
use mvb_domain::value_objects::TypeKey;
use tracing::trace;

type InstanceFactory = Arc<dyn Fn() -> Instance + Send + Sync>;

enum Provider {
    Value(Instance),
    Factory(InstanceFactory),
    Singleton {
        factory: InstanceFactory,
        instance: OnceLock<Instance>,
    },
}

impl Provider {
    fn provide(&self) -> Instance {
        match self {
            Self::Value(instance) => Instance::clone(instance),
            Self::Factory(factory) => factory(),
            Self::Singleton { factory, instance } => {
                Instance::clone(instance.get_or_init(|| factory()))
            }
        }
    }
}

/// Type-keyed injection container
#[derive(Clone, Default)]
pub struct InjectionBinder {
    bindings: Arc<RwLock<HashMap<TypeKey, Arc<Provider>>>>,
}

impl InjectionBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a binding for `T`, replacing any existing one when completed
    pub fn bind<T: Any + Send + Sync>(&self) -> InjectionBindingBuilder<'_, T> {
        InjectionBindingBuilder {
            binder: self,
            _marker: PhantomData,
        }
    }

    /// Remove the binding for `T`, returning whether one existed
    pub fn unbind<T: Any + Send + Sync>(&self) -> bool {
        self.bindings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&TypeKey::of::<T>())
            .is_some()
    }

    pub fn is_bound_type<T: Any + Send + Sync>(&self) -> bool {
        self.is_bound(TypeKey::of::<T>())
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a typed instance
    pub fn get<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
        let injector: &dyn Injector = self;
        injector.resolve::<T>()
    }

    /// Populate `target` from this binder
    pub fn inject_into(&self, target: &mut dyn Injectable) -> Result<()> {
        target.inject_from(self)
    }

    fn insert(&self, key: TypeKey, provider: Provider) {
        trace!(type_key = %key, "Injection binding registered");
        self.bindings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::new(provider));
    }
}

impl Injector for InjectionBinder {
    fn resolve_any(&self, key: TypeKey) -> Result<Instance> {
        // Clone the provider out so factories run without holding the lock
        let provider = self
            .bindings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
            .ok_or_else(|| Error::injection(format!("No binding for {}", key.name())))?;
        Ok(provider.provide())
    }

    fn is_bound(&self, key: TypeKey) -> bool {
        self.bindings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&key)
    }
}

impl std::fmt::Debug for InjectionBinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InjectionBinder")
            .field("bindings", &self.len())
            .finish()
    }
}

/// Fluent builder returned by [`InjectionBinder::bind`]
pub struct InjectionBindingBuilder<'a, T> {
    binder: &'a InjectionBinder,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Any + Send + Sync> InjectionBindingBuilder<'_, T> {
    /// Always resolve to `value`
    pub fn to_value(self, value: T) {
        self.to_arc(Arc::new(value));
    }

    /// Always resolve to the shared `value`
    pub fn to_arc(self, value: Arc<T>) {
        self.binder
            .insert(TypeKey::of::<T>(), Provider::Value(value));
    }

    /// Resolve to a fresh instance built by `factory`
    pub fn to_factory<F>(self, factory: F)
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.binder.insert(
            TypeKey::of::<T>(),
            Provider::Factory(Arc::new(move || Arc::new(factory()) as Instance)),
        );
    }

    /// Resolve to an instance built on first use and shared afterwards
    pub fn to_singleton_factory<F>(self, factory: F)
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.binder.insert(
            TypeKey::of::<T>(),
            Provider::Singleton {
                factory: Arc::new(move || Arc::new(factory()) as Instance),
                instance: OnceLock::new(),
            },
        );
    }
}

impl<T: Any + Send + Sync + Default> InjectionBindingBuilder<'_, T> {
    /// Resolve to a fresh `T::default()` each time
    pub fn to_new(self) {
        self.to_factory(T::default);
    }

    /// Resolve to one lazily created `T::default()`
    pub fn to_singleton(self) {
        self.to_singleton_factory(T::default);
    }
}
