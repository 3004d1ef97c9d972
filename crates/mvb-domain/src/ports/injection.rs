//! Injection Port
//!
//! The dependency-injection container is an external collaborator. The
//! mediation core only needs to resolve instances by [`TypeKey`]; binding
//! registration and scope policy belong to the adapter.

use std::any::Any;
use std::sync::{Arc, Weak};

use crate::error::{Error, Result};
use crate::value_objects::TypeKey;

/// Type-erased instance handed out by an injector
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Resolves injectable instances by type
///
/// # Example
///
/// ```
/// use mvb_domain::ports::{Injector, NullInjector};
///
/// let injector: &dyn Injector = &NullInjector;
/// assert!(injector.try_resolve::<String>().is_none());
/// ```
pub trait Injector: Send + Sync {
    /// Resolve an instance for `key`, failing when the type is unbound
    fn resolve_any(&self, key: TypeKey) -> Result<Instance>;

    /// Whether `key` currently has a binding
    fn is_bound(&self, key: TypeKey) -> bool;
}

impl dyn Injector + '_ {
    /// Resolve a typed instance
    pub fn resolve<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
        let key = TypeKey::of::<T>();
        self.resolve_any(key)?.downcast::<T>().map_err(|_| {
            Error::injection(format!(
                "Binding for {} produced an instance of a different type",
                key.name()
            ))
        })
    }

    /// Resolve a non-owning handle to a typed instance
    ///
    /// Mediators use this for their view so the mediation map never keeps
    /// a dropped view alive.
    pub fn resolve_weak<T: Any + Send + Sync>(&self) -> Result<Weak<T>> {
        self.resolve::<T>().map(|instance| Arc::downgrade(&instance))
    }

    /// Resolve a typed instance, `None` when unbound
    pub fn try_resolve<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        if self.is_bound(TypeKey::of::<T>()) {
            self.resolve::<T>().ok()
        } else {
            None
        }
    }
}

/// Something that receives dependencies from an injector
///
/// This is the Rust-side stand-in for attribute-driven field injection:
/// implementors pull what they need from the injector explicitly.
pub trait Injectable {
    /// Populate injectable state from `injector`
    fn inject_from(&mut self, injector: &dyn Injector) -> Result<()>;
}

/// Injector with no bindings
#[derive(Debug, Clone, Copy, Default)]
pub struct NullInjector;

impl Injector for NullInjector {
    fn resolve_any(&self, key: TypeKey) -> Result<Instance> {
        Err(Error::injection(format!("No binding for {}", key.name())))
    }

    fn is_bound(&self, _key: TypeKey) -> bool {
        false
    }
}
