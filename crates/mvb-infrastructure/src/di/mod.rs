//! Dependency Injection
//!
//! ```text
//! linkme (compile-time)        dill Catalog (runtime)
//! ─────────────────────        ──────────────────────
//! MEDIATION_HOSTS       →      resolve_mediation_host()
//!                                     ↓
//!                              CatalogBuilder::add_value(..)
//!                                     ↓
//!                              MediationContext::from_catalog()
//!                                     ↓
//!                              create_binder() → MediationBinder
//! ```

pub mod bootstrap;
pub mod catalog;
pub mod injection_binder;

pub use bootstrap::{MediationContext, init_context, init_context_with_host};
pub use catalog::{MediationHostHandle, build_catalog};
pub use injection_binder::{InjectionBinder, InjectionBindingBuilder};
