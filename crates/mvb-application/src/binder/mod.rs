//! Mediation Binder
//!
//! Maps view types to mediator types and drives the per-view lifecycle:
//!
//! ```text
//! Unregistered ──AWAKE (bound)────▶ Mediated ─────┐
//!      │                                          ├──DESTROYED──▶ Unmediated
//!      └─────AWAKE (unbound)──▶ Registered ───────┘
//! ```

pub mod binding;
pub mod mediation_binder;
pub mod mediation_map;
mod scoped_injector;

pub use binding::{BindingBuilder, MediationBinding, MediationBindings, MediatorFactory};
pub use mediation_binder::MediationBinder;
pub use mediation_map::{MediationEntry, MediationMap};
