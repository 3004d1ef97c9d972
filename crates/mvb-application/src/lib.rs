//! # Application Layer
//!
//! Mediation use cases built on the domain contracts.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`binder`] | `MediationBinder`, bindings and the mediation map |
//! | [`ports`] | `MediationHost` strategy port and the host registry |

pub mod binder;
pub mod ports;

pub use binder::{
    BindingBuilder, MediationBinder, MediationBinding, MediationBindings, MediationEntry,
    MediationMap, MediatorFactory,
};
pub use ports::host::{DefaultHost, MediationHost};
