//! # Domain Layer
//!
//! Core types of the Mediated View Binder with no infrastructure
//! dependencies.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ports`] | `View`, `Mediator` and `Injector` capability contracts |
//! | [`value_objects`] | `TypeKey` and `ViewId` registry keys |
//! | [`events`] | Lifecycle triggers raised by the host |
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`constants`] | Shared defaults |

pub mod constants;
pub mod error;
pub mod events;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types
pub use error::{Error, MediationErrorKind, Result};
pub use events::MediationEvent;
pub use ports::{ContextView, Injectable, Injector, Mediator, NullInjector, View, ViewRef, ViewState};
pub use value_objects::{TypeKey, ViewId};
