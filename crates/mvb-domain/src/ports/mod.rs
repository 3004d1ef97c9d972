//! Domain Ports
//!
//! Capability contracts that concrete views and mediators satisfy, and the
//! narrow injection port the mediation core consumes.

pub mod injection;
pub mod mediator;
pub mod view;

pub use injection::{Injectable, Injector, NullInjector};
pub use mediator::{ContextView, Mediator};
pub use view::{View, ViewRef, ViewState};
