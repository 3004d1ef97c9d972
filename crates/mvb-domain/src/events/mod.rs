//! Lifecycle events delivered to the mediation binder

pub mod mediation_event;

pub use mediation_event::MediationEvent;
