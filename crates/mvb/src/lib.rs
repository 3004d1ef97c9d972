//! # Mediated View Binder
//!
//! Binds views (nodes of a host's component tree) to mediators that hold
//! their behavior, creating exactly one mediator per live view and wiring
//! dependency injection into both.
//!
//! ## Example
//!
//! ```ignore
//! use mvb::{MediationConfig, MediationEvent, init_context};
//!
//! let context = init_context(MediationConfig::default())?;
//! context.injection_binder().bind::<Scoreboard>().to_singleton();
//!
//! let mut binder = context.create_binder();
//! binder.bind::<ScoreView>().to::<ScoreMediator>();
//! binder.trigger(MediationEvent::Awake, &view)?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - View/mediator contracts, type keys, events, errors
//! - `application` - Mediation binder, bindings, mediation map, host port
//! - `infrastructure` - Injection binder, hosts, config, logging, catalog

/// Domain layer - contracts and types
pub mod domain {
    pub use mvb_domain::*;
}

/// Application layer - mediation binder and host ports
pub mod application {
    pub use mvb_application::*;
}

/// Infrastructure layer - DI, config, hosts and logging
pub mod infrastructure {
    pub use mvb_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use domain::*;
pub use mvb_application::{DefaultHost, MediationBinder, MediationHost};
pub use mvb_infrastructure::{
    ConfigLoader, InjectionBinder, MediationConfig, MediationContext, init_context,
};
