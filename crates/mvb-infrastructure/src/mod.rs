//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain
//! layers.
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML/env configuration via figment |
//! | [`di`] | Injection binder, dill catalog and mediation context |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Hosts
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Built-in mediation hosts registered through linkme |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod adapters;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, MediationConfig};
pub use di::{InjectionBinder, MediationContext, init_context};
pub use error_ext::ErrorContext;
