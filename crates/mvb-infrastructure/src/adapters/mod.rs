//! Built-in mediation hosts
//!
//! Each host registers itself in `MEDIATION_HOSTS` so configuration can
//! select it by name.

pub mod detached;
pub mod inject_only;

pub use detached::DetachedHost;
pub use inject_only::InjectOnlyHost;
