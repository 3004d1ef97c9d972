//! Application Ports
//!
//! Interfaces the mediation binder depends on, implemented by hosts in the
//! infrastructure layer or by embedding applications.

pub mod host;
pub mod registry;

pub use host::{DefaultHost, MediationHost};
pub use registry::{
    MEDIATION_HOSTS, MediationHostConfig, MediationHostEntry, list_mediation_hosts,
    resolve_mediation_host,
};
