//! Host Registry System
//!
//! Uses the `linkme` crate for compile-time registration of mediation hosts
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Host Registration Flow                      │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Host defines:      #[linkme::distributed_slice(HOSTS)]      │
//! │                        static ENTRY: MediationHostEntry = ...   │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static MEDIATION_HOSTS: [..] = [..]  │
//! │                              ↓                                  │
//! │  3. Resolver queries:  MEDIATION_HOSTS.iter()                   │
//! │                              ↓                                  │
//! │  4. Config selects:    "host = detached" → DetachedHost         │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use mvb_application::ports::registry::{MediationHostEntry, MEDIATION_HOSTS};
//!
//! #[linkme::distributed_slice(MEDIATION_HOSTS)]
//! static SCENE_HOST: MediationHostEntry = MediationHostEntry {
//!     name: "scene",
//!     description: "Attaches mediators as scene components",
//!     factory: |config| Ok(Arc::new(SceneHost::from_config(config)?)),
//! };
//! ```

pub mod host;

pub use host::{
    MEDIATION_HOSTS, MediationHostConfig, MediationHostEntry, list_mediation_hosts,
    resolve_mediation_host,
};
