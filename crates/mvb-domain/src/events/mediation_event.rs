//! View lifecycle triggers
//!
//! The host raises one of these on a view; the binder reacts by creating,
//! notifying or removing the view's mediator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Lifecycle trigger raised by the host for a single view instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediationEvent {
    /// The view was created and should be registered and mediated
    Awake,
    /// The view is going away; its mediator must be removed
    Destroyed,
    /// The view became active in the host
    Enabled,
    /// The view became inactive in the host
    Disabled,
}

impl MediationEvent {
    /// All events, in lifecycle order
    pub const ALL: [MediationEvent; 4] = [
        MediationEvent::Awake,
        MediationEvent::Enabled,
        MediationEvent::Disabled,
        MediationEvent::Destroyed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Awake => "AWAKE",
            Self::Destroyed => "DESTROYED",
            Self::Enabled => "ENABLED",
            Self::Disabled => "DISABLED",
        }
    }
}

impl fmt::Display for MediationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediationEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::binding(format!("Unknown mediation event: {s}")))
    }
}
