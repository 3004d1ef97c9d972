//! Error handling types

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::value_objects::TypeKey;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Sub-reason carried by every mediation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediationErrorKind {
    /// A view type is (transitively) bound to itself, or mediation recursed
    /// past the configured depth ceiling
    MediatorViewStackOverflow,
    /// Mediator creation produced no usable instance
    NullMediator,
}

impl MediationErrorKind {
    /// Stable code used in log lines and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MediatorViewStackOverflow => "MEDIATOR_VIEW_STACK_OVERFLOW",
            Self::NullMediator => "NULL_MEDIATOR",
        }
    }
}

impl fmt::Display for MediationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for the Mediated View Binder
#[derive(Error, Debug)]
pub enum Error {
    /// Mediation failure raised from a trigger
    #[error("Mediation error [{kind}]: {message}")]
    Mediation {
        /// Sub-reason code
        kind: MediationErrorKind,
        /// Description of the failure
        message: String,
    },

    /// Dependency could not be resolved or injected
    #[error("Injection error: {message}")]
    Injection {
        /// Description of the injection failure
        message: String,
    },

    /// Binding registry misuse (duplicate mapping, unknown binding)
    #[error("Binding error: {message}")]
    Binding {
        /// Description of the binding error
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Mediation error creation methods
impl Error {
    /// Create a mediation error with an explicit kind
    pub fn mediation<S: Into<String>>(kind: MediationErrorKind, message: S) -> Self {
        Self::Mediation {
            kind,
            message: message.into(),
        }
    }

    /// A view type mapped (directly or through a chain) back to itself
    pub fn stack_overflow<S: Into<String>>(message: S) -> Self {
        Self::mediation(MediationErrorKind::MediatorViewStackOverflow, message)
    }

    /// Mediator creation returned nothing for a bound pair
    pub fn null_mediator(view_type: TypeKey, mediator_type: TypeKey) -> Self {
        Self::mediation(
            MediationErrorKind::NullMediator,
            format!(
                "The view: {} is mapped to mediator: {}. Mediator creation resulted in nothing, \
                 which probably means {} cannot be attached by the current host.",
                view_type.name(),
                mediator_type.name(),
                mediator_type.short_name()
            ),
        )
    }

    /// Sub-reason code when this is a mediation error
    pub fn mediation_kind(&self) -> Option<MediationErrorKind> {
        match self {
            Self::Mediation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

// Other error creation methods
impl Error {
    /// Create an injection error
    pub fn injection<S: Into<String>>(message: S) -> Self {
        Self::Injection {
            message: message.into(),
        }
    }

    /// Create a binding error
    pub fn binding<S: Into<String>>(message: S) -> Self {
        Self::Binding {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}
