/*!
 * Error types for argument checks.
 *
 * Every check fails with a single `ArgumentError`. The variant is the failure
 * kind; the payload carries the parameter label and the rendered message.
 * A caller-supplied message replaces the generated one but never changes
 * the kind.
 */

use log::debug;
use thiserror::Error;

/// Result of an argument check: the validated value or the violation.
pub type Result<T> = std::result::Result<T, ArgumentError>;

/// Conceptual category of a failed check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// A value was absent where presence is required
    NullArgument,

    /// A structural constraint was violated (empty, blank, capability, bounds order, elements)
    InvalidArgument,

    /// A comparison, range, sign or NaN-exclusion constraint was violated
    OutOfRange,

    /// A value is not a declared member of its enumeration
    InvalidEnum,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::NullArgument => "null argument",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::InvalidEnum => "invalid enum",
        };
        write!(f, "{}", name)
    }
}

/// Error raised by a failed argument check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ArgumentError {
    /// Value was absent
    #[error("{message}")]
    NullArgument {
        /// Label of the offending parameter
        param: String,
        /// Rendered or custom message
        message: String,
    },

    /// Structural constraint violated
    #[error("{message}")]
    InvalidArgument {
        /// Label of the offending parameter
        param: String,
        /// Rendered or custom message
        message: String,
    },

    /// Value outside the accepted bounds
    #[error("{message}")]
    OutOfRange {
        /// Label of the offending parameter
        param: String,
        /// Rendered or custom message
        message: String,
    },

    /// Value is not a declared enum member
    #[error("{message}")]
    InvalidEnum {
        /// Label of the offending parameter
        param: String,
        /// Rendered or custom message
        message: String,
    },
}

impl ArgumentError {
    /// Build an error of the given kind.
    pub fn new(kind: ErrorKind, param: impl Into<String>, message: impl Into<String>) -> Self {
        let param = param.into();
        let message = message.into();
        match kind {
            ErrorKind::NullArgument => Self::NullArgument { param, message },
            ErrorKind::InvalidArgument => Self::InvalidArgument { param, message },
            ErrorKind::OutOfRange => Self::OutOfRange { param, message },
            ErrorKind::InvalidEnum => Self::InvalidEnum { param, message },
        }
    }

    /// Build the error for a failed check.
    ///
    /// The generated text is only rendered when no custom message was supplied.
    /// An empty custom message counts as absent.
    pub(crate) fn raise(
        kind: ErrorKind,
        param: &str,
        custom: Option<&str>,
        generated: impl FnOnce() -> String,
    ) -> Self {
        let message = match custom.filter(|message| !message.is_empty()) {
            Some(message) => message.to_string(),
            None => generated(),
        };
        debug!("argument check failed: kind={} param={} message={}", kind, param, message);
        Self::new(kind, param, message)
    }

    /// Failure category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NullArgument { .. } => ErrorKind::NullArgument,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::InvalidEnum { .. } => ErrorKind::InvalidEnum,
        }
    }

    /// Label of the parameter that failed
    pub fn param(&self) -> &str {
        match self {
            Self::NullArgument { param, .. }
            | Self::InvalidArgument { param, .. }
            | Self::OutOfRange { param, .. }
            | Self::InvalidEnum { param, .. } => param,
        }
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        match self {
            Self::NullArgument { message, .. }
            | Self::InvalidArgument { message, .. }
            | Self::OutOfRange { message, .. }
            | Self::InvalidEnum { message, .. } => message,
        }
    }
}
