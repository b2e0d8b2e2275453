//! Error types for parameter accumulation and validation.
//!
//! Only two operations in this crate can fail, and both are explicit calls:
//! [`MapParam::add_custom_filter`](crate::MapParam::add_custom_filter) rejects
//! reserved keys, and [`MapParam::check`](crate::MapParam::check) enforces the
//! pagination-requires-sorting rule. Everything else defaults silently;
//! malformed sort directions fall back to ascending, undecodable keywords are
//! simply not set, so routine accumulation never raises.

use serde::Serialize;
use std::fmt;

/// Error raised by the explicit, fallible `MapParam` operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ParamError {
    /// A custom filter key collides with one of the reserved parameter keys.
    ReservedKey {
        /// The offending key.
        key: String,
    },

    /// An explicit validation rule was violated.
    Validation {
        /// Stable rule code, e.g. `U007`.
        code: &'static str,
        /// Human-readable description of the violation.
        message: String,
    },
}

impl ParamError {
    pub(crate) fn reserved_key(key: impl Into<String>) -> Self {
        Self::ReservedKey { key: key.into() }
    }

    pub(crate) fn validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }

    /// Stable rule code for validation failures, `None` otherwise.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::ReservedKey { .. } => None,
            Self::Validation { code, .. } => Some(code),
        }
    }

    /// Logs the error through `tracing`. No output unless the caller has a
    /// subscriber installed.
    pub(crate) fn log(&self) {
        match self {
            Self::ReservedKey { key } => {
                tracing::warn!(key = %key, "custom filter rejected: key is reserved");
            }
            Self::Validation { code, message } => {
                tracing::warn!(code = %code, "validation failed: {message}");
            }
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedKey { key } => {
                write!(f, "cannot use reserved key '{key}' as a custom filter")
            }
            Self::Validation { code, message } => {
                write!(f, "{message} (error code: {code})")
            }
        }
    }
}

impl std::error::Error for ParamError {}
