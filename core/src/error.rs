//! Errors reported by failed guard checks.
//!
//! Every error carries the name of the offending parameter and a complete,
//! human-readable message, e.g.
//! `Parameter "count" (int) must be less than 10, was 12`.
//!
//! # Error Categories
//!
//! - **Argument errors**: the value is not acceptable (equality, default and
//!   bitwise checks).
//!
//! - **Out-of-range errors**: the value falls outside an ordered bound
//!   (comparison and range checks, column lookups).

use thiserror::Error;

/// Error produced by a failed guard check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// The argument value is not acceptable.
    #[error("{message}")]
    Argument { name: String, message: String },

    /// The argument value is outside of the allowed range.
    #[error("{message}")]
    ArgumentOutOfRange { name: String, message: String },
}

impl GuardError {
    pub fn argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        GuardError::Argument {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn out_of_range(name: impl Into<String>, message: impl Into<String>) -> Self {
        GuardError::ArgumentOutOfRange {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Name of the parameter that failed the check.
    pub fn name(&self) -> &str {
        match self {
            GuardError::Argument { name, .. } | GuardError::ArgumentOutOfRange { name, .. } => {
                name
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            GuardError::Argument { message, .. }
            | GuardError::ArgumentOutOfRange { message, .. } => message,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, GuardError::ArgumentOutOfRange { .. })
    }
}
