//! Failure classification carried by a failed outcome.

use super::caught::CaughtError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Immutable `(code, message)` pair describing why an outcome failed.
///
/// Equality is structural. An absent message is the empty string.
///
/// # Example
///
/// ```rust
/// use outcome::FailureMeta;
///
/// let meta = FailureMeta::new(404, "not found");
/// assert_eq!(meta.code(), 404);
/// assert_eq!(meta.message(), "not found");
/// assert_eq!(meta, FailureMeta::new(404, "not found"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FailureMeta {
    code: i32,
    message: String,
}

impl FailureMeta {
    /// Build a classification from a code and a message.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The caller-assigned failure code.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// The failure message; empty when absent.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FailureMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// The failure half of an outcome.
///
/// Holds the failure classification and, when the failure was diagnosed from
/// an error or panic raised inside a composed step, the captured error.
/// Converting an outcome with [`Outcome::into_result`](crate::Outcome::into_result)
/// yields this type, so it can be propagated with `?`.
#[derive(Clone, Debug, Error)]
#[error("Failure. Code: {}, message: {}", .meta.code, .meta.message)]
pub struct Failure {
    meta: FailureMeta,
    #[source]
    exception: Option<CaughtError>,
}

impl Failure {
    pub(crate) fn reported(meta: FailureMeta) -> Self {
        Self {
            meta,
            exception: None,
        }
    }

    pub(crate) fn caught(error: CaughtError) -> Self {
        Self {
            meta: FailureMeta::new(0, error.to_string()),
            exception: Some(error),
        }
    }

    /// Replace the classification, keeping the captured error.
    pub(crate) fn reclassify(self, meta: FailureMeta) -> Self {
        Self {
            meta,
            exception: self.exception,
        }
    }

    /// The failure classification.
    pub fn meta(&self) -> &FailureMeta {
        &self.meta
    }

    /// Shorthand for `self.meta().code()`.
    pub fn code(&self) -> i32 {
        self.meta.code
    }

    /// Shorthand for `self.meta().message()`.
    pub fn message(&self) -> &str {
        &self.meta.message
    }

    /// The captured error, if this failure came from one.
    pub fn exception_caught(&self) -> Option<&CaughtError> {
        self.exception.as_ref()
    }
}
