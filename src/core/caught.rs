//! Errors captured at the boundary of a composed step.
//!
//! A step supplied to [`Outcome`](crate::Outcome) can fail in two ways: by
//! returning an error, or by panicking. Both are absorbed here into a
//! [`CaughtError`] so they never escape the combinator that ran the step.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use thiserror::Error;

/// Boxed error accepted from fallible steps.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Error recorded when a composed step panicked.
///
/// The message is the panic payload text, or empty when the payload was not
/// a string.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// The panic payload text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Opaque, shareable handle to an error raised inside a composed step.
///
/// Cloning is cheap and clones refer to the same underlying error, which can
/// be checked with [`CaughtError::ptr_eq`].
///
/// # Example
///
/// ```rust
/// use outcome::Outcome;
/// use std::num::ParseIntError;
///
/// let outcome = Outcome::try_of(|| "forty".parse::<i32>());
/// let caught = outcome.exception_caught().unwrap();
///
/// assert!(caught.downcast_ref::<ParseIntError>().is_some());
/// assert!(!caught.is_panic());
/// ```
#[derive(Clone)]
pub struct CaughtError(Arc<dyn Error + Send + Sync + 'static>);

impl CaughtError {
    /// Wrap an error in a new shared handle.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    pub(crate) fn from_boxed(error: BoxError) -> Self {
        Self(Arc::from(error))
    }

    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Self::new(Panicked {
            message: panic_message(payload.as_ref()),
        })
    }

    /// Whether the error was produced by a panic rather than a returned error.
    pub fn is_panic(&self) -> bool {
        self.downcast_ref::<Panicked>().is_some()
    }

    /// Borrow the captured error as its concrete type, if it is an `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Whether both handles point at the same captured error.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for CaughtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for CaughtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CaughtError").field(&self.0).finish()
    }
}

impl Error for CaughtError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

/// Run a caller-supplied step, converting a panic into a [`CaughtError`].
///
/// This is the only place panics are caught.
pub(crate) fn capture<R>(step: impl FnOnce() -> R) -> Result<R, CaughtError> {
    panic::catch_unwind(AssertUnwindSafe(step)).map_err(CaughtError::from_panic)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::new()
    }
}
