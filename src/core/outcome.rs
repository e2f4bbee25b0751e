//! The `Outcome` value and its combinators.
//!
//! An outcome is either a success carrying a value or a failure carrying a
//! [`FailureMeta`] and, optionally, the [`CaughtError`] it was diagnosed from.
//! Combinators never mutate; each returns a new outcome. Once a chain fails,
//! every later success-only step is skipped and the original failure flows
//! through untouched.

use super::caught::{capture, BoxError, CaughtError};
use super::failure::{Failure, FailureMeta};
use super::sink::{LogSink, TracingSink};

/// Success/failure result of a fallible computation.
///
/// Errors returned or panics raised by the closures given to [`Outcome::of`],
/// [`Outcome::on_success_map`] and [`Outcome::on_success_flat_map`] (and their
/// `try_` variants) are captured and turned into a failure with code `0`.
///
/// An absorbed panic still runs the process panic hook first, so the default
/// hook prints its "thread panicked" message (and a backtrace when
/// `RUST_BACKTRACE` is set) to stderr, outside any [`LogSink`].
///
/// # Example
///
/// ```rust
/// use outcome::Outcome;
///
/// let outcome = Outcome::with(2)
///     .on_success_map(|x| x + 1)
///     .on_success_flat_map(|x| Outcome::with(x * 10));
///
/// assert_eq!(outcome.value(), Some(&30));
///
/// let failed = Outcome::with(5)
///     .on_success_flat_map(|_| Outcome::<i32>::failure(42, "bad"))
///     .on_success_map(|x| x + 1);
///
/// assert_eq!(failed.failure_meta().map(|m| m.code()), Some(42));
/// assert!(failed.exception_caught().is_none());
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct Outcome<T> {
    inner: Result<T, Failure>,
}

impl Outcome<()> {
    /// A success carrying no value.
    ///
    /// The absent value is `()`, so [`Outcome::value`] returns `Some(&())`,
    /// not `None`.
    pub fn success() -> Self {
        Self::with(())
    }
}

impl<T> Outcome<T> {
    /// A success wrapping `value`. Use `Outcome<Option<V>>` for a value that
    /// may be absent.
    pub fn with(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// Run `supplier`, capturing a panic as a failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let ok = Outcome::of(|| 5);
    /// assert_eq!(ok.value(), Some(&5));
    ///
    /// let failed = Outcome::<i32>::of(|| panic!("out of range"));
    /// assert_eq!(failed.failure_meta().unwrap().message(), "out of range");
    /// assert!(failed.exception_caught().unwrap().is_panic());
    /// ```
    pub fn of<F>(supplier: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Outcome::<()>::success().on_success_map(|()| supplier())
    }

    /// Run a fallible `supplier`, capturing a returned error or a panic.
    pub fn try_of<F, E>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        Outcome::<()>::success().on_success_try_map(|()| supplier())
    }

    /// A failure the caller chose to report. Never carries a captured error.
    pub fn failure(code: i32, message: impl Into<String>) -> Self {
        Self::failed(Failure::reported(FailureMeta::new(code, message)))
    }

    /// Same as [`Outcome::failure`] with code `0`.
    pub fn failure_message(message: impl Into<String>) -> Self {
        Self::failure(0, message)
    }

    fn failed(failure: Failure) -> Self {
        Self {
            inner: Err(failure),
        }
    }

    fn caught(error: CaughtError) -> Self {
        Self::failed(Failure::caught(error))
    }

    /// Whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        self.inner.is_ok()
    }

    /// Whether this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        self.inner.is_err()
    }

    /// The success value, or `None` on failure.
    pub fn value(&self) -> Option<&T> {
        self.inner.as_ref().ok()
    }

    /// Consume the outcome, keeping only the success value.
    pub fn into_value(self) -> Option<T> {
        self.inner.ok()
    }

    /// The failure classification, or `None` on success.
    pub fn failure_meta(&self) -> Option<&FailureMeta> {
        self.as_failure().map(Failure::meta)
    }

    /// The error or panic a failure was diagnosed from, if any.
    pub fn exception_caught(&self) -> Option<&CaughtError> {
        self.as_failure().and_then(Failure::exception_caught)
    }

    /// The failure half, if this outcome failed.
    pub fn as_failure(&self) -> Option<&Failure> {
        self.inner.as_ref().err()
    }

    /// Borrow the outcome as a standard `Result`.
    pub fn as_result(&self) -> Result<&T, &Failure> {
        self.inner.as_ref()
    }

    /// Leave the outcome world, e.g. to propagate the failure with `?`.
    pub fn into_result(self) -> Result<T, Failure> {
        self.inner
    }

    /// Apply `mapper` to a success value. Failures pass through and `mapper`
    /// is not called. A panic inside `mapper` becomes a failure.
    pub fn on_success_map<R, F>(self, mapper: F) -> Outcome<R>
    where
        F: FnOnce(T) -> R,
    {
        self.on_success_flat_map(|value| Outcome::with(mapper(value)))
    }

    /// Like [`Outcome::on_success_map`] for a fallible `mapper`; a returned
    /// error becomes a failure exactly as a panic does.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use std::num::ParseIntError;
    ///
    /// let parsed = Outcome::with("12x").on_success_try_map(|s| s.parse::<i32>());
    ///
    /// assert_eq!(parsed.failure_meta().unwrap().code(), 0);
    /// assert!(parsed
    ///     .exception_caught()
    ///     .and_then(|e| e.downcast_ref::<ParseIntError>())
    ///     .is_some());
    /// ```
    pub fn on_success_try_map<R, E, F>(self, mapper: F) -> Outcome<R>
    where
        F: FnOnce(T) -> Result<R, E>,
        E: Into<BoxError>,
    {
        self.on_success_flat_map(|value| match mapper(value) {
            Ok(mapped) => Outcome::with(mapped),
            Err(error) => Outcome::caught(CaughtError::from_boxed(error.into())),
        })
    }

    /// Chain a step that itself produces an outcome.
    ///
    /// On success the outcome returned by `mapper` is passed through as is,
    /// success or failure. On failure `mapper` is not called and the failure
    /// is carried over with its captured error.
    pub fn on_success_flat_map<R, F>(self, mapper: F) -> Outcome<R>
    where
        F: FnOnce(T) -> Outcome<R>,
    {
        match self.inner {
            Ok(value) => capture(|| mapper(value)).unwrap_or_else(Outcome::caught),
            Err(failure) => Outcome::failed(failure),
        }
    }

    /// Reclassify a failure that was diagnosed from a captured error.
    ///
    /// Successes and reported failures are returned unchanged and
    /// `failure_meta_supplier` is not called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::{FailureMeta, Outcome};
    ///
    /// let outcome = Outcome::with("abc")
    ///     .on_success_try_map(|s| s.parse::<u16>())
    ///     .on_exception_customize(|| FailureMeta::new(400, "port must be numeric"));
    ///
    /// assert_eq!(
    ///     outcome.failure_meta(),
    ///     Some(&FailureMeta::new(400, "port must be numeric"))
    /// );
    /// assert!(outcome.exception_caught().is_some());
    /// ```
    pub fn on_exception_customize<F>(self, failure_meta_supplier: F) -> Self
    where
        F: FnOnce() -> FailureMeta,
    {
        match self.inner {
            Err(failure) if failure.exception_caught().is_some() => {
                Self::failed(failure.reclassify(failure_meta_supplier()))
            }
            inner => Self { inner },
        }
    }

    /// Hand `self` to `consumer` for side effects and return it unchanged.
    ///
    /// A panic in `consumer` is logged through [`TracingSink`] and otherwise
    /// ignored.
    pub fn peek<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&Self),
    {
        self.peek_with(&TracingSink, consumer)
    }

    /// [`Outcome::peek`] with an explicit sink for the consumer's panic.
    pub fn peek_with<F>(self, sink: &dyn LogSink, consumer: F) -> Self
    where
        F: FnOnce(&Self),
    {
        if let Err(error) = capture(|| consumer(&self)) {
            sink.info_with_cause(
                "Outcome consumer invoked in 'peek' method panicked",
                Some(&error),
            );
        }
        self
    }

    /// Emit one INFO line describing this outcome through [`TracingSink`].
    ///
    /// Successes log `"<prefix>: Success"`, failures log
    /// `"<prefix>: Failure. Code: <code>, message: <message>"` with the
    /// captured error as cause.
    pub fn log(self, prefix: &str) -> Self {
        self.log_with(&TracingSink, prefix)
    }

    /// [`Outcome::log`] with an explicit sink.
    pub fn log_with(self, sink: &dyn LogSink, prefix: &str) -> Self {
        match &self.inner {
            Ok(_) => sink.info(&format!("{prefix}: Success")),
            Err(failure) => {
                sink.info_with_cause(&format!("{prefix}: {failure}"), failure.exception_caught())
            }
        }
        self
    }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
