//! Logging sinks used by the observation hooks.
//!
//! [`Outcome::log`](crate::Outcome::log) and [`Outcome::peek`](crate::Outcome::peek)
//! write to [`TracingSink`] unless a sink is passed explicitly through the
//! `*_with` variants.

use super::caught::CaughtError;
use std::error::Error;

/// `tracing` target used by [`TracingSink`].
pub const LOG_TARGET: &str = "outcome::Outcome";

/// Destination for informational log lines emitted by an outcome.
///
/// Implementations must not panic.
///
/// # Example
///
/// ```rust
/// use outcome::{CaughtError, LogSink, Outcome};
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct Lines(Mutex<Vec<String>>);
///
/// impl LogSink for Lines {
///     fn info_with_cause(&self, message: &str, _cause: Option<&CaughtError>) {
///         if let Ok(mut lines) = self.0.lock() {
///             lines.push(message.to_string());
///         }
///     }
/// }
///
/// let sink = Lines::default();
/// let _ = Outcome::with(1).log_with(&sink, "step");
///
/// assert_eq!(sink.0.lock().unwrap().as_slice(), ["step: Success"]);
/// ```
pub trait LogSink: Send + Sync {
    fn info(&self, message: &str) {
        self.info_with_cause(message, None);
    }

    fn info_with_cause(&self, message: &str, cause: Option<&CaughtError>);
}

/// Default sink: emits `tracing` events at INFO level on [`LOG_TARGET`].
///
/// The captured error, when present, is recorded as the `cause` field as an
/// error value, so subscribers see its source chain.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info_with_cause(&self, message: &str, cause: Option<&CaughtError>) {
        match cause {
            Some(cause) => tracing::info!(
                target: LOG_TARGET,
                cause = cause as &(dyn Error + 'static),
                "{message}"
            ),
            None => tracing::info!(target: LOG_TARGET, "{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<(String, bool)>>);

    impl LogSink for Recorder {
        fn info_with_cause(&self, message: &str, cause: Option<&CaughtError>) {
            self.0
                .lock()
                .unwrap()
                .push((message.to_string(), cause.is_some()));
        }
    }

    #[test]
    fn info_forwards_without_cause() {
        let sink = Recorder::default();
        sink.info("hello");

        assert_eq!(sink.0.lock().unwrap().as_slice(), [("hello".to_string(), false)]);
    }
}
