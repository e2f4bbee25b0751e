//! Core outcome types and logic.
//!
//! This module contains the whole of the outcome abstraction:
//! - `Outcome`, the short-circuiting success/failure value
//! - `FailureMeta` and `Failure`, the failure classification
//! - `CaughtError`, the handle to errors and panics absorbed from composed steps
//! - `LogSink`, the injectable destination of the observation hooks
//!
//! Everything here is pure apart from the logging done by `peek` and `log`.

mod caught;
mod failure;
mod outcome;
mod sink;

pub use caught::{BoxError, CaughtError, Panicked};
pub use failure::{Failure, FailureMeta};
pub use outcome::Outcome;
pub use sink::{LogSink, TracingSink, LOG_TARGET};
