//! Outcome: short-circuiting success/failure values
//!
//! An [`Outcome`] lets a caller compose a sequence of fallible steps without
//! errors or panics escaping across call boundaries. Each step runs inside a
//! capture boundary; whatever it raises becomes a failure value the caller
//! inspects explicitly.
//!
//! # Core Concepts
//!
//! - **Outcome**: Either a success carrying a value, or a failure
//! - **FailureMeta**: Immutable `(code, message)` classification of a failure
//! - **Captured error**: The error or panic a failure was diagnosed from,
//!   kept for later inspection and logging
//! - **Short-circuiting**: After the first failure, later success-only steps
//!   are skipped and the failure propagates unchanged
//!
//! # Example
//!
//! ```rust
//! use outcome::{FailureMeta, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     Outcome::with(raw)
//!         .on_success_map(str::trim)
//!         .on_success_try_map(|s| s.parse::<u16>())
//!         .on_exception_customize(|| FailureMeta::new(400, "port must be a number"))
//! }
//!
//! assert_eq!(parse_port(" 8080 ").into_value(), Some(8080));
//!
//! let failed = parse_port("http").log("parse_port");
//! assert_eq!(failed.failure_meta(), Some(&FailureMeta::new(400, "port must be a number")));
//! assert!(failed.exception_caught().is_some());
//! ```

pub mod core;

// Re-export commonly used types
pub use self::core::{
    BoxError, CaughtError, Failure, FailureMeta, LogSink, Outcome, Panicked, TracingSink,
    LOG_TARGET,
};
