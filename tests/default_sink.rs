//! Events emitted through the default `tracing` sink.
//!
//! Each test installs a capturing layer for its own thread with
//! `tracing::subscriber::with_default`.

use outcome::{Outcome, LOG_TARGET};
use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Captured {
    target: String,
    level: Level,
    message: String,
    cause: Option<String>,
    cause_is_error: bool,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl CaptureLayer {
    fn events(&self) -> Vec<Captured> {
        self.events.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct Fields {
    message: String,
    cause: Option<String>,
    cause_is_error: bool,
}

impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "cause" => self.cause = Some(format!("{value:?}")),
            _ => {}
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn Error + 'static)) {
        if field.name() == "cause" {
            self.cause = Some(value.to_string());
            self.cause_is_error = true;
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::default();
        event.record(&mut fields);
        self.events.lock().unwrap().push(Captured {
            target: event.metadata().target().to_string(),
            level: *event.metadata().level(),
            message: fields.message,
            cause: fields.cause,
            cause_is_error: fields.cause_is_error,
        });
    }
}

fn capture<F: FnOnce()>(body: F) -> Vec<Captured> {
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, body);
    layer.events()
}

fn event(message: &str, cause: Option<&str>) -> Captured {
    Captured {
        target: LOG_TARGET.to_string(),
        level: Level::INFO,
        message: message.to_string(),
        cause: cause.map(str::to_string),
        cause_is_error: cause.is_some(),
    }
}

#[test]
fn log_target_is_named_after_outcome() {
    assert_eq!(LOG_TARGET, "outcome::Outcome");
}

#[test]
fn log_success_emits_info_without_cause() {
    let events = capture(|| {
        let _ = Outcome::with(1).log("a");
    });

    assert_eq!(events, vec![event("a: Success", None)]);
}

#[test]
fn log_reported_failure_emits_info_without_cause() {
    let events = capture(|| {
        let _ = Outcome::<i32>::failure(3, "").log("c");
    });

    assert_eq!(events, vec![event("c: Failure. Code: 3, message: ", None)]);
}

#[test]
fn log_caught_failure_records_cause_as_error() {
    let events = capture(|| {
        let _ = Outcome::try_of(|| "x".parse::<i32>()).log("b");
    });

    assert_eq!(
        events,
        vec![event(
            "b: Failure. Code: 0, message: invalid digit found in string",
            Some("invalid digit found in string"),
        )]
    );
}

#[test]
fn peek_panic_goes_to_default_sink() {
    let events = capture(|| {
        let outcome = Outcome::with(5).peek(|_| panic!("observer down"));
        assert_eq!(outcome.into_value(), Some(5));
    });

    assert_eq!(
        events,
        vec![event(
            "Outcome consumer invoked in 'peek' method panicked",
            Some("observer down"),
        )]
    );
}

#[test]
fn quiet_peek_emits_nothing() {
    let events = capture(|| {
        let _ = Outcome::with(5).peek(|_| {});
    });

    assert!(events.is_empty());
}
