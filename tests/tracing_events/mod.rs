//! Events emitted when the `tracing` feature is enabled.

use std::fmt;
use std::hint::black_box;
use std::sync::{Arc, Mutex};

use stack_rail::{capture, merge_stacks, ProgramCounter, Stack, MAX_DEPTH};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

#[derive(Clone, Default)]
struct Recorder {
    messages: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl Subscriber for Recorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.messages.lock().unwrap().push(visitor.0);
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

fn stack(addrs: &[usize]) -> Stack {
    addrs.iter().copied().map(ProgramCounter::new).collect()
}

#[inline(never)]
fn recurse(depth: usize) -> Stack {
    if depth == 0 {
        capture(0)
    } else {
        black_box(recurse(black_box(depth - 1)))
    }
}

#[test]
fn merge_emits_an_event() {
    let recorder = Recorder::default();
    let mut outer = stack(&[30, 2, 1]);
    let mut inner = stack(&[11, 2, 1]);

    let merged =
        tracing::subscriber::with_default(recorder.clone(), || merge_stacks(&mut outer, &mut inner));

    assert!(merged);
    assert_eq!(recorder.messages(), ["merged wrapped error stack"]);
}

#[test]
fn merge_without_shared_root_stays_silent() {
    let recorder = Recorder::default();
    let mut outer = stack(&[3, 2]);
    let mut inner = stack(&[5, 4]);

    tracing::subscriber::with_default(recorder.clone(), || merge_stacks(&mut outer, &mut inner));

    assert!(recorder.messages().is_empty());
}

#[test]
fn truncated_capture_emits_an_event() {
    let recorder = Recorder::default();

    let captured =
        tracing::subscriber::with_default(recorder.clone(), || recurse(MAX_DEPTH * 2));

    assert_eq!(captured.len(), MAX_DEPTH);
    assert!(recorder.messages().iter().any(|message| message == "stack capture truncated"));
}
