#![forbid(unsafe_code)]

//! Tracing integration tests.
//!
//! Layout spans enabled:
//!   cargo test -p treedraw --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p treedraw --test tracing_tests -- zero_overhead

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing_subscriber::layer::SubscriberExt;
use treedraw::generate::full_tree;

/// A captured span with its fields.
#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

/// A tracing Layer that records every span created.
struct SpanCapture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for SpanCapture {
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<CapturedSpan> {
    let spans = Arc::new(Mutex::new(Vec::new()));
    let layer = SpanCapture {
        spans: spans.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = spans.lock().unwrap().clone();
    captured
}

#[cfg(feature = "tracing")]
#[test]
fn layout_emits_one_span_per_node() {
    let tree = full_tree("*", 3, 2);
    let spans = capture(|| {
        let _ = tree.to_string();
    });

    let tree_spans: Vec<_> = spans.iter().filter(|s| s.name == "layout_tree").collect();
    assert_eq!(tree_spans.len(), 1);
    assert_eq!(tree_spans[0].fields.get("nodes").map(String::as_str), Some("7"));

    let node_spans: Vec<_> = spans.iter().filter(|s| s.name == "layout_node").collect();
    assert_eq!(node_spans.len(), tree.len());
    let root_span = node_spans
        .iter()
        .find(|s| s.fields.get("node").map(String::as_str) == Some("0"))
        .expect("root span");
    assert_eq!(root_span.fields.get("children").map(String::as_str), Some("2"));
}

#[cfg(not(feature = "tracing"))]
#[test]
fn zero_overhead_without_feature() {
    let tree = full_tree(1_u8, 4, 3);
    let spans = capture(|| {
        let _ = tree.to_string();
    });
    let seen: Vec<(&str, usize)> = spans
        .iter()
        .map(|s| (s.name.as_str(), s.fields.len()))
        .collect();
    assert!(seen.is_empty(), "unexpected spans: {seen:?}");
}
