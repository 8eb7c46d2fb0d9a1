//! In-memory capture of operation events for tests
//!
//! `init_test_capture` installs a global subscriber whose only layer keeps
//! every event in a shared buffer. Boundary fields (`op`, `event`,
//! `duration_ms`, `err.code`) and the record ids repositories attach are
//! lifted out of the raw field map so assertions can stay typed.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;
use workforce_core_types::schema::{
    EVENT_END_ERROR, FIELD_COMPONENT, FIELD_DURATION_MS, FIELD_EMPLOYEE_ID, FIELD_ERR_CODE,
    FIELD_EVENT, FIELD_OP, FIELD_REVIEW_ID, FIELD_ROW_COUNT,
};

/// One captured event
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub duration_ms: Option<u64>,
    pub err_code: Option<String>,
    pub review_id: Option<i64>,
    pub employee_id: Option<i64>,
    pub row_count: Option<u64>,
    /// Every field as rendered text, keyed by field name
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn from_fields(level: Level, fields: HashMap<String, String>) -> Self {
        Self {
            level,
            component: fields.get(FIELD_COMPONENT).cloned(),
            op: fields.get(FIELD_OP).cloned(),
            event: fields.get(FIELD_EVENT).cloned(),
            duration_ms: parsed(&fields, FIELD_DURATION_MS),
            err_code: fields.get(FIELD_ERR_CODE).cloned(),
            review_id: parsed(&fields, FIELD_REVIEW_ID),
            employee_id: parsed(&fields, FIELD_EMPLOYEE_ID),
            row_count: parsed(&fields, FIELD_ROW_COUNT),
            fields,
        }
    }

    /// Whether this event closes `op` with an error
    pub fn is_error_of(&self, op: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(EVENT_END_ERROR)
    }
}

fn parsed<T: std::str::FromStr>(fields: &HashMap<String, String>, key: &str) -> Option<T> {
    fields.get(key).and_then(|v| v.parse().ok())
}

#[derive(Default)]
struct FieldText(HashMap<String, String>);

impl FieldText {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldText {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }
}

type Buffer = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer {
    buffer: Buffer,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut text = FieldText::default();
        event.record(&mut text);
        let captured = CapturedEvent::from_fields(*event.metadata().level(), text.0);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(captured);
        }
    }
}

/// Shared view of the capture buffer
#[derive(Clone)]
pub struct TestCapture {
    buffer: Buffer,
}

impl TestCapture {
    /// Snapshot of every captured event, oldest first
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.buffer
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Events for one operation, in emission order
    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.filtered(|e| e.op.as_deref() == Some(op))
    }

    /// Events that carry `review_id`
    pub fn events_for_review(&self, review_id: i64) -> Vec<CapturedEvent> {
        self.filtered(|e| e.review_id == Some(review_id))
    }

    /// Error codes reported by failed runs of `op`
    pub fn error_codes(&self, op: &str) -> Vec<String> {
        self.filtered(|e| e.is_error_of(op))
            .into_iter()
            .filter_map(|e| e.err_code)
            .collect()
    }

    /// Panics unless an event with this `op` and `event` was captured
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events
                .iter()
                .any(|e| e.op.as_deref() == Some(op) && e.event.as_deref() == Some(event)),
            "no {} event for op {} among {} captured events",
            event,
            op,
            events.len()
        );
    }

    /// Count events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.filtered(predicate).len()
    }

    fn filtered<F>(&self, predicate: F) -> Vec<CapturedEvent>
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().into_iter().filter(|e| predicate(e)).collect()
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture subscriber once and hand out the shared buffer
///
/// Tests in one binary share the buffer, so assertions should filter by an
/// op name or record id unique to the test.
///
/// ```
/// use workforce_core::logging_facility::test_capture::init_test_capture;
/// use workforce_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_operation", review_id = 11);
/// capture.assert_event_exists("doc_operation", "start");
/// assert_eq!(capture.events_for_review(11).len(), 1);
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let capture = TestCapture {
                buffer: Arc::default(),
            };
            tracing_subscriber::registry()
                .with(CaptureLayer {
                    buffer: capture.buffer.clone(),
                })
                .init();
            capture
        })
        .clone()
}
