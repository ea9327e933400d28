//! OTLP JSON encoding of finished spans.
//!
//! Each exported batch becomes one JSON document shaped like an OTLP
//! `ExportTraceServiceRequest`, so the trace file can be replayed into any
//! OTLP-JSON collector:
//!
//! ```json
//! {"resourceSpans":[{"resource":{"attributes":[...]},
//!   "scopeSpans":[{"scope":{"name":"DonationBoard"},"spans":[...]}]}]}
//! ```

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

/// Encodes span batches with a fixed resource and instrumentation scope.
pub struct OtlpJsonEncoder {
    resource: Resource,
    scope: &'static str,
}

impl OtlpJsonEncoder {
    /// Encoder stamping every batch with `resource` and the scope name.
    pub const fn new(resource: Resource, scope: &'static str) -> Self {
        Self { resource, scope }
    }

    /// Encodes `batch` as one `ExportTraceServiceRequest` document.
    pub fn encode_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attributes: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| json!({ "key": key.to_string(), "value": encode_value(value) }))
            .collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attributes },
                "scopeSpans": [{
                    "scope": { "name": self.scope },
                    "spans": batch.iter().map(encode_span).collect::<Vec<_>>(),
                }],
            }],
        })
    }
}

impl std::fmt::Debug for OtlpJsonEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtlpJsonEncoder")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

fn encode_span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (code, message) = encode_status(&span.status);

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": encode_attributes(&span.attributes),
        "events": span.events.iter().map(encode_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(encode_link).collect::<Vec<_>>(),
        "status": { "code": code, "message": message },
    })
}

fn encode_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": encode_attributes(&event.attributes),
    })
}

fn encode_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": encode_attributes(&link.attributes),
    })
}

fn encode_attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| json!({ "key": kv.key.to_string(), "value": encode_value(&kv.value) }))
        .collect()
}

/// OTLP `AnyValue` encoding. 64-bit integers are strings, as in the OTLP
/// JSON mapping; arrays fall back to their debug text.
fn encode_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

/// OTLP span kind numbers.
const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn encode_status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

/// Nanoseconds since the epoch as a decimal string; pre-epoch times map to 0.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn values_use_otlp_any_value_keys() {
        assert_eq!(encode_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(encode_value(&Value::Bool(true)), json!({ "boolValue": true }));
        assert_eq!(
            encode_value(&Value::from("Desk Lamp")),
            json!({ "stringValue": "Desk Lamp" })
        );
    }

    #[test]
    fn timestamps_are_decimal_nanos() {
        let t = UNIX_EPOCH + Duration::from_millis(1500);
        assert_eq!(unix_nanos(t), "1500000000");
        assert_eq!(unix_nanos(UNIX_EPOCH - Duration::from_secs(1)), "0");
    }

    #[test]
    fn empty_batch_keeps_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "DonationBoard")]);
        let doc = OtlpJsonEncoder::new(resource, "DonationBoard").encode_batch(&[]);

        let scope = &doc["resourceSpans"][0]["scopeSpans"][0];
        assert_eq!(scope["scope"]["name"], "DonationBoard");
        assert_eq!(scope["spans"], json!([]));
        let attributes = doc["resourceSpans"][0]["resource"]["attributes"]
            .as_array()
            .expect("attributes array");
        assert!(attributes
            .iter()
            .any(|a| a["value"]["stringValue"] == "DonationBoard"));
    }
}
