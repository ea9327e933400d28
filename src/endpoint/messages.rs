//! Submission protocol types for the remote form endpoint.
//!
//! This module defines the request the plugin sends when a donation is
//! submitted and the classification of whatever comes back. Requests carry a
//! ticket and the current trace context in Zellij's web request context map,
//! so the response can be matched to its request and linked to the span that
//! sent it.

use crate::domain::error::{DonationBoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Context key carrying the submission ticket.
pub const TICKET_KEY: &str = "donation_ticket";

/// Context key carrying the sender's trace id.
pub const TRACE_ID_KEY: &str = "trace_id";

/// Context key carrying the sender's span id.
pub const PARENT_SPAN_ID_KEY: &str = "parent_span_id";

/// Distributed tracing context for linking a response to its request span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across the request boundary.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry ids of the active span.
    ///
    /// Returns `None` if the current span context is invalid or not sampled,
    /// which is always the case when tracing is not initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Reads a trace context back out of a web request context map.
    #[must_use]
    pub fn from_context_map(context: &BTreeMap<String, String>) -> Option<Self> {
        Some(Self {
            trace_id: context.get(TRACE_ID_KEY)?.clone(),
            parent_span_id: context.get(PARENT_SPAN_ID_KEY)?.clone(),
        })
    }

    /// Makes this context the parent of spans created while the guard lives.
    #[must_use]
    pub fn attach(&self) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }
}

/// Form data sent to the endpoint, keyed by the form's field labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(rename = "Item Name")]
    pub name: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Detailed Description")]
    pub description: String,

    /// RFC 3339 timestamp of when the donor pressed submit.
    #[serde(rename = "Submitted At")]
    pub submitted_at: String,
}

impl SubmissionRecord {
    /// Record stamped with the current time.
    #[must_use]
    pub fn new(name: String, category: String, description: String) -> Self {
        Self {
            name,
            category,
            description,
            submitted_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// A submission ready to be handed to an [`Endpoint`](super::Endpoint).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// Identifies this attempt; the response must echo it back.
    pub ticket: u64,
    pub url: String,
    pub record: SubmissionRecord,
    pub trace_context: Option<TraceContext>,
}

impl SubmissionRequest {
    /// Request for `record`, capturing the active span's trace context.
    #[must_use]
    pub fn new(ticket: u64, url: String, record: SubmissionRecord) -> Self {
        Self {
            ticket,
            url,
            record,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Headers asking the endpoint for a JSON answer to a JSON body.
    #[must_use]
    pub fn headers() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ])
    }

    /// Serializes the record as the request body.
    ///
    /// # Errors
    ///
    /// Returns [`DonationBoardError::Serialization`] if encoding fails.
    pub fn body(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.record)?)
    }

    /// Context map echoed back by Zellij with the response.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::from([(TICKET_KEY.to_string(), self.ticket.to_string())]);
        if let Some(trace) = &self.trace_context {
            context.insert(TRACE_ID_KEY.to_string(), trace.trace_id.clone());
            context.insert(PARENT_SPAN_ID_KEY.to_string(), trace.parent_span_id.clone());
        }
        context
    }
}

/// Reads the ticket from a web request context map.
///
/// Returns `None` for responses to requests this plugin did not send as
/// submissions.
#[must_use]
pub fn ticket_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
    context.get(TICKET_KEY)?.parse().ok()
}

/// How a submission attempt ended, as reported by the network collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The endpoint accepted the record.
    Accepted { status: u16 },

    /// The endpoint answered with a non-success status.
    Rejected { status: u16, message: Option<String> },

    /// The request could not complete.
    TransportFailed { reason: String },
}

impl SubmissionOutcome {
    /// Converts the outcome into the crate's error taxonomy.
    ///
    /// # Errors
    ///
    /// Returns [`DonationBoardError::SubmissionRejected`] or
    /// [`DonationBoardError::SubmissionTransport`] for the failure variants.
    pub fn into_result(self) -> Result<u16> {
        match self {
            Self::Accepted { status } => Ok(status),
            Self::Rejected { status, message } => {
                Err(DonationBoardError::SubmissionRejected { status, message })
            }
            Self::TransportFailed { reason } => {
                Err(DonationBoardError::SubmissionTransport(reason))
            }
        }
    }
}

/// Error shapes returned by Formspree-style endpoints.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    message: Option<String>,
}

fn extract_error_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    parsed.error.or_else(|| {
        let messages: Vec<String> = parsed.errors.into_iter().filter_map(|e| e.message).collect();
        (!messages.is_empty()).then(|| messages.join("; "))
    })
}

/// Classifies a web request result into a [`SubmissionOutcome`].
///
/// - Any 2xx status is accepted.
/// - A non-2xx result without response headers is a transport failure:
///   Zellij synthesizes such a result, with the error text as body, when the
///   HTTP call itself fails.
/// - Any other status is a rejection; a JSON error message in the body is
///   kept for logging.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use donation_board::endpoint::{classify_response, SubmissionOutcome};
///
/// let headers = BTreeMap::from([("content-type".to_string(), "application/json".to_string())]);
/// assert_eq!(
///     classify_response(200, &headers, br#"{"ok":true}"#),
///     SubmissionOutcome::Accepted { status: 200 }
/// );
/// assert!(matches!(
///     classify_response(400, &BTreeMap::new(), b"connection refused"),
///     SubmissionOutcome::TransportFailed { .. }
/// ));
/// ```
#[must_use]
pub fn classify_response(
    status: u16,
    headers: &BTreeMap<String, String>,
    body: &[u8],
) -> SubmissionOutcome {
    if (200..300).contains(&status) {
        return SubmissionOutcome::Accepted { status };
    }

    if headers.is_empty() {
        let reason = String::from_utf8_lossy(body).trim().to_string();
        return SubmissionOutcome::TransportFailed {
            reason: if reason.is_empty() {
                format!("request failed with status {status}")
            } else {
                reason
            },
        };
    }

    SubmissionOutcome::Rejected {
        status,
        message: extract_error_message(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_headers() -> BTreeMap<String, String> {
        BTreeMap::from([("content-type".to_string(), "application/json".to_string())])
    }

    #[test]
    fn body_uses_form_field_labels() {
        let request = SubmissionRequest::new(
            7,
            "https://formspree.io/f/test".to_string(),
            SubmissionRecord::new(
                "Desk Lamp".to_string(),
                "Appliances".to_string(),
                "Used, works".to_string(),
            ),
        );

        let body: serde_json::Value =
            serde_json::from_slice(&request.body().expect("body encodes")).expect("valid json");
        assert_eq!(body["Item Name"], "Desk Lamp");
        assert_eq!(body["Category"], "Appliances");
        assert_eq!(body["Detailed Description"], "Used, works");
        assert!(body["Submitted At"].is_string());
    }

    #[test]
    fn context_round_trips_ticket() {
        let request = SubmissionRequest::new(
            42,
            "https://example.test".to_string(),
            SubmissionRecord::new("a".into(), "Books".into(), String::new()),
        );
        assert_eq!(ticket_from_context(&request.context()), Some(42));
        assert_eq!(ticket_from_context(&BTreeMap::new()), None);
    }

    #[test]
    fn rejection_keeps_formspree_error_text() {
        let outcome = classify_response(
            422,
            &json_headers(),
            br#"{"errors":[{"message":"email required"},{"message":"too short"}]}"#,
        );
        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected {
                status: 422,
                message: Some("email required; too short".to_string()),
            }
        );

        let outcome = classify_response(403, &json_headers(), br#"{"error":"Form not found"}"#);
        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected {
                status: 403,
                message: Some("Form not found".to_string()),
            }
        );
    }

    #[test]
    fn rejection_without_json_body_has_no_message() {
        let outcome = classify_response(500, &json_headers(), b"<html>oops</html>");
        assert_eq!(outcome, SubmissionOutcome::Rejected { status: 500, message: None });
    }

    #[test]
    fn headerless_failure_is_transport_error() {
        let outcome = classify_response(400, &BTreeMap::new(), b"");
        assert_eq!(
            outcome,
            SubmissionOutcome::TransportFailed {
                reason: "request failed with status 400".to_string()
            }
        );
    }

    #[test]
    fn outcomes_map_onto_error_taxonomy() {
        assert_eq!(SubmissionOutcome::Accepted { status: 201 }.into_result().ok(), Some(201));
        assert!(matches!(
            SubmissionOutcome::Rejected { status: 404, message: None }.into_result(),
            Err(DonationBoardError::SubmissionRejected { status: 404, .. })
        ));
        assert!(matches!(
            SubmissionOutcome::TransportFailed { reason: "dns".into() }.into_result(),
            Err(DonationBoardError::SubmissionTransport(_))
        ));
    }
}
