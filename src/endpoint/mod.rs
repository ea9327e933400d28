//! Network collaborator for donation submissions.
//!
//! The plugin never talks to the network directly from the application layer.
//! The event handler returns [`Action::SendSubmission`](crate::Action) and the
//! plugin shim hands the request to an [`Endpoint`]. The result arrives later as
//! an [`Event::SubmissionResolved`](crate::Event) carrying the request's ticket.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation

pub mod messages;

pub use messages::{
    classify_response, ticket_from_context, SubmissionOutcome, SubmissionRecord,
    SubmissionRequest, TraceContext,
};

/// Something that can deliver a submission to the remote form service.
///
/// Delivery is asynchronous: `submit` only starts the request. Implementations
/// report completion by feeding an `Event::SubmissionResolved` back into
/// [`handle_event`](crate::handle_event).
pub trait Endpoint {
    /// Starts delivering `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot even be started, for example
    /// because the body cannot be encoded.
    fn submit(&mut self, request: &SubmissionRequest) -> crate::Result<()>;
}
