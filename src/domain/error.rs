//! Error types for the Donation Board plugin.
//!
//! This module defines the centralized error type [`DonationBoardError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.
//!
//! Only the submission path can fail at runtime. The item store, filter engine,
//! card projector and detail presenter are total over well-formed input.

use thiserror::Error;

/// The main error type for Donation Board operations.
///
/// # Examples
///
/// ```
/// use donation_board::DonationBoardError;
///
/// let err = DonationBoardError::SubmissionRejected { status: 422, message: None };
/// assert_eq!(err.to_string(), "Submission rejected with status 422");
/// ```
#[derive(Debug, Error)]
pub enum DonationBoardError {
    /// The submission endpoint answered with a non-success response.
    ///
    /// `message` holds the error text extracted from the response body, if the
    /// endpoint sent one.
    #[error("Submission rejected with status {status}{}", detail_suffix(.message))]
    SubmissionRejected {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Error text extracted from the response body.
        message: Option<String>,
    },

    /// The request to the submission endpoint could not complete.
    #[error("Submission transport error: {0}")]
    SubmissionTransport(String),

    /// A submission was requested while another one is still in flight.
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// The form fields do not describe a valid item.
    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

fn detail_suffix(message: &Option<String>) -> String {
    message.as_ref().map(|m| format!(": {m}")).unwrap_or_default()
}

/// A specialized `Result` type for Donation Board operations.
pub type Result<T> = std::result::Result<T, DonationBoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_includes_body_text_when_present() {
        let err = DonationBoardError::SubmissionRejected {
            status: 403,
            message: Some("Form not activated".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Submission rejected with status 403: Form not activated"
        );
    }
}
