//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order: delivering submissions to the endpoint,
//! arming the banner timer, or hiding the plugin pane.
//!
//! # Example
//!
//! ```rust
//! use donation_board::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![Action::ScheduleBannerClear(Duration::from_secs(5))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::endpoint::SubmissionRequest;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Delivers a donation submission to the remote endpoint.
    ///
    /// The result must come back as `Event::SubmissionResolved` with the
    /// request's ticket.
    SendSubmission(SubmissionRequest),

    /// Arms a timer that fires `Event::BannerExpired` after the delay.
    ScheduleBannerClear(Duration),
}
