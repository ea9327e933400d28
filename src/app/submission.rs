//! Submission coordinator state machine.
//!
//! ```text
//!            begin()                resolve()
//!   Idle ─────────────▶ Submitting ───────────▶ Committed ─┐
//!    ▲                               ├────────▶ Rejected  ─┤ finish()
//!    │                               └────────▶ Failed    ─┤
//!    └─────────────────────────────────────────────────────┘
//! ```
//!
//! While a submission is in flight, `begin` refuses new submissions instead of
//! queueing them. A commit appends to the [`ItemStore`] inside `resolve`, so a
//! reader never sees a half-applied commit.

use crate::catalog::ItemStore;
use crate::domain::error::{DonationBoardError, Result};
use crate::domain::{CategorySet, Item};
use crate::endpoint::{SubmissionOutcome, SubmissionRecord, SubmissionRequest};

use super::form::FormFields;

/// Where the coordinator is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// Ready to accept a submission.
    Idle,
    /// Waiting for the endpoint to answer the request with `ticket`.
    Submitting {
        ticket: u64,
        /// The item that will be committed if the endpoint accepts it.
        draft: Item,
    },
    /// The last submission was accepted and committed.
    Committed,
    /// The endpoint answered with a failure.
    Rejected,
    /// The request could not complete.
    Failed,
}

/// Result of resolving an in-flight submission.
#[derive(Debug)]
pub enum Resolution {
    /// The item was appended to the store.
    Committed(Item),
    /// The endpoint rejected the record; nothing was stored.
    Rejected(DonationBoardError),
    /// The request failed in transit; nothing was stored.
    Failed(DonationBoardError),
}

/// Drives one form's submissions through the network collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionCoordinator {
    state: SubmissionState,
    endpoint_url: Option<String>,
    next_ticket: u64,
}

impl SubmissionCoordinator {
    /// Idle coordinator delivering to `endpoint_url`. With `None`, every
    /// submission is refused with a configuration error.
    #[must_use]
    pub const fn new(endpoint_url: Option<String>) -> Self {
        Self {
            state: SubmissionState::Idle,
            endpoint_url,
            next_ticket: 1,
        }
    }

    /// Current state machine position.
    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// `true` between `begin` and the matching `resolve`; the submit button
    /// is disabled meanwhile.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting { .. })
    }

    /// Starts a submission and returns the request to deliver.
    ///
    /// # Errors
    ///
    /// - [`DonationBoardError::SubmissionInFlight`] while another submission
    ///   has not resolved yet.
    /// - [`DonationBoardError::InvalidSubmission`] if the name is blank or the
    ///   category is not configured.
    /// - [`DonationBoardError::Config`] if no endpoint URL is configured.
    ///
    /// The coordinator stays in its current state on error.
    pub fn begin(
        &mut self,
        fields: FormFields,
        categories: &CategorySet,
    ) -> Result<SubmissionRequest> {
        if self.is_submitting() {
            return Err(DonationBoardError::SubmissionInFlight);
        }

        let name = fields.name.trim();
        if name.is_empty() {
            return Err(DonationBoardError::InvalidSubmission(
                "item name is required".to_string(),
            ));
        }
        if !categories.contains(&fields.category) {
            return Err(DonationBoardError::InvalidSubmission(format!(
                "unknown category '{}'",
                fields.category
            )));
        }

        let url = self.endpoint_url.clone().ok_or_else(|| {
            DonationBoardError::Config("no submission endpoint configured".to_string())
        })?;

        let draft = Item::donated(name, fields.category, fields.description);
        let ticket = self.next_ticket;
        self.next_ticket += 1;

        let record = SubmissionRecord::new(
            draft.name.clone(),
            draft.category.clone(),
            draft.description.clone(),
        );

        tracing::debug!(ticket = ticket, item_name = %draft.name, "submission started");
        self.state = SubmissionState::Submitting { ticket, draft };

        Ok(SubmissionRequest::new(ticket, url, record))
    }

    /// Applies the endpoint's answer to the in-flight submission.
    ///
    /// On acceptance the draft is appended to `store`. Answers whose ticket
    /// does not match the in-flight submission are ignored and return `None`.
    pub fn resolve(
        &mut self,
        ticket: u64,
        outcome: SubmissionOutcome,
        store: &mut ItemStore,
    ) -> Option<Resolution> {
        let in_flight = match &self.state {
            SubmissionState::Submitting { ticket: current, .. } => *current,
            _ => {
                tracing::debug!(ticket = ticket, "no submission in flight, ignoring response");
                return None;
            }
        };
        if in_flight != ticket {
            tracing::debug!(
                ticket = ticket,
                in_flight = in_flight,
                "response for another submission, ignoring"
            );
            return None;
        }

        let SubmissionState::Submitting { draft, .. } =
            std::mem::replace(&mut self.state, SubmissionState::Idle)
        else {
            return None;
        };

        let resolution = match outcome.into_result() {
            Ok(status) => {
                tracing::debug!(ticket = ticket, status = status, "submission accepted");
                store.append(draft.clone());
                self.state = SubmissionState::Committed;
                Resolution::Committed(draft)
            }
            Err(e @ DonationBoardError::SubmissionRejected { .. }) => {
                tracing::warn!(ticket = ticket, error = %e, "submission rejected");
                self.state = SubmissionState::Rejected;
                Resolution::Rejected(e)
            }
            Err(e) => {
                tracing::warn!(ticket = ticket, error = %e, "submission failed");
                self.state = SubmissionState::Failed;
                Resolution::Failed(e)
            }
        };

        Some(resolution)
    }

    /// Returns from a terminal state to `Idle`. No-op while submitting.
    pub fn finish(&mut self) {
        if !self.is_submitting() {
            self.state = SubmissionState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator() -> SubmissionCoordinator {
        SubmissionCoordinator::new(Some("https://formspree.io/f/test".to_string()))
    }

    fn lamp() -> FormFields {
        FormFields::new("Desk Lamp", "Appliances", "Used, works")
    }

    #[test]
    fn begin_moves_to_submitting_and_blocks_second_submission() {
        let mut coordinator = coordinator();
        let categories = CategorySet::default();

        let request = coordinator.begin(lamp(), &categories).expect("first submission starts");
        assert_eq!(request.record.name, "Desk Lamp");
        assert!(coordinator.is_submitting());

        let second = coordinator.begin(lamp(), &categories);
        assert!(matches!(second, Err(DonationBoardError::SubmissionInFlight)));
    }

    #[test]
    fn accepted_submission_commits_then_returns_to_idle() {
        let mut coordinator = coordinator();
        let mut store = ItemStore::new();
        let request = coordinator.begin(lamp(), &CategorySet::default()).expect("starts");

        let resolution = coordinator.resolve(
            request.ticket,
            SubmissionOutcome::Accepted { status: 200 },
            &mut store,
        );

        assert!(matches!(resolution, Some(Resolution::Committed(_))));
        assert_eq!(coordinator.state(), &SubmissionState::Committed);
        assert_eq!(store.all(), [Item::donated("Desk Lamp", "Appliances", "Used, works")]);

        coordinator.finish();
        assert_eq!(coordinator.state(), &SubmissionState::Idle);
    }

    #[test]
    fn rejected_and_failed_leave_store_untouched() {
        let categories = CategorySet::default();
        for (outcome, expected) in [
            (
                SubmissionOutcome::Rejected { status: 422, message: None },
                SubmissionState::Rejected,
            ),
            (
                SubmissionOutcome::TransportFailed { reason: "offline".into() },
                SubmissionState::Failed,
            ),
        ] {
            let mut coordinator = coordinator();
            let mut store = ItemStore::new();
            let request = coordinator.begin(lamp(), &categories).expect("starts");

            let resolution = coordinator.resolve(request.ticket, outcome, &mut store);
            assert!(matches!(
                resolution,
                Some(Resolution::Rejected(_) | Resolution::Failed(_))
            ));
            assert_eq!(coordinator.state(), &expected);
            assert!(store.is_empty());
        }
    }

    #[test]
    fn mismatched_ticket_is_ignored() {
        let mut coordinator = coordinator();
        let mut store = ItemStore::new();
        let request = coordinator.begin(lamp(), &CategorySet::default()).expect("starts");

        let stale = coordinator.resolve(
            request.ticket + 1,
            SubmissionOutcome::Accepted { status: 200 },
            &mut store,
        );
        assert!(stale.is_none());
        assert!(coordinator.is_submitting());
        assert!(store.is_empty());
    }

    #[test]
    fn validation_errors_do_not_start_submission() {
        let categories = CategorySet::default();
        let mut coordinator = coordinator();

        let blank = coordinator.begin(FormFields::new("   ", "Books", ""), &categories);
        assert!(matches!(blank, Err(DonationBoardError::InvalidSubmission(_))));

        let unknown = coordinator.begin(FormFields::new("Kite", "Toys", ""), &categories);
        assert!(matches!(unknown, Err(DonationBoardError::InvalidSubmission(_))));

        let mut unconfigured = SubmissionCoordinator::new(None);
        let missing = unconfigured.begin(lamp(), &categories);
        assert!(matches!(missing, Err(DonationBoardError::Config(_))));

        assert_eq!(coordinator.state(), &SubmissionState::Idle);
        assert_eq!(unconfigured.state(), &SubmissionState::Idle);
    }

    #[test]
    fn tickets_increase_across_submissions() {
        let categories = CategorySet::default();
        let mut coordinator = coordinator();
        let mut store = ItemStore::new();

        let first = coordinator.begin(lamp(), &categories).expect("starts");
        coordinator.resolve(first.ticket, SubmissionOutcome::Accepted { status: 200 }, &mut store);
        coordinator.finish();

        let second = coordinator.begin(lamp(), &categories).expect("starts again");
        assert!(second.ticket > first.ticket);
    }
}
