//! End-to-end donation flows driven through `handle_event`, with a recording
//! endpoint standing in for Zellij's web requests.

use std::time::Duration;

use donation_board::app::Notice;
use donation_board::catalog::{present, project};
use donation_board::endpoint::{SubmissionOutcome, SubmissionRequest};
use donation_board::{
    handle_event, initialize, Action, AppState, Config, Endpoint, Event, InputMode, Selector,
};

/// Records every request instead of sending it.
#[derive(Debug, Default)]
struct RecordingEndpoint {
    sent: Vec<SubmissionRequest>,
    refuse: bool,
}

impl Endpoint for RecordingEndpoint {
    fn submit(&mut self, request: &SubmissionRequest) -> donation_board::Result<()> {
        if self.refuse {
            return Err(donation_board::DonationBoardError::SubmissionTransport(
                "offline".to_string(),
            ));
        }
        self.sent.push(request.clone());
        Ok(())
    }
}

/// Runs events the way the plugin shim does and keeps the side effects.
struct Harness {
    state: AppState,
    endpoint: RecordingEndpoint,
    timers: Vec<Duration>,
    closed: bool,
}

impl Harness {
    fn new() -> Self {
        let config = Config {
            endpoint: Some("https://formspree.io/f/test".to_string()),
            ..Config::default()
        };
        Self {
            state: initialize(&config),
            endpoint: RecordingEndpoint::default(),
            timers: Vec::new(),
            closed: false,
        }
    }

    fn send(&mut self, event: Event) -> bool {
        let (render, actions) =
            handle_event(&mut self.state, &event).expect("handler is infallible");
        for action in actions {
            match action {
                Action::CloseFocus => self.closed = true,
                Action::ScheduleBannerClear(delay) => self.timers.push(delay),
                Action::SendSubmission(request) => {
                    if let Err(e) = self.endpoint.submit(&request) {
                        self.send(Event::SubmissionResolved {
                            ticket: request.ticket,
                            outcome: SubmissionOutcome::TransportFailed {
                                reason: e.to_string(),
                            },
                        });
                    }
                }
            }
        }
        render
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send(Event::Char(c));
        }
    }

    /// Opens the form, fills name and description and submits. The category
    /// stays on the first configured one, `Appliances`.
    fn submit_appliance(&mut self, name: &str, description: &str) {
        self.send(Event::OpenForm);
        self.type_text(name);
        self.send(Event::NextField);
        self.send(Event::NextField);
        self.type_text(description);
        self.send(Event::Submit);
    }

    fn last_ticket(&self) -> u64 {
        self.endpoint.sent.last().expect("a request was sent").ticket
    }

    fn resolve_last(&mut self, outcome: SubmissionOutcome) {
        let ticket = self.last_ticket();
        self.send(Event::SubmissionResolved { ticket, outcome });
    }

    fn names(&self) -> Vec<String> {
        self.state.cards().into_iter().map(|c| c.name).collect()
    }
}

#[test]
fn accepted_donation_is_appended_once_and_shown_first() {
    let mut h = Harness::new();
    let before = h.state.store().len();

    h.submit_appliance("Desk Lamp", "Used, works");
    assert!(h.state.submission().is_submitting());
    assert_eq!(h.endpoint.sent.len(), 1);
    let record = &h.endpoint.sent[0].record;
    assert_eq!(record.name, "Desk Lamp");
    assert_eq!(record.category, "Appliances");
    assert_eq!(record.description, "Used, works");

    // Nothing is listed until the endpoint answers.
    assert_eq!(h.state.store().len(), before);

    h.resolve_last(SubmissionOutcome::Accepted { status: 200 });

    let items = h.state.store().all();
    assert_eq!(items.len(), before + 1);
    let last = items.last().expect("appended");
    assert_eq!(last.name, "Desk Lamp");
    assert_eq!(last.category, "Appliances");
    assert_eq!(last.description, "Used, works");
    assert_eq!(last.status, "Available");
    assert_eq!(last.contact, "Internal");

    assert_eq!(project(items)[0].name, "Desk Lamp");
    assert_eq!(h.names()[0], "Desk Lamp");

    assert_eq!(h.state.input_mode, InputMode::Browse);
    assert_eq!(h.state.notice, Some(Notice::Success));
    assert!(h.state.form.name.is_empty());
    assert!(h.state.form.description.is_empty());
    assert!(!h.state.submission().is_submitting());
    assert_eq!(h.timers, [Duration::from_secs(5)]);
}

#[test]
fn rejected_donation_leaves_store_and_form_untouched() {
    let mut h = Harness::new();
    let before = h.state.store().len();

    h.submit_appliance("Old Radio", "Crackles a bit");
    h.resolve_last(SubmissionOutcome::Rejected {
        status: 422,
        message: Some("email required".to_string()),
    });

    assert_eq!(h.state.store().len(), before);
    assert!(h.state.store().all().iter().all(|i| i.name != "Old Radio"));
    assert_eq!(h.state.notice, Some(Notice::Rejected));
    assert_eq!(h.state.form.name, "Old Radio");
    assert!(h.state.input_mode.is_form());
    assert!(h.timers.is_empty());

    // The coordinator is idle again, so a retry goes out.
    h.send(Event::Submit);
    assert_eq!(h.endpoint.sent.len(), 2);
    assert!(h.state.notice.is_none());
}

#[test]
fn transport_failure_behaves_like_rejection() {
    let mut h = Harness::new();
    let before = h.state.store().len();

    h.submit_appliance("Old Radio", "...");
    h.resolve_last(SubmissionOutcome::TransportFailed {
        reason: "connection refused".to_string(),
    });

    assert_eq!(h.state.store().len(), before);
    assert_eq!(h.state.notice, Some(Notice::Failed));
    assert!(!h.state.submission().is_submitting());
}

#[test]
fn endpoint_refusing_to_start_resolves_as_failure() {
    let mut h = Harness::new();
    h.endpoint.refuse = true;
    let before = h.state.store().len();

    h.submit_appliance("Old Radio", "...");

    assert_eq!(h.state.store().len(), before);
    assert_eq!(h.state.notice, Some(Notice::Failed));
    assert!(!h.state.submission().is_submitting());
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut h = Harness::new();
    h.submit_appliance("Desk Lamp", "Used, works");

    assert!(!h.send(Event::Submit));
    assert_eq!(h.endpoint.sent.len(), 1);
}

#[test]
fn stale_and_foreign_tickets_do_not_commit() {
    let mut h = Harness::new();
    let before = h.state.store().len();
    h.submit_appliance("Desk Lamp", "Used, works");
    let ticket = h.last_ticket();

    assert!(!h.send(Event::SubmissionResolved {
        ticket: ticket + 1,
        outcome: SubmissionOutcome::Accepted { status: 200 },
    }));
    assert_eq!(h.state.store().len(), before);
    assert!(h.state.submission().is_submitting());

    h.resolve_last(SubmissionOutcome::Accepted { status: 200 });
    assert!(!h.send(Event::SubmissionResolved {
        ticket,
        outcome: SubmissionOutcome::Accepted { status: 200 },
    }));
    assert_eq!(h.state.store().len(), before + 1);
}

#[test]
fn success_banner_clears_on_timer_failure_banner_does_not() {
    let mut h = Harness::new();
    h.submit_appliance("Desk Lamp", "Used, works");
    h.resolve_last(SubmissionOutcome::Accepted { status: 201 });
    assert!(h.send(Event::BannerExpired));
    assert!(h.state.notice.is_none());

    h.submit_appliance("Old Radio", "...");
    h.resolve_last(SubmissionOutcome::Rejected { status: 500, message: None });
    assert!(!h.send(Event::BannerExpired));
    assert_eq!(h.state.notice, Some(Notice::Rejected));

    h.send(Event::CloseForm);
    assert!(h.state.notice.is_none());
}

#[test]
fn books_filter_shows_seeded_books_newest_first() {
    let mut h = Harness::new();
    h.send(Event::SelectFilter(Selector::parse("Books")));

    assert_eq!(
        h.names(),
        ["Academic Thesis Guide", "Complete Fairytale Book Set"]
    );

    let stored: Vec<&str> = h
        .state
        .store()
        .all()
        .iter()
        .filter(|i| i.category == "Books")
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(stored, ["Complete Fairytale Book Set", "Academic Thesis Guide"]);
}

#[test]
fn unknown_selector_shows_nothing_without_error() {
    let mut h = Harness::new();
    assert!(h.send(Event::SelectFilter(Selector::parse("NoSuchCategory"))));
    assert!(h.names().is_empty());

    let vm = h.state.compute_viewmodel(30, 80);
    assert!(vm.cards.is_empty());
    assert!(vm.empty_state.is_some());

    assert!(!h.send(Event::ShowDetail));
    assert_eq!(h.state.input_mode, InputMode::Browse);
}

#[test]
fn commit_while_filtered_returns_to_all() {
    let mut h = Harness::new();
    h.send(Event::SelectFilter(Selector::parse("Books")));
    h.submit_appliance("Desk Lamp", "Used, works");
    h.resolve_last(SubmissionOutcome::Accepted { status: 200 });

    assert_eq!(h.names().len(), 5);
    assert_eq!(h.names()[0], "Desk Lamp");
}

#[test]
fn detail_overlay_and_cards_agree_on_status_token() {
    let mut h = Harness::new();
    h.send(Event::ShowDetail);

    let detail = h.state.detail.clone().expect("detail open");
    let card = &h.state.cards()[0];
    assert_eq!(detail.name, card.name);
    assert_eq!(detail.status_token, card.status_token);
    assert_eq!(detail.status_token, "available");

    let item = &h.state.store().all()[0];
    assert_eq!(present(item).status_token, project([item])[0].status_token);
}

#[test]
fn quit_key_requests_close() {
    let mut h = Harness::new();
    h.send(Event::CloseFocus);
    assert!(h.closed);
}

#[test]
fn denied_web_access_keeps_submissions_local() {
    let mut h = Harness::new();
    h.send(Event::PermissionsResult { granted: false });
    let before = h.state.store().len();

    h.submit_appliance("Desk Lamp", "Used, works");
    assert!(h.endpoint.sent.is_empty());
    assert!(!h.state.submission().is_submitting());
    assert!(matches!(h.state.notice, Some(Notice::Blocked(_))));

    // Retrying is refused the same way instead of being swallowed.
    assert!(h.send(Event::Submit));
    assert!(h.endpoint.sent.is_empty());
    assert!(matches!(h.state.notice, Some(Notice::Blocked(_))));
    assert_eq!(h.state.store().len(), before);
}
