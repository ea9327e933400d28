//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! endpoint responses and timers, translating them into state changes and
//! action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `NextFilter`, `PreviousFilter`, `SelectFilter`
//! - **Detail**: `ShowDetail`, `CloseDetail`
//! - **Form**: `OpenForm`, `CloseForm`, `Char`, `Backspace`, field and category cycling, `Submit`
//! - **System**: `SubmissionResolved`, `BannerExpired`, `PermissionsResult`
//!
//! # Example
//!
//! ```rust
//! use donation_board::app::{handle_event, AppState, Event};
//! use donation_board::catalog::ItemStore;
//! use donation_board::domain::{seed_items, CategorySet};
//! use donation_board::ui::Theme;
//!
//! let categories = CategorySet::default();
//! let store = ItemStore::seeded(seed_items(), &categories);
//! let mut state = AppState::new(store, categories, Theme::default());
//!
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::modes::{FormField, InputMode};
use super::state::{Notice, WEB_ACCESS_DENIED};
use super::submission::Resolution;
use crate::app::{Action, AppState};
use crate::domain::error::{DonationBoardError, Result};
use crate::domain::Selector;
use crate::endpoint::SubmissionOutcome;

/// Events triggered by user input, endpoint responses, or timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection cursor down by one card (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one card (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Cycles to the next filter tab.
    NextFilter,
    /// Cycles to the previous filter tab.
    PreviousFilter,
    /// Shows only cards matching the selector. Unknown categories show
    /// nothing.
    SelectFilter(Selector),
    /// Picks the filter tab at the given position; 0 is `All`.
    SelectFilterTab(usize),

    /// Opens the detail overlay for the selected card.
    ShowDetail,
    /// Closes the detail overlay.
    CloseDetail,

    /// Opens the submission form with the name field focused.
    OpenForm,
    /// Closes the form, keeping what was typed.
    CloseForm,
    /// Moves focus to the next form field.
    NextField,
    /// Moves focus to the previous form field.
    PreviousField,
    /// Appends a character to the focused text field.
    Char(char),
    /// Removes the last character of the focused text field.
    Backspace,
    /// Selects the next configured category in the form.
    NextCategory,
    /// Selects the previous configured category in the form.
    PreviousCategory,
    /// Submits the form contents to the endpoint.
    Submit,

    /// Delivers the endpoint's answer for the submission with `ticket`.
    SubmissionResolved {
        ticket: u64,
        outcome: SubmissionOutcome,
    },

    /// The success banner timer fired.
    BannerExpired,
    /// Clears a failure banner.
    DismissNotice,

    /// Reports whether web access was granted after the permission request.
    PermissionsResult {
        granted: bool,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render together with the actions to run
/// in order. Events that do not apply to the current mode are ignored:
/// filtering, detail and opening the form only work while browsing.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps room for handlers that fail.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            if state.input_mode != InputMode::Browse {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.input_mode != InputMode::Browse {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::NextFilter
        | Event::PreviousFilter
        | Event::SelectFilter(_)
        | Event::SelectFilterTab(_)
        | Event::ShowDetail
        | Event::OpenForm
            if state.input_mode != InputMode::Browse =>
        {
            Ok((false, vec![]))
        }

        Event::NextFilter => {
            state.next_filter();
            Ok((true, vec![]))
        }
        Event::PreviousFilter => {
            state.previous_filter();
            Ok((true, vec![]))
        }
        Event::SelectFilter(selector) => {
            state.select_filter(selector.clone());
            Ok((true, vec![]))
        }
        Event::SelectFilterTab(index) => Ok((state.select_filter_tab(*index), vec![])),

        Event::ShowDetail => {
            let Some(detail) = state.selected_detail() else {
                tracing::debug!("no card selected");
                return Ok((false, vec![]));
            };
            tracing::debug!(item_name = %detail.name, "showing item detail");
            state.detail = Some(detail);
            state.input_mode = InputMode::Detail;
            Ok((true, vec![]))
        }
        Event::CloseDetail => {
            if state.input_mode != InputMode::Detail {
                return Ok((false, vec![]));
            }
            state.detail = None;
            state.input_mode = InputMode::Browse;
            Ok((true, vec![]))
        }

        Event::OpenForm => {
            tracing::debug!("opening submission form");
            state.input_mode = InputMode::Form(FormField::Name);
            Ok((true, vec![]))
        }
        Event::CloseForm => {
            if !state.input_mode.is_form() {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Browse;
            if state.notice.as_ref().is_some_and(|n| !n.is_success()) {
                state.notice = None;
            }
            Ok((true, vec![]))
        }
        Event::NextField | Event::PreviousField => {
            let InputMode::Form(field) = state.input_mode else {
                return Ok((false, vec![]));
            };
            let field = if *event == Event::NextField {
                field.next()
            } else {
                field.previous()
            };
            state.input_mode = InputMode::Form(field);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let target = match state.input_mode {
                InputMode::Form(FormField::Name) => &mut state.form.name,
                InputMode::Form(FormField::Description) => &mut state.form.description,
                _ => return Ok((false, vec![])),
            };
            target.push(*c);
            tracing::trace!(char = %c, "form field updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            let target = match state.input_mode {
                InputMode::Form(FormField::Name) => &mut state.form.name,
                InputMode::Form(FormField::Description) => &mut state.form.description,
                _ => return Ok((false, vec![])),
            };
            Ok((target.pop().is_some(), vec![]))
        }
        Event::NextCategory | Event::PreviousCategory => {
            if state.input_mode != InputMode::Form(FormField::Category) {
                return Ok((false, vec![]));
            }
            let categories = state.categories().clone();
            if *event == Event::NextCategory {
                state.form.next_category(&categories);
            } else {
                state.form.previous_category(&categories);
            }
            Ok((true, vec![]))
        }
        Event::Submit => {
            if !state.input_mode.is_form() {
                return Ok((false, vec![]));
            }
            match state.begin_submission() {
                Ok(request) => {
                    tracing::info!(
                        ticket = request.ticket,
                        item_name = %request.record.name,
                        category = %request.record.category,
                        "submitting donation"
                    );
                    state.notice = None;
                    Ok((true, vec![Action::SendSubmission(request)]))
                }
                Err(DonationBoardError::SubmissionInFlight) => {
                    tracing::debug!("submission already in flight, ignoring");
                    Ok((false, vec![]))
                }
                Err(e) => {
                    tracing::debug!(error = %e, "submission not started");
                    state.notice = Some(Notice::Blocked(blocked_reason(&e)));
                    Ok((true, vec![]))
                }
            }
        }

        Event::SubmissionResolved { ticket, outcome } => {
            let Some(resolution) = state.resolve_submission(*ticket, outcome.clone()) else {
                return Ok((false, vec![]));
            };

            match resolution {
                Resolution::Committed(item) => {
                    tracing::info!(
                        item_name = %item.name,
                        category = %item.category,
                        total_items = state.store().len(),
                        "donation listed"
                    );
                    state.form.reset();
                    state.select_filter(Selector::All);
                    if state.input_mode.is_form() {
                        state.input_mode = InputMode::Browse;
                    }
                    state.notice = Some(Notice::Success);
                    Ok((true, vec![Action::ScheduleBannerClear(state.banner_duration)]))
                }
                Resolution::Rejected(_) => {
                    state.notice = Some(Notice::Rejected);
                    Ok((true, vec![]))
                }
                Resolution::Failed(_) => {
                    state.notice = Some(Notice::Failed);
                    Ok((true, vec![]))
                }
            }
        }

        Event::BannerExpired => {
            if state.notice.as_ref().is_some_and(Notice::is_success) {
                state.notice = None;
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::DismissNotice => {
            if state.notice.as_ref().is_some_and(|n| !n.is_success()) {
                state.notice = None;
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }

        Event::PermissionsResult { granted } => {
            tracing::debug!(granted = granted, "web access permission result");
            state.web_access = Some(*granted);
            if !granted {
                state.notice = Some(Notice::Blocked(WEB_ACCESS_DENIED.to_string()));
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
    }
}

fn blocked_reason(error: &DonationBoardError) -> String {
    match error {
        DonationBoardError::InvalidSubmission(reason) | DonationBoardError::Config(reason) => {
            reason.clone()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemStore;
    use crate::domain::{seed_items, CategorySet};
    use crate::ui::Theme;

    fn state_with_endpoint() -> AppState {
        let categories = CategorySet::default();
        let store = ItemStore::seeded(seed_items(), &categories);
        AppState::new(store, categories, Theme::default())
            .with_endpoint(Some("https://formspree.io/f/test".to_string()))
    }

    fn run(state: &mut AppState, events: &[Event]) -> Vec<Action> {
        events
            .iter()
            .flat_map(|e| handle_event(state, e).expect("handler is infallible").1)
            .collect()
    }

    #[test]
    fn typing_goes_to_focused_field_only() {
        let mut state = state_with_endpoint();
        run(
            &mut state,
            &[
                Event::Char('x'),
                Event::OpenForm,
                Event::Char('L'),
                Event::NextField,
                Event::Char('z'),
                Event::NextCategory,
                Event::NextField,
                Event::Char('d'),
            ],
        );

        assert_eq!(state.form.name, "L");
        assert_eq!(state.form.description, "d");
        assert_eq!(state.form.fields(state.categories()).category, "Books");
    }

    #[test]
    fn blank_name_blocks_submission_with_notice() {
        let mut state = state_with_endpoint();
        let actions = run(&mut state, &[Event::OpenForm, Event::Submit]);

        assert!(actions.is_empty());
        assert!(matches!(state.notice, Some(Notice::Blocked(_))));
        assert!(!state.submission().is_submitting());
    }

    #[test]
    fn detail_opens_for_selected_card_and_closes() {
        let mut state = state_with_endpoint();
        run(&mut state, &[Event::ShowDetail]);
        assert_eq!(state.input_mode, InputMode::Detail);
        assert_eq!(
            state.detail.as_ref().map(|d| d.name.as_str()),
            Some("Academic Thesis Guide")
        );

        run(&mut state, &[Event::CloseDetail]);
        assert_eq!(state.input_mode, InputMode::Browse);
        assert!(state.detail.is_none());
    }

    #[test]
    fn banner_expiry_only_clears_success() {
        let mut state = state_with_endpoint();
        state.notice = Some(Notice::Failed);

        let (render, _) = handle_event(&mut state, &Event::BannerExpired).expect("handled");
        assert!(!render);
        assert_eq!(state.notice, Some(Notice::Failed));

        run(&mut state, &[Event::DismissNotice]);
        assert!(state.notice.is_none());
    }

    #[test]
    fn browse_only_events_are_ignored_in_form() {
        let mut state = state_with_endpoint();
        run(&mut state, &[Event::OpenForm]);

        for event in [
            Event::NextFilter,
            Event::SelectFilterTab(2),
            Event::ShowDetail,
            Event::OpenForm,
        ] {
            let (render, actions) = handle_event(&mut state, &event).expect("handled");
            assert!(!render);
            assert!(actions.is_empty());
        }
        assert_eq!(state.selector, Selector::All);
        assert_eq!(state.input_mode, InputMode::Form(FormField::Name));
    }

    #[test]
    fn denied_web_access_blocks_submission_without_sending() {
        let mut state = state_with_endpoint();
        run(&mut state, &[Event::PermissionsResult { granted: false }]);
        state.form.name = "Desk Lamp".to_string();

        let actions = run(&mut state, &[Event::OpenForm, Event::Submit, Event::Submit]);

        assert!(actions.is_empty());
        assert!(!state.submission().is_submitting());
        assert_eq!(
            state.notice,
            Some(Notice::Blocked(WEB_ACCESS_DENIED.to_string()))
        );
    }

    #[test]
    fn granted_web_access_allows_submission() {
        let mut state = state_with_endpoint();
        run(&mut state, &[Event::PermissionsResult { granted: true }]);
        state.form.name = "Desk Lamp".to_string();

        let actions = run(&mut state, &[Event::OpenForm, Event::Submit]);

        assert!(matches!(actions.as_slice(), [Action::SendSubmission(_)]));
        assert_eq!(state.web_access, Some(true));
    }
}
