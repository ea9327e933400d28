//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Donation Board
//! library and the Zellij plugin system. All host calls live here; the
//! library only sees [`Event`]s and returns [`Action`]s.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess` for submissions
//! 3. **Subscribe**: Register for Key, `WebRequestResult`, `Timer` and
//!    `PermissionRequestResult` events
//! 4. **Update**: Translate events, delegate to the library, run actions
//! 5. **Render**: Call library render function
//!
//! # Submission Round Trip
//!
//! ```text
//! Enter in form → Event::Submit → Action::SendSubmission
//!   → web_request(POST, context{ticket, trace ids})
//!   → Event::WebRequestResult → classify_response
//!   → Event::SubmissionResolved { ticket, outcome }
//! ```
//!
//! # Keybindings
//!
//! Browse:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `l`/`Right`/`Tab`, `h`/`Left`/`Shift+Tab`: Cycle filter tabs
//! - `0`-`9`: Pick filter tab
//! - `Enter`: Show details
//! - `a`: Open the donation form
//! - `Esc`: Dismiss a failure notice
//! - `q`: Close plugin
//!
//! Detail: `Esc`, `Enter` or `q` closes the overlay.
//!
//! Form:
//! - Typing edits the focused text field; `Backspace` deletes
//! - `Tab`/`Down`, `Shift+Tab`/`Up`: Move between fields
//! - `h`/`l`, `Left`/`Right` or `Space` on the category field: Change category
//! - `Enter`: Submit
//! - `Esc`: Close the form, keeping its contents

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use donation_board::endpoint::{
    classify_response, ticket_from_context, SubmissionOutcome, SubmissionRequest, TraceContext,
};
use donation_board::{handle_event, Action, Config, Endpoint, Event, FormField, InputMode};

register_plugin!(State);

/// [`Endpoint`] backed by Zellij's `web_request` host call.
///
/// The response arrives later as a `WebRequestResult` event carrying the
/// context map built here.
#[derive(Debug, Default)]
struct WebEndpoint;

impl Endpoint for WebEndpoint {
    fn submit(&mut self, request: &SubmissionRequest) -> donation_board::Result<()> {
        let body = request.body()?;
        tracing::debug!(
            ticket = request.ticket,
            url = %request.url,
            body_len = body.len(),
            "sending web request"
        );
        web_request(
            &request.url,
            HttpVerb::Post,
            SubmissionRequest::headers(),
            body,
            request.context(),
        );
        Ok(())
    }
}

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: donation_board::AppState,

    endpoint: WebEndpoint,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: donation_board::initialize(&Config::default()),
            endpoint: WebEndpoint,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes tracing and application state,
    /// requests web access and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        donation_board::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            categories = ?config.categories.names(),
            seed = config.seed,
            banner_seconds = config.banner_duration.as_secs(),
            "parsed configuration"
        );
        self.app = donation_board::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    /// Translates a Zellij event, delegates to `handle_event`, and executes
    /// the resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        // Responses continue the trace of the span that sent the request.
        let _remote_parent = match &event {
            zellij_tile::prelude::Event::WebRequestResult(.., context) => {
                TraceContext::from_context_map(context).and_then(|t| t.attach())
            }
            _ => None,
        };

        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!(
            "plugin_update_event",
            otel.name = %span_name,
            event_type = %event_name
        );
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, headers, body, context) => {
                match Self::map_web_request_result(status, &headers, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::BannerExpired,
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Event::PermissionsResult {
                    granted: Self::handle_permission_result(permissions),
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        donation_board::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        let shifted_tab = key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]);
        if key.has_modifiers(&[KeyModifier::Ctrl]) || key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        Some(match self.app.input_mode {
            InputMode::Browse => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Tab if shifted_tab => Event::PreviousFilter,
                BareKey::Left | BareKey::Char('h') => Event::PreviousFilter,
                BareKey::Right | BareKey::Char('l') | BareKey::Tab => Event::NextFilter,
                BareKey::Char(c) if c.is_ascii_digit() => {
                    Event::SelectFilterTab(c.to_digit(10).map_or(0, |d| d as usize))
                }
                BareKey::Enter => Event::ShowDetail,
                BareKey::Char('a') => Event::OpenForm,
                BareKey::Esc => Event::DismissNotice,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            },
            InputMode::Detail => match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Event::CloseDetail,
                _ => return None,
            },
            InputMode::Form(field) => match key.bare_key {
                BareKey::Esc => Event::CloseForm,
                BareKey::Enter => Event::Submit,
                BareKey::Tab if shifted_tab => Event::PreviousField,
                BareKey::Up => Event::PreviousField,
                BareKey::Tab | BareKey::Down => Event::NextField,
                BareKey::Left | BareKey::Char('h') if field == FormField::Category => {
                    Event::PreviousCategory
                }
                BareKey::Right | BareKey::Char('l' | ' ') if field == FormField::Category => {
                    Event::NextCategory
                }
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
        })
    }

    /// Maps a web request result to a submission resolution.
    ///
    /// Results without a ticket did not come from a submission and are
    /// dropped.
    fn map_web_request_result(
        status: u16,
        headers: &BTreeMap<String, String>,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(ticket) = ticket_from_context(context) else {
            tracing::debug!(status = status, "web request result without ticket, ignoring");
            return None;
        };

        let outcome = classify_response(status, headers, body);
        tracing::debug!(ticket = ticket, status = status, outcome = ?outcome, "web request result");
        Some(Event::SubmissionResolved { ticket, outcome })
    }

    /// Logs the permission result and reports whether it was granted.
    fn handle_permission_result(permissions: PermissionStatus) -> bool {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("web access granted");
                true
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied - donations cannot be submitted");
                false
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `SendSubmission`: Start the web request
    /// - `ScheduleBannerClear`: Arm a Zellij timer
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::SendSubmission(request) => {
                if let Err(e) = self.endpoint.submit(request) {
                    tracing::warn!(
                        ticket = request.ticket,
                        error = %e,
                        "failed to start submission"
                    );
                    let outcome = SubmissionOutcome::TransportFailed {
                        reason: e.to_string(),
                    };
                    let resolved = Event::SubmissionResolved {
                        ticket: request.ticket,
                        outcome,
                    };
                    if let Err(e) = handle_event(&mut self.app, &resolved) {
                        tracing::warn!(error = %e, "error resolving failed submission");
                    }
                }
            }
            Action::ScheduleBannerClear(delay) => {
                tracing::debug!(seconds = delay.as_secs_f64(), "scheduling banner clear");
                set_timeout(delay.as_secs_f64());
            }
        }
    }
}
