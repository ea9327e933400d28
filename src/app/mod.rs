//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the catalog and
//! endpoint layers. It implements the event-driven architecture that powers the
//! interactive UI.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────── Endpoint Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Submission form input state
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central application state container and view model computation
//! - [`submission`]: Submission coordinator state machine

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;
pub mod submission;

pub use actions::Action;
pub use form::{FormFields, FormState};
pub use handler::{handle_event, Event};
pub use modes::{FormField, InputMode};
pub use state::{AppState, Notice};
pub use submission::{Resolution, SubmissionCoordinator, SubmissionState};
