//! Input mode state types for the application.
//!
//! The mode decides which keybindings are active and which overlay, if any,
//! is drawn over the card list:
//!
//! - **Browse**: navigate cards and switch filter tabs
//! - **Detail**: the detail overlay for one item is open
//! - **Form**: the submission form is open, with one field focused
//!
//! # Example
//!
//! ```rust
//! use donation_board::app::modes::{FormField, InputMode};
//!
//! let mode = InputMode::Form(FormField::Name);
//! assert_eq!(FormField::Name.next(), FormField::Category);
//! assert!(mode.is_form());
//! ```

/// Field of the submission form that currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Free text; required.
    Name,
    /// Cycled through the configured categories rather than typed.
    Category,
    /// Free text.
    Description,
}

impl FormField {
    /// Next field, wrapping after the description.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Name,
        }
    }

    /// Previous field, wrapping before the name.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Category => Self::Name,
            Self::Description => Self::Category,
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default card navigation and filter mode.
    ///
    /// Available keybindings: j/k (navigate), h/l or Tab (cycle filter),
    /// 0-9 (pick filter), enter (details), a (donate), q (quit).
    Browse,

    /// Detail overlay open for the selected card.
    Detail,

    /// Submission form open with the given field focused.
    Form(FormField),
}

impl InputMode {
    /// `true` for any focused form field.
    #[must_use]
    pub const fn is_form(self) -> bool {
        matches!(self, Self::Form(_))
    }
}
