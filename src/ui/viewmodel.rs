//! View model types representing renderable UI state.
//!
//! View models are computed from application state and contain only
//! display-ready data: truncated names, status tokens for coloring, filter
//! tab labels, and the payload of whichever overlay is open.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic.
//!
//! # Example
//!
//! ```rust
//! use donation_board::ui::viewmodel::{
//!     CardRow, FilterBarInfo, FooterInfo, HeaderInfo, UIViewModel,
//! };
//!
//! let vm = UIViewModel {
//!     cards: vec![CardRow {
//!         name: "Desk Lamp".to_string(),
//!         category: "Appliances".to_string(),
//!         status: "Available".to_string(),
//!         status_token: "available".to_string(),
//!         is_selected: true,
//!     }],
//!     selected_index: 0,
//!     header: HeaderInfo { title: " Donation Board (1) ".to_string() },
//!     filter_bar: FilterBarInfo { tabs: vec![] },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//!     banner: None,
//!     overlay: None,
//! };
//! assert!(vm.cards[vm.selected_index].is_selected);
//! ```

use crate::app::modes::FormField;
use crate::catalog::ItemDetail;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Card rows in the visible window, newest first.
    pub cards: Vec<CardRow>,

    /// Index of the selected card within `cards`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    pub filter_bar: FilterBarInfo,

    pub footer: FooterInfo,

    /// Set when the active filter matches nothing.
    pub empty_state: Option<EmptyState>,

    /// Success or failure line above the footer.
    pub banner: Option<BannerInfo>,

    /// Detail modal or submission form drawn over the table.
    pub overlay: Option<Overlay>,
}

/// One row of the card table.
#[derive(Debug, Clone)]
pub struct CardRow {
    pub name: String,
    pub category: String,
    pub status: String,
    /// Normalized status used to pick the status color.
    pub status_token: String,
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Filter tabs, `All` first.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    pub tabs: Vec<FilterTab>,
}

#[derive(Debug, Clone)]
pub struct FilterTab {
    pub label: String,
    /// Digit key that selects this tab, for the first ten tabs.
    pub hotkey: Option<char>,
    pub is_active: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown in place of the table when the active filter matches no items.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No items in Toys").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct BannerInfo {
    pub message: String,
    pub tone: BannerTone,
}

/// Modal content drawn over the card table.
#[derive(Debug, Clone)]
pub enum Overlay {
    Detail(ItemDetail),
    Form(FormInfo),
}

/// Submission form display information.
#[derive(Debug, Clone)]
pub struct FormInfo {
    pub name: String,
    pub category: String,
    pub description: String,
    /// Field that receives typed input.
    pub focus: FormField,
    pub is_submitting: bool,
    /// "Submit Donation Information", or "Submitting..." while in flight.
    pub submit_label: String,
}
