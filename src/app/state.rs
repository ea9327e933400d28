//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin,
//! along with selection management, filter tab cycling, and UI view model
//! generation.
//!
//! # Architecture
//!
//! `AppState` owns the [`ItemStore`] and the [`SubmissionCoordinator`]. Both are
//! private: the store can only grow through a committed submission, and the
//! visible card list is always derived from the store and the active
//! [`Selector`] rather than cached.
//!
//! # Example
//!
//! ```rust
//! use donation_board::app::AppState;
//! use donation_board::catalog::ItemStore;
//! use donation_board::domain::{seed_items, CategorySet, Selector};
//! use donation_board::ui::Theme;
//!
//! let categories = CategorySet::default();
//! let store = ItemStore::seeded(seed_items(), &categories);
//! let mut state = AppState::new(store, categories, Theme::default());
//!
//! state.select_filter(Selector::parse("Books"));
//! assert_eq!(state.cards()[0].name, "Academic Thesis Guide");
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.cards.len(), 2);
//! ```

use super::form::FormState;
use super::modes::{FormField, InputMode};
use super::submission::{Resolution, SubmissionCoordinator};
use crate::catalog::{present, project, FilterEngine, ItemCard, ItemDetail, ItemStore};
use crate::domain::error::{DonationBoardError, Result};
use crate::domain::{CategorySet, Item, Selector};
use crate::endpoint::{SubmissionOutcome, SubmissionRequest};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BannerInfo, BannerTone, CardRow, EmptyState, FilterBarInfo, FilterTab, FooterInfo, FormInfo,
    HeaderInfo, Overlay, UIViewModel,
};
use std::time::Duration;

/// Default lifetime of the success banner.
pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_secs(5);

/// Shown after a committed submission until the banner timer fires.
pub const SUCCESS_MESSAGE: &str = "Thank you! Your donation has been listed.";

/// Shown when the endpoint answers with a failure.
pub const REJECTED_MESSAGE: &str =
    "Submission failed. Please ensure your submission endpoint is correct and activated.";

/// Shown when the request to the endpoint could not complete.
pub const FAILED_MESSAGE: &str = "An error occurred during submission. Please check your network.";

/// Reason shown when submitting without the `WebAccess` permission.
pub const WEB_ACCESS_DENIED: &str = "web access permission was denied";

/// Rows used by everything except the card rows: blank line, header, two
/// borders around the filter bar, the filter bar, table headers, banner,
/// bottom border, footer, and the unused last row.
const CHROME_ROWS: usize = 10;

/// Width of the NAME column, including the two-space gutter.
pub const NAME_COLUMN_WIDTH: usize = 37;

/// Width of the CATEGORY column, including the gutter.
pub const CATEGORY_COLUMN_WIDTH: usize = 16;

/// User-visible signal raised by submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A donation was committed. Cleared by the banner timer.
    Success,
    /// The endpoint rejected the donation.
    Rejected,
    /// The donation could not be delivered.
    Failed,
    /// The submission never started; holds the reason.
    Blocked(String),
}

impl Notice {
    /// Banner text for this notice.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Success => SUCCESS_MESSAGE.to_string(),
            Self::Rejected => REJECTED_MESSAGE.to_string(),
            Self::Failed => FAILED_MESSAGE.to_string(),
            Self::Blocked(reason) => format!("Cannot submit: {reason}"),
        }
    }

    /// Only success notices expire on their own.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    store: ItemStore,
    filter: FilterEngine,
    submission: SubmissionCoordinator,

    /// Active filter tab. Only changed by filter events and commits.
    pub selector: Selector,

    /// Zero-based index of the selected card within the newest-first list.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Submission form contents; kept across open/close until a commit.
    pub form: FormState,

    /// Payload of the open detail overlay.
    pub detail: Option<ItemDetail>,

    /// Banner line above the footer.
    pub notice: Option<Notice>,

    /// How long the success banner stays up.
    pub banner_duration: Duration,

    /// Last answer to the `WebAccess` permission request; `None` until Zellij
    /// replies.
    pub web_access: Option<bool>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates browsing state over `store`, showing every item, with no
    /// submission endpoint.
    #[must_use]
    pub fn new(store: ItemStore, categories: CategorySet, theme: Theme) -> Self {
        Self {
            store,
            filter: FilterEngine::new(categories),
            submission: SubmissionCoordinator::new(None),
            selector: Selector::All,
            selected_index: 0,
            input_mode: InputMode::Browse,
            form: FormState::default(),
            detail: None,
            notice: None,
            banner_duration: DEFAULT_BANNER_DURATION,
            web_access: None,
            theme,
        }
    }

    /// Sets the URL submissions are delivered to.
    #[must_use]
    pub fn with_endpoint(mut self, url: Option<String>) -> Self {
        self.submission = SubmissionCoordinator::new(url);
        self
    }

    /// Sets how long the success banner stays up.
    #[must_use]
    pub const fn with_banner_duration(mut self, duration: Duration) -> Self {
        self.banner_duration = duration;
        self
    }

    /// Read-only view of the catalog. The store only grows through a committed
    /// submission, so there is no mutable accessor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use donation_board::{initialize, Config};
    ///
    /// let state = initialize(&Config::default());
    /// assert_eq!(state.store().len(), 4);
    /// ```
    #[must_use]
    pub const fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Configured categories, in filter tab order after `All`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use donation_board::{initialize, Config};
    ///
    /// let state = initialize(&Config::default());
    /// assert_eq!(state.categories().names(), ["Appliances", "Books", "Apparel"]);
    /// ```
    #[must_use]
    pub const fn categories(&self) -> &CategorySet {
        self.filter.categories()
    }

    /// State of the submission currently being delivered, if any.
    #[must_use]
    pub const fn submission(&self) -> &SubmissionCoordinator {
        &self.submission
    }

    /// Items passing the active filter, newest first.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&Item> {
        let mut items = self.filter.filter(self.store.all(), &self.selector);
        items.reverse();
        items
    }

    /// Cards for the active filter, newest first.
    #[must_use]
    pub fn cards(&self) -> Vec<ItemCard> {
        project(self.filter.filter(self.store.all(), &self.selector))
    }

    /// Switches the active filter and moves the selection to the top.
    pub fn select_filter(&mut self, selector: Selector) {
        tracing::debug!(selector = %selector, "filter selected");
        self.selector = selector;
        self.selected_index = 0;
    }

    /// Switches to the filter tab at `index` (0 is `All`). Out-of-range
    /// indices are ignored and return `false`.
    pub fn select_filter_tab(&mut self, index: usize) -> bool {
        match self.categories().selectors().into_iter().nth(index) {
            Some(selector) => {
                self.select_filter(selector);
                true
            }
            None => false,
        }
    }

    /// Moves to the next filter tab, wrapping to `All`.
    pub fn next_filter(&mut self) {
        let tabs = self.categories().selectors();
        let next = tabs
            .iter()
            .position(|s| s == &self.selector)
            .map_or(0, |i| (i + 1) % tabs.len());
        self.select_filter_tab(next);
    }

    /// Moves to the previous filter tab, wrapping to the last category.
    pub fn previous_filter(&mut self) {
        let tabs = self.categories().selectors();
        let previous = tabs
            .iter()
            .position(|s| s == &self.selector)
            .map_or(0, |i| i.checked_sub(1).unwrap_or(tabs.len() - 1));
        self.select_filter_tab(previous);
    }

    /// Moves selection cursor down by one card, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        let count = self.visible_items().len();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves selection cursor up by one card, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        let count = self.visible_items().len();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Detail payload for the selected card, if any card is visible.
    #[must_use]
    pub fn selected_detail(&self) -> Option<ItemDetail> {
        self.visible_items()
            .get(self.selected_index)
            .map(|item| present(item))
    }

    /// Starts a submission from the current form contents.
    ///
    /// Zellij silently drops web requests from a plugin without `WebAccess`,
    /// so nothing is started once the permission has been denied.
    ///
    /// # Errors
    ///
    /// - [`DonationBoardError::Config`] while web access is denied.
    /// - The coordinator's in-flight, validation and configuration errors.
    pub fn begin_submission(&mut self) -> Result<SubmissionRequest> {
        if self.web_access == Some(false) {
            return Err(DonationBoardError::Config(WEB_ACCESS_DENIED.to_string()));
        }
        let fields = self.form.fields(self.filter.categories());
        self.submission.begin(fields, self.filter.categories())
    }

    /// Resolves the in-flight submission and returns the coordinator to idle.
    ///
    /// A commit appends to the store here, in the same call that reports it.
    pub fn resolve_submission(
        &mut self,
        ticket: u64,
        outcome: SubmissionOutcome,
    ) -> Option<Resolution> {
        let resolution = self.submission.resolve(ticket, outcome, &mut self.store);
        if resolution.is_some() {
            self.submission.finish();
        }
        resolution
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Subtract the UI chrome from the terminal height
    /// 2. Center the window around the selected card
    /// 3. Shift the window back if it runs past the last card
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let cards = self.cards();

        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);
        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(cards.len());
        visible_start = visible_start.min(visible_end);

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && cards.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let card_rows: Vec<CardRow> = cards[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, card)| {
                Self::compute_card_row(card, visible_start + relative_idx == self.selected_index)
            })
            .collect();

        let empty_state = cards.is_empty().then(|| self.compute_empty_state());

        UIViewModel {
            cards: card_rows,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compute_header(cards.len()),
            filter_bar: self.compute_filter_bar(),
            footer: self.compute_footer(),
            empty_state,
            banner: self.compute_banner(),
            overlay: self.compute_overlay(),
        }
    }

    fn compute_card_row(card: &ItemCard, is_selected: bool) -> CardRow {
        CardRow {
            name: crate::ui::helpers::truncate(&card.name, NAME_COLUMN_WIDTH - 2),
            category: crate::ui::helpers::truncate(&card.category, CATEGORY_COLUMN_WIDTH - 2),
            status: card.status.clone(),
            status_token: card.status_token.clone(),
            is_selected,
        }
    }

    fn compute_header(&self, visible: usize) -> HeaderInfo {
        let title = if self.selector == Selector::All {
            format!(" Donation Board ({visible}) ")
        } else {
            format!(" Donation Board: {} ({visible} of {}) ", self.selector, self.store.len())
        };
        HeaderInfo { title }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        let tabs = self
            .categories()
            .selectors()
            .into_iter()
            .enumerate()
            .map(|(index, selector)| FilterTab {
                hotkey: u32::try_from(index).ok().and_then(|i| char::from_digit(i, 10)),
                is_active: selector == self.selector,
                label: selector.label().to_string(),
            })
            .collect();
        FilterBarInfo { tabs }
    }

    fn compute_empty_state(&self) -> EmptyState {
        match &self.selector {
            Selector::All => EmptyState {
                message: "No donations yet".to_string(),
                subtitle: "Press 'a' to donate an item".to_string(),
            },
            Selector::Category(name) => EmptyState {
                message: format!("No items in {name}"),
                subtitle: "Press 0 to show all items".to_string(),
            },
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Browse => {
                "j/k: move  h/l/Tab: filter  0-9: pick  Enter: details  a: donate  q: quit"
            }
            InputMode::Detail => "ESC/Enter/q: close details",
            InputMode::Form(FormField::Category) => {
                "h/l: change category  Tab/Up/Down: field  Enter: submit  ESC: cancel"
            }
            InputMode::Form(_) => "Type to edit  Tab/Up/Down: field  Enter: submit  ESC: cancel",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_banner(&self) -> Option<BannerInfo> {
        self.notice.as_ref().map(|notice| BannerInfo {
            message: notice.message(),
            tone: if notice.is_success() {
                BannerTone::Success
            } else {
                BannerTone::Error
            },
        })
    }

    fn compute_overlay(&self) -> Option<Overlay> {
        match self.input_mode {
            InputMode::Browse => None,
            InputMode::Detail => self.detail.clone().map(Overlay::Detail),
            InputMode::Form(focus) => {
                let is_submitting = self.submission.is_submitting();
                let fields = self.form.fields(self.categories());
                Some(Overlay::Form(FormInfo {
                    name: fields.name,
                    category: fields.category,
                    description: fields.description,
                    focus,
                    is_submitting,
                    submit_label: if is_submitting {
                        "Submitting...".to_string()
                    } else {
                        "Submit Donation Information".to_string()
                    },
                }))
            }
        }
    }
}
