//! Render entry point called from the plugin's `render` hook.

use crate::app::AppState;
use crate::ui::components;

/// Draws the whole board for a `rows` x `cols` pane to stdout.
///
/// The screen is not cleared first: Zellij gives the plugin a fresh pane
/// buffer on every render.
///
/// ```rust
/// use donation_board::app::AppState;
/// use donation_board::catalog::ItemStore;
/// use donation_board::domain::CategorySet;
/// use donation_board::ui::{render, Theme};
///
/// let state = AppState::new(ItemStore::new(), CategorySet::default(), Theme::default());
/// render(&state, 24, 80);
/// ```
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_board(&viewmodel, &state.theme, cols, rows);
}
