//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and
//! returns the next free row.
//!
//! # Components
//!
//! - `header`: Title bar with the visible item count
//! - `filter_bar`: Category filter tabs
//! - `table`: Card list with NAME, CATEGORY and STATUS columns
//! - `empty`: Message shown when the active filter matches nothing
//! - `banner`: Submission success or failure line
//! - `footer`: Keybinding hints
//! - `detail` and `form`: Modal overlays drawn over the table

mod banner;
mod detail;
mod empty;
mod filter_bar;
mod footer;
mod form;
mod header;
mod modal;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Overlay, UIViewModel};

use banner::render_banner;
use detail::render_detail;
use empty::render_empty_state;
use filter_bar::render_filter_bar;
use footer::render_footer;
use form::render_form;
use header::render_header;
use table::{render_table_headers, render_table_rows};

/// Row the modal overlays start on, just below the filter bar.
const OVERLAY_TOP: usize = 5;

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position (row + 1).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full board layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Filter Bar]
/// [Border]
/// [Table Headers]
/// [Card Rows | Empty State]   (overlay drawn on top when open)
/// [Banner]
/// [Border]
/// [Footer]
/// ```
pub fn render_board(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_table_headers(current_row, theme);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.cards, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let banner_row = border_row.saturating_sub(1);

    render_banner(banner_row, vm.banner.as_ref(), theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);

    match &vm.overlay {
        Some(Overlay::Detail(detail)) => {
            render_detail(OVERLAY_TOP, detail, theme, cols);
        }
        Some(Overlay::Form(form)) => {
            render_form(OVERLAY_TOP, form, theme, cols);
        }
        None => {}
    }
}
