//! Empty state component renderer.
//!
//! Drawn in place of the card table when the active filter matches nothing,
//! for example an empty catalog or a category nobody has donated to yet.

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state message centered below `row`.
///
/// ```text
/// [blank line]
///            No items in Toys
///        Press 0 to show all items
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let centered = |text: &str| {
        let len = visual_len(text);
        let padding = (cols.saturating_sub(len)) / 2;
        format!(
            "{}{text}{}",
            " ".repeat(padding),
            " ".repeat(cols.saturating_sub(padding + len))
        )
    };

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", centered(&empty.message));
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", centered(&empty.subtitle));
    print!("{}", Theme::reset());
}
