//! Keybinding hints.

use crate::ui::helpers::{position_cursor, truncate, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Prints the hints for the current mode, dimmed and centered. Hints that do
/// not fit are cut short.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let hints = truncate(&footer.keybindings, cols);
    let left = cols.saturating_sub(visual_len(&hints)) / 2;
    let right = cols.saturating_sub(left + visual_len(&hints));

    position_cursor(row, 1);
    print!(
        "{}{:left$}{hints}{:right$}{}",
        Theme::fg(&theme.colors.text_dim),
        "",
        "",
        Theme::reset()
    );
    row + 1
}
