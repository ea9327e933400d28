//! Title bar.

use crate::ui::helpers::{position_cursor, truncate, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Prints the title centered on `row` across the whole width and returns the
/// row below it.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let left = cols.saturating_sub(visual_len(&title)) / 2;
    let right = cols.saturating_sub(left + visual_len(&title));
    let background = theme
        .colors
        .header_bg
        .as_deref()
        .map(Theme::bg)
        .unwrap_or_default();

    position_cursor(row, 1);
    print!(
        "{}{}{background}{:left$}{title}{:right$}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        "",
        "",
        Theme::reset()
    );
    row + 1
}
