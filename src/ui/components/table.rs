//! Card table renderer.
//!
//! Renders the donation cards as a three-column table with NAME, CATEGORY and
//! STATUS columns. The status column is colored by its normalized token.

use crate::app::state::{CATEGORY_COLUMN_WIDTH, NAME_COLUMN_WIDTH};
use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardRow;

/// Renders the table column headers at the specified row.
///
/// Returns the next available row position (row + 1).
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<name$}{:<category$}{}",
        "NAME",
        "CATEGORY",
        "STATUS",
        name = NAME_COLUMN_WIDTH,
        category = CATEGORY_COLUMN_WIDTH
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all card rows starting at the specified row.
///
/// Returns the next available row position (row + number of cards).
pub fn render_table_rows(row: usize, cards: &[CardRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_table_row(current_row, card, theme, cols);
    }
    current_row
}

/// Renders a single card row.
///
/// ```text
/// NAME (35 chars) [2 spaces] CATEGORY (14 chars) [2 spaces] STATUS [padding]
/// ```
///
/// The row is padded to the full terminal width so the selection background
/// covers the whole line. Selected rows keep the selection foreground for the
/// status text.
fn render_table_row(row: usize, card: &CardRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base = if card.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{base}");

    print!("{}", card.name);
    print!("{}", " ".repeat(NAME_COLUMN_WIDTH.saturating_sub(visual_len(&card.name))));

    print!("{}", card.category);
    print!(
        "{}",
        " ".repeat(CATEGORY_COLUMN_WIDTH.saturating_sub(visual_len(&card.category)))
    );

    if !card.is_selected {
        print!("{}", Theme::fg(theme.status_color(&card.status_token)));
    }
    print!("{}", card.status);
    print!("{base}");

    let line_len = NAME_COLUMN_WIDTH + CATEGORY_COLUMN_WIDTH + visual_len(&card.status);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
