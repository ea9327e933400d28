//! Bordered modal frame shared by the detail and form overlays.

use crate::ui::helpers::{position_cursor, truncate, visual_len};
use crate::ui::theme::Theme;

/// Horizontal margin between the terminal edge and the modal frame.
const MODAL_MARGIN: usize = 4;

/// Widest the modal frame grows on large terminals.
const MAX_MODAL_WIDTH: usize = 76;

/// One line of modal content, made of styled segments.
#[derive(Debug, Default)]
pub(super) struct ModalLine {
    segments: Vec<(String, String)>,
}

impl ModalLine {
    pub(super) fn blank() -> Self {
        Self::default()
    }

    pub(super) fn styled(style: impl Into<String>, text: impl Into<String>) -> Self {
        Self::blank().push(style, text)
    }

    #[must_use]
    pub(super) fn push(mut self, style: impl Into<String>, text: impl Into<String>) -> Self {
        self.segments.push((style.into(), text.into()));
        self
    }

    /// Unstyled text of the line.
    #[cfg(test)]
    pub(super) fn text(&self) -> String {
        self.segments.iter().map(|(_, text)| text.as_str()).collect()
    }
}

/// Inner content width of a modal drawn on a terminal `cols` wide.
pub(super) fn content_width(cols: usize) -> usize {
    frame_width(cols).saturating_sub(4)
}

fn frame_width(cols: usize) -> usize {
    cols.saturating_sub(MODAL_MARGIN * 2).min(MAX_MODAL_WIDTH)
}

/// Draws a framed, horizontally centered box starting at `top`.
///
/// ```text
/// ┌─ Title ──────────┐
/// │ content          │
/// └──────────────────┘
/// ```
///
/// Lines wider than the frame are truncated. Returns the row after the
/// bottom border.
pub(super) fn render_modal(
    top: usize,
    title: &str,
    lines: &[ModalLine],
    theme: &Theme,
    cols: usize,
) -> usize {
    let width = frame_width(cols);
    let inner = width.saturating_sub(2);
    let text_width = inner.saturating_sub(2);
    let left = (cols.saturating_sub(width)) / 2 + 1;
    let border = Theme::fg(&theme.colors.modal_border);

    let title = truncate(&format!(" {title} "), inner.saturating_sub(1));
    position_cursor(top, left);
    print!("{border}┌─{}", Theme::bold());
    print!("{title}{}{border}", Theme::reset());
    print!(
        "{}┐{}",
        "─".repeat(inner.saturating_sub(1 + visual_len(&title))),
        Theme::reset()
    );

    let mut row = top + 1;
    for line in lines {
        position_cursor(row, left);
        print!("{border}│{} ", Theme::reset());

        let mut used = 0;
        for (style, text) in &line.segments {
            let room = text_width.saturating_sub(used);
            if room == 0 {
                break;
            }
            let text = truncate(text, room);
            used += visual_len(&text);
            print!("{style}{text}{}", Theme::reset());
        }

        print!("{}", " ".repeat(text_width.saturating_sub(used) + 1));
        print!("{border}│{}", Theme::reset());
        row += 1;
    }

    position_cursor(row, left);
    print!("{border}└{}┘{}", "─".repeat(inner), Theme::reset());
    row + 1
}
