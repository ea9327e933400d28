//! Item detail modal.

use super::modal::{content_width, render_modal, ModalLine};
use crate::catalog::ItemDetail;
use crate::ui::helpers::wrap_text;
use crate::ui::theme::Theme;

/// Description lines shown before the text is cut with an ellipsis line.
const MAX_DESCRIPTION_LINES: usize = 8;

/// Renders the detail modal for one item starting at `top`.
///
/// Shows name, category and status (colored by status token), the wrapped
/// description and the fixed privacy note. The contact itself is never
/// printed.
pub fn render_detail(top: usize, detail: &ItemDetail, theme: &Theme, cols: usize) -> usize {
    let lines = detail_lines(detail, theme, content_width(cols));
    render_modal(top, "Item Details", &lines, theme, cols)
}

fn detail_lines(detail: &ItemDetail, theme: &Theme, width: usize) -> Vec<ModalLine> {
    let label = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_dim));
    let value = Theme::fg(&theme.colors.text_normal);
    let title = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));

    let mut lines = vec![
        ModalLine::styled(title, &detail.name),
        ModalLine::blank(),
        ModalLine::styled(label.clone(), "Category: ").push(value.clone(), &detail.category),
        ModalLine::styled(label.clone(), "Status:   ")
            .push(Theme::fg(theme.status_color(&detail.status_token)), &detail.status),
        ModalLine::blank(),
        ModalLine::styled(label, "Description"),
    ];

    let mut description = wrap_text(&detail.description, width);
    if description.is_empty() {
        lines.push(ModalLine::styled(Theme::dim(), "(no description)"));
    } else {
        let cut = description.len() > MAX_DESCRIPTION_LINES;
        description.truncate(MAX_DESCRIPTION_LINES);
        lines.extend(description.into_iter().map(|l| ModalLine::styled(value.clone(), l)));
        if cut {
            lines.push(ModalLine::styled(Theme::dim(), "..."));
        }
    }

    lines.push(ModalLine::blank());
    let note_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    lines.extend(
        wrap_text(detail.contact_note, width)
            .into_iter()
            .map(|l| ModalLine::styled(note_style.clone(), l)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::present;
    use crate::domain::Item;

    fn texts(item: &Item) -> Vec<String> {
        detail_lines(&present(item), &Theme::default(), 60)
            .iter()
            .map(ModalLine::text)
            .collect()
    }

    #[test]
    fn contact_stays_out_of_the_modal() {
        let item = Item::new("Radio", "Appliances", "Works", "Available", "Ms. Lin, 555-0100");
        let lines = texts(&item);

        assert!(lines.iter().all(|l| !l.contains("Ms. Lin")));
        assert!(lines.iter().any(|l| l.contains("will not be")));
    }

    #[test]
    fn empty_description_gets_placeholder() {
        let lines = texts(&Item::donated("Radio", "Appliances", ""));
        assert!(lines.contains(&"(no description)".to_string()));
        assert!(lines.contains(&"Status:   Available".to_string()));
    }
}
