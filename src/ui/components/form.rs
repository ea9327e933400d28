//! Submission form modal.

use super::modal::{content_width, render_modal, ModalLine};
use crate::app::modes::FormField;
use crate::ui::helpers::{truncate, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormInfo;

/// Description lines visible while typing; older lines scroll off the top.
const DESCRIPTION_ROWS: usize = 3;

/// Renders the donation form starting at `top`.
///
/// ```text
/// ┌─ Donate an Item ────────────┐
/// │ Item Name                    │
/// │ > Desk Lamp_                 │
/// │ Category                     │
/// │   < Appliances >             │
/// │ Detailed Description         │
/// │   Used, works                │
/// │                              │
/// │ [ Submit Donation Information ]
/// └──────────────────────────────┘
/// ```
pub fn render_form(top: usize, form: &FormInfo, theme: &Theme, cols: usize) -> usize {
    let width = content_width(cols).saturating_sub(2);
    let text = Theme::fg(&theme.colors.text_normal);
    let focused = Theme::fg(&theme.colors.input_focus);

    let label = |title: &str, field: FormField| {
        let style = if form.focus == field {
            format!("{}{focused}", Theme::bold())
        } else {
            Theme::fg(&theme.colors.text_dim)
        };
        ModalLine::styled(style, title)
    };
    let marker = |field: FormField| {
        if form.focus == field {
            ModalLine::styled(focused.clone(), "> ")
        } else {
            ModalLine::styled(String::new(), "  ")
        }
    };
    let cursor = |field: FormField| if form.focus == field { "_" } else { "" };

    let name = truncate(&form.name, width.saturating_sub(1));
    let mut lines = vec![
        label("Item Name *", FormField::Name),
        marker(FormField::Name).push(text.clone(), format!("{name}{}", cursor(FormField::Name))),
        label("Category", FormField::Category),
        marker(FormField::Category)
            .push(Theme::fg(&theme.colors.text_dim), "< ")
            .push(text.clone(), &form.category)
            .push(Theme::fg(&theme.colors.text_dim), " >"),
        label("Detailed Description", FormField::Description),
    ];

    let typed = format!("{}{}", form.description, cursor(FormField::Description));
    let mut description = wrap_text(&typed, width);
    if description.is_empty() {
        description.push(String::new());
    }
    let skip = description.len().saturating_sub(DESCRIPTION_ROWS);
    for (i, line) in description.into_iter().skip(skip).enumerate() {
        let prefix = if i == 0 {
            marker(FormField::Description)
        } else {
            ModalLine::styled(String::new(), "  ")
        };
        lines.push(prefix.push(text.clone(), line));
    }
    for _ in 0..DESCRIPTION_ROWS.saturating_sub(lines.len() - 5) {
        lines.push(ModalLine::blank());
    }

    lines.push(ModalLine::blank());
    let button = if form.is_submitting {
        format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
    } else {
        format!(
            "{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.tab_active_fg),
            Theme::bg(&theme.colors.tab_active_bg)
        )
    };
    lines.push(ModalLine::styled(button, format!(" {} ", form.submit_label)));

    render_modal(top, "Donate an Item", &lines, theme, cols)
}
