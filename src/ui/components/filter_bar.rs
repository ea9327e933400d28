//! Filter tab bar renderer.

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Renders the filter tabs on one line at the specified row.
///
/// Each tab shows its digit hotkey and label; the active tab uses the
/// `tab_active_*` colors. Tabs that do not fit the width are dropped.
///
/// ```text
///  [0] All   [1] Appliances   [2] Books   [3] Apparel
/// ```
///
/// Returns the next available row position (row + 1).
pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(" ");
    let mut used = 1;

    for tab in &bar.tabs {
        let text = tab
            .hotkey
            .map_or_else(|| format!(" {} ", tab.label), |key| format!(" [{key}] {} ", tab.label));
        let len = visual_len(&text);
        if used + len > cols {
            break;
        }

        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.tab_active_fg));
            print!("{}", Theme::bg(&theme.colors.tab_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{text}");
        print!("{}", Theme::reset());

        if used + len < cols {
            print!(" ");
            used += 1;
        }
        used += len;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
