//! Submission banner renderer.

use crate::ui::helpers::{position_cursor, truncate, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BannerInfo, BannerTone};

/// Renders the banner message centered on `row`, or clears the row when
/// there is no banner.
pub fn render_banner(row: usize, banner: Option<&BannerInfo>, theme: &Theme, cols: usize) {
    position_cursor(row, 1);

    let Some(banner) = banner else {
        print!("{}", " ".repeat(cols));
        return;
    };

    let color = match banner.tone {
        BannerTone::Success => &theme.colors.banner_success,
        BannerTone::Error => &theme.colors.banner_error,
    };
    let message = truncate(&banner.message, cols);
    let len = visual_len(&message);
    let padding = (cols.saturating_sub(len)) / 2;

    print!("{}", " ".repeat(padding));
    print!("{}{}", Theme::bold(), Theme::fg(color));
    print!("{message}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}
