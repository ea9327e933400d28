//! Terminal rendering of the board.
//!
//! Rendering is split in two: [`AppState::compute_viewmodel`](crate::AppState)
//! decides *what* is on screen, and the [`components`] print it with cursor
//! escapes and [`theme`] colors.
//!
//! ```text
//! AppState ─ compute_viewmodel ─▶ UIViewModel ─ render_board ─▶ pane
//! ```
//!
//! [`helpers`] holds the text measuring and wrapping shared by components.

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    BannerInfo, BannerTone, CardRow, EmptyState, FilterBarInfo, FilterTab, FooterInfo, FormInfo,
    HeaderInfo, Overlay, UIViewModel,
};
