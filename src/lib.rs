//! Donation Board: a Zellij plugin for listing items offered for donation.
//!
//! Donation Board keeps an in-memory catalog of donated items and provides:
//! - A newest-first card table filtered by category tabs
//! - A detail overlay for the selected item
//! - A submission form that posts new donations to a Formspree-style endpoint
//!   and lists them once the endpoint accepts them

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point, host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event handling
//! │  - Submission coordinator                           │  ← Action dispatching
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Endpoint Layer│
//! │ (ui/)         │   │ (catalog/)    │   │ (endpoint/)   │
//! │ - Rendering   │   │ - Item store  │   │ - Wire record │
//! │ - Theming     │   │ - Filtering   │   │ - Response    │
//! │ - Components  │   │ - Projection  │   │   outcomes    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │  ← Item, categories,
//! │                                                     │     errors
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use donation_board::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! assert_eq!(state.cards().len(), 4);
//!
//! handle_event(&mut state, &Event::SelectFilterTab(2))?;
//! assert_eq!(state.cards().len(), 2);
//! # Ok::<(), donation_board::DonationBoardError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod endpoint;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FormField, InputMode};
pub use domain::{CategorySet, DonationBoardError, Item, Result, Selector};
pub use endpoint::Endpoint;
pub use ui::Theme;

use catalog::ItemStore;
use std::collections::BTreeMap;
use std::time::Duration;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/donation-board.wasm" {
///     endpoint "https://formspree.io/f/abcdwxyz"
///     categories "Appliances,Books,Apparel,Toys"
///     banner_seconds "5"
///     seed "true"
///     theme "catppuccin-mocha"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URL donations are POSTed to. Submitting is refused while unset.
    pub endpoint: Option<String>,

    /// Categories offered by the form and the filter tabs.
    ///
    /// Default: `Appliances,Books,Apparel`
    pub categories: CategorySet,

    /// How long the success banner stays visible. Default: 5 seconds
    pub banner_duration: Duration,

    /// Preload the built-in seed items. Default: `true`
    pub seed: bool,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` expands to `/host`.
    pub theme_file: Option<String>,

    /// Tracing filter, e.g. `debug` or `donation_board=trace`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            categories: CategorySet::default(),
            banner_duration: app::state::DEFAULT_BANNER_DURATION,
            seed: true,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `endpoint`: trimmed; blank counts as unset
    /// - `categories`: comma-separated; an empty list falls back to the default
    /// - `banner_seconds`: `u64`, falls back to 5 on parse error
    /// - `seed`: `false`, `no`, `off` or `0` disable seeding
    /// - `theme`, `theme_file`, `trace_level`: taken as-is
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use donation_board::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("categories".to_string(), "Books, Toys".to_string());
    /// map.insert("seed".to_string(), "false".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.categories.names(), ["Books", "Toys"]);
    /// assert!(!config.seed);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let endpoint = config
            .get("endpoint")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from);

        let categories = config
            .get("categories")
            .map(|s| CategorySet::new(s.split(',')))
            .filter(|set| !set.is_empty())
            .unwrap_or_default();

        let banner_duration = config
            .get("banner_seconds")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map_or(app::state::DEFAULT_BANNER_DURATION, Duration::from_secs);

        let seed = config.get("seed").map_or(true, |s| {
            !matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "false" | "no" | "off" | "0"
            )
        });

        Self {
            endpoint,
            categories,
            banner_duration,
            seed,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Resolves the theme: file first, then built-in name, then the default.
    /// Load failures are logged and fall back to the default theme.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(
                    theme_file = %path,
                    error = %e,
                    "failed to load theme from file, using default"
                );
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial application state from configuration.
///
/// Seeds the catalog (unless disabled), skipping seed items whose category is
/// not configured, and loads the theme.
///
/// ```rust
/// use donation_board::{initialize, Config};
///
/// let config = Config { seed: false, ..Default::default() };
/// let state = initialize(&config);
/// assert!(state.store().is_empty());
/// ```
pub fn initialize(config: &Config) -> AppState {
    let store = if config.seed {
        ItemStore::seeded(domain::seed_items(), &config.categories)
    } else {
        ItemStore::new()
    };

    tracing::debug!(
        items = store.len(),
        categories = config.categories.len(),
        endpoint_configured = config.endpoint.is_some(),
        "initializing donation board"
    );
    if config.endpoint.is_none() {
        tracing::warn!("no submission endpoint configured, donations cannot be submitted");
    }

    AppState::new(store, config.categories.clone(), config.load_theme())
        .with_endpoint(config.endpoint.clone())
        .with_banner_duration(config.banner_duration)
}
