//! Domain layer for the Donation Board plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Item model, seed data, and the internal status/contact values
//! - [`category`]: Configured category set and filter selectors
//!
//! # Examples
//!
//! ```
//! use donation_board::domain::{CategorySet, Item, Selector};
//!
//! let categories = CategorySet::default();
//! let item = Item::donated("Desk Lamp", "Appliances", "Used, works");
//! assert!(categories.contains(&item.category));
//! assert_eq!(Selector::parse("All"), Selector::All);
//! ```

pub mod category;
pub mod error;
pub mod item;

pub use category::{CategorySet, Selector, ALL_SELECTOR, DEFAULT_CATEGORIES};
pub use error::{DonationBoardError, Result};
pub use item::{seed_items, Item, CONTACT_INTERNAL, STATUS_AVAILABLE};
