//! Catalog engine: item store, category filter, card projection and detail
//! presentation.
//!
//! Data flows one way through this module:
//!
//! ```text
//! ItemStore::all() → FilterEngine::filter → project → cards (newest first)
//!                                         ↘ present → detail overlay
//! ```
//!
//! Only [`ItemStore::append`] mutates anything. The other components borrow
//! the store's slice.
//!
//! # Modules
//!
//! - [`store`]: Append-only ordered item collection
//! - [`filter`]: Category selector filtering
//! - [`projector`]: Newest-first card projection
//! - [`detail`]: Detail overlay payload
//! - [`status`]: Status token normalization shared by cards and details

pub mod detail;
pub mod filter;
pub mod projector;
pub mod status;
pub mod store;

pub use detail::{present, ItemDetail, CONTACT_NOTE};
pub use filter::FilterEngine;
pub use projector::{project, ItemCard};
pub use status::status_token;
pub use store::ItemStore;
