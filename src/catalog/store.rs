//! In-memory, append-only item store.
//!
//! The store is the single source of truth for the catalog. It owns the item
//! sequence exclusively; every other component reads it through a shared
//! slice, so no item can be changed once it has been appended.

use crate::domain::{CategorySet, Item};

/// Ordered collection of donated items.
///
/// Insertion order is preserved. There is no update or removal operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a store preloaded with seed items.
    ///
    /// Seed items whose category is not part of `categories` are skipped, so
    /// every stored item stays reachable through a filter tab.
    #[must_use]
    pub fn seeded(seed: Vec<Item>, categories: &CategorySet) -> Self {
        let _span = tracing::debug_span!("seed_store", seed_count = seed.len()).entered();

        let mut store = Self::new();
        for item in seed {
            if categories.contains(&item.category) {
                store.append(item);
            } else {
                tracing::warn!(
                    item_name = %item.name,
                    category = %item.category,
                    "skipping seed item with unconfigured category"
                );
            }
        }

        tracing::debug!(item_count = store.len(), "store seeded");
        store
    }

    /// Adds one item at the end of the sequence.
    pub fn append(&mut self, item: Item) {
        tracing::debug!(
            item_name = %item.name,
            category = %item.category,
            position = self.items.len(),
            "item appended"
        );
        self.items.push(item);
    }

    /// Returns every item in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    /// Number of items appended so far, seed items included.
    ///
    /// # Example
    ///
    /// ```rust
    /// use donation_board::catalog::ItemStore;
    /// use donation_board::domain::Item;
    ///
    /// let mut store = ItemStore::new();
    /// store.append(Item::donated("Desk Lamp", "Appliances", "Used, works"));
    /// assert_eq!(store.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` until the first item is appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed_items;

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = ItemStore::new();
        for name in ["first", "second", "third"] {
            store.append(Item::donated(name, "Books", ""));
        }

        let names: Vec<&str> = store.all().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn seeding_keeps_all_default_items() {
        let store = ItemStore::seeded(seed_items(), &CategorySet::default());
        assert_eq!(store.all(), seed_items().as_slice());
    }

    #[test]
    fn seeding_skips_items_outside_configured_categories() {
        let store = ItemStore::seeded(seed_items(), &CategorySet::new(["Books"]));
        assert_eq!(store.len(), 2);
        assert!(store.all().iter().all(|i| i.category == "Books"));
    }
}
