//! Category filter over the item sequence.
//!
//! The filter engine narrows a borrowed item slice to the items matching a
//! [`Selector`]. It never copies or mutates items: the result is a vector of
//! references into the caller's slice, in the same relative order.

use crate::domain::{CategorySet, Item, Selector};

/// Narrows items by category using the configured category set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterEngine {
    categories: CategorySet,
}

impl FilterEngine {
    /// Creates an engine that accepts the categories in `categories`.
    #[must_use]
    pub const fn new(categories: CategorySet) -> Self {
        Self { categories }
    }

    /// Categories this engine treats as known.
    #[must_use]
    pub const fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Returns the items matching `selector`, order preserved.
    ///
    /// - [`Selector::All`] yields every item.
    /// - A known category yields the items in that category.
    /// - A category outside the configured set yields an empty result. This
    ///   is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use donation_board::catalog::FilterEngine;
    /// use donation_board::domain::{seed_items, CategorySet, Selector};
    ///
    /// let items = seed_items();
    /// let engine = FilterEngine::new(CategorySet::default());
    ///
    /// assert_eq!(engine.filter(&items, &Selector::All).len(), 4);
    /// assert_eq!(engine.filter(&items, &Selector::parse("Books")).len(), 2);
    /// assert!(engine.filter(&items, &Selector::parse("NoSuchCategory")).is_empty());
    /// ```
    #[must_use]
    pub fn filter<'a>(&self, items: &'a [Item], selector: &Selector) -> Vec<&'a Item> {
        let _span = tracing::debug_span!("apply_category_filter",
            total_items = items.len(),
            selector = %selector
        )
        .entered();

        let filtered: Vec<&Item> = match selector {
            Selector::All => items.iter().collect(),
            Selector::Category(name) if self.categories.contains(name) => {
                items.iter().filter(|item| &item.category == name).collect()
            }
            Selector::Category(name) => {
                tracing::debug!(category = %name, "unknown category selector");
                Vec::new()
            }
        };

        tracing::debug!(filtered_count = filtered.len(), "category filter applied");
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_items() -> Vec<Item> {
        vec![
            Item::donated("Kettle", "Appliances", ""),
            Item::donated("Atlas", "Books", ""),
            Item::donated("Scarf", "Apparel", ""),
            Item::donated("Toaster", "Appliances", ""),
            Item::donated("Novel", "Books", ""),
        ]
    }

    #[test]
    fn concrete_category_keeps_relative_order() {
        let items = mixed_items();
        let engine = FilterEngine::default();

        let names: Vec<&str> = engine
            .filter(&items, &Selector::parse("Appliances"))
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, ["Kettle", "Toaster"]);
    }

    #[test]
    fn all_returns_every_item_unchanged() {
        let items = mixed_items();
        let engine = FilterEngine::default();

        let filtered = engine.filter(&items, &Selector::All);
        assert_eq!(filtered.len(), items.len());
        assert!(filtered.iter().zip(&items).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn unconfigured_category_yields_nothing_even_if_items_carry_it() {
        let items = vec![Item::donated("Puzzle", "Toys", "")];
        let engine = FilterEngine::default();

        assert!(engine.filter(&items, &Selector::parse("Toys")).is_empty());
    }

    #[test]
    fn every_category_partitions_the_input() {
        let items = mixed_items();
        let engine = FilterEngine::default();

        let total: usize = engine
            .categories()
            .names()
            .iter()
            .map(|c| engine.filter(&items, &Selector::parse(c)).len())
            .sum();
        assert_eq!(total, items.len());
    }
}
