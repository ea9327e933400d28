//! Category configuration and filter selectors.
//!
//! The set of valid categories is injected through plugin configuration rather
//! than hardcoded. A [`Selector`] is either the `All` sentinel or one category
//! name, exactly as the filter tabs supply them.

use std::fmt;

/// Label of the sentinel selector that matches every item.
pub const ALL_SELECTOR: &str = "All";

/// Categories offered when the configuration does not name any.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Appliances", "Books", "Apparel"];

/// Ordered, duplicate-free list of known categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Builds a set from names, dropping blanks, duplicates and the reserved
    /// `All` label while keeping first-seen order.
    ///
    /// # Examples
    ///
    /// ```
    /// use donation_board::domain::CategorySet;
    ///
    /// let set = CategorySet::new(["Books", " Toys ", "Books", "", "All"]);
    /// assert_eq!(set.names(), ["Books", "Toys"]);
    /// ```
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || name == ALL_SELECTOR || unique.iter().any(|n| n == name) {
                continue;
            }
            unique.push(name.to_string());
        }
        Self { names: unique }
    }

    /// Exact, case-sensitive membership test.
    ///
    /// # Example
    ///
    /// ```rust
    /// use donation_board::domain::CategorySet;
    ///
    /// let set = CategorySet::default();
    /// assert!(set.contains("Books"));
    /// assert!(!set.contains("books"));
    /// ```
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Category names in configured order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of categories, not counting `All`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// `true` when no category survived parsing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Category at `index` in configured order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use donation_board::domain::CategorySet;
    ///
    /// let set = CategorySet::default();
    /// assert_eq!(set.get(1), Some("Books"));
    /// assert_eq!(set.get(3), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Every selector the filter bar offers: `All` first, then each category.
    #[must_use]
    pub fn selectors(&self) -> Vec<Selector> {
        std::iter::once(Selector::All)
            .chain(self.names.iter().cloned().map(Selector::Category))
            .collect()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}

/// Category value used to narrow the displayed set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// Matches every item.
    #[default]
    All,
    /// Matches items whose category equals the name exactly.
    Category(String),
}

impl Selector {
    /// Parses a selector value; `"All"` is the sentinel, anything else names
    /// a category (known or not).
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == ALL_SELECTOR {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    /// Text shown on the filter tab.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_SELECTOR,
            Self::Category(name) => name,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
