//! Submission form input state.

use crate::domain::CategorySet;

/// Raw form fields as handed to the submission coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub name: String,
    pub category: String,
    pub description: String,
}

impl FormFields {
    /// Bundles raw field values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: description.into(),
        }
    }
}

/// Text typed into the form so far, plus the chosen category.
///
/// The category is an index into the configured [`CategorySet`], so the form
/// can only ever offer known categories.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub name: String,
    pub category_index: usize,
    pub description: String,
}

impl FormState {
    /// Clears every field back to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Selects the next category, wrapping to the first. No-op for an empty set.
    pub fn next_category(&mut self, categories: &CategorySet) {
        if categories.is_empty() {
            return;
        }
        self.category_index = (self.category_index + 1) % categories.len();
    }

    /// Selects the previous category, wrapping to the last. No-op for an empty set.
    pub fn previous_category(&mut self, categories: &CategorySet) {
        if categories.is_empty() {
            return;
        }
        self.category_index = self
            .category_index
            .checked_sub(1)
            .unwrap_or(categories.len() - 1);
    }

    /// Snapshot of the form as raw submission fields.
    ///
    /// An out-of-range category index (only possible with an empty category
    /// set) produces an empty category, which submission validation rejects.
    #[must_use]
    pub fn fields(&self, categories: &CategorySet) -> FormFields {
        FormFields {
            name: self.name.clone(),
            category: categories
                .get(self.category_index)
                .unwrap_or_default()
                .to_string(),
            description: self.description.clone(),
        }
    }
}
