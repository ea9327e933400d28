//! Donated item domain model.
//!
//! An [`Item`] is the single entity the board tracks. Items are created either
//! from the seed list at startup or from a committed submission, and are never
//! edited afterwards.

/// Status assigned to every item created by the board itself.
pub const STATUS_AVAILABLE: &str = "Available";

/// Contact marker assigned to every locally created item.
pub const CONTACT_INTERNAL: &str = "Internal";

/// A single donation record.
///
/// `status` and `contact` are plain text so that values other than
/// [`STATUS_AVAILABLE`] and [`CONTACT_INTERNAL`] can be displayed if they
/// ever appear. Both are always set: the only constructors take or assign
/// them explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub category: String,
    pub description: String,
    pub status: String,
    pub contact: String,
}

impl Item {
    /// Creates an item with every field given explicitly.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: description.into(),
            status: status.into(),
            contact: contact.into(),
        }
    }

    /// Creates an item as the board does for donations: `Available` and
    /// tracked `Internal`ly.
    ///
    /// # Examples
    ///
    /// ```
    /// use donation_board::domain::{Item, STATUS_AVAILABLE, CONTACT_INTERNAL};
    ///
    /// let item = Item::donated("Desk Lamp", "Appliances", "Used, works");
    /// assert_eq!(item.status, STATUS_AVAILABLE);
    /// assert_eq!(item.contact, CONTACT_INTERNAL);
    /// ```
    #[must_use]
    pub fn donated(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(name, category, description, STATUS_AVAILABLE, CONTACT_INTERNAL)
    }
}

/// Items preloaded at startup, in display-insertion order.
#[must_use]
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::donated(
            "Electronic Calculator",
            "Appliances",
            "90% new, fully functional, suitable for students. Donor: Ms. Chen",
        ),
        Item::donated(
            "Complete Fairytale Book Set",
            "Books",
            "Hardcover, well-preserved, suitable for children aged 3-6. Donor: Mr. Wang",
        ),
        Item::donated(
            "Lightweight Down Jacket",
            "Apparel",
            "Size L, Black, cleaned, no damage. Donor: Ms. Lin",
        ),
        Item::donated(
            "Academic Thesis Guide",
            "Books",
            "Latest 2023 edition, no highlights. Donor: Ms. Chen",
        ),
    ]
}
