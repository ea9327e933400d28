//! Detail presenter for the item overlay.

use super::status::status_token;
use crate::domain::Item;

/// Fixed notice shown under every item's details.
pub const CONTACT_NOTE: &str = "The donor's contact information is only used for handover \
coordination and will not be publicly displayed.";

/// Expanded, read-only payload for the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetail {
    pub name: String,
    pub category: String,
    pub status: String,
    pub status_token: String,
    pub description: String,
    pub contact: String,
    pub contact_note: &'static str,
}

/// Builds the detail payload for a single item.
///
/// Uses the same [`status_token`] as the card projector.
///
/// # Examples
///
/// ```
/// use donation_board::catalog::present;
/// use donation_board::domain::Item;
///
/// let detail = present(&Item::donated("Desk Lamp", "Appliances", "Used, works"));
/// assert_eq!(detail.status_token, "available");
/// assert_eq!(detail.description, "Used, works");
/// ```
#[must_use]
pub fn present(item: &Item) -> ItemDetail {
    ItemDetail {
        name: item.name.clone(),
        category: item.category.clone(),
        status: item.status.clone(),
        status_token: status_token(&item.status),
        description: item.description.clone(),
        contact: item.contact.clone(),
        contact_note: CONTACT_NOTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemCard;

    #[test]
    fn detail_and_card_agree_on_status_token() {
        for status in ["Available", "On Hold", "Reserved for Pickup", "GIVEN AWAY"] {
            let item = Item::new("x", "Books", "", status, "Internal");
            assert_eq!(present(&item).status_token, ItemCard::from(&item).status_token);
        }
    }

    #[test]
    fn detail_copies_every_field() {
        let item = Item::new("Radio", "Appliances", "Works", "Available", "Internal");
        let detail = present(&item);

        assert_eq!(detail.name, item.name);
        assert_eq!(detail.category, item.category);
        assert_eq!(detail.status, item.status);
        assert_eq!(detail.description, item.description);
        assert_eq!(detail.contact, item.contact);
        assert_eq!(detail.contact_note, CONTACT_NOTE);
    }
}
