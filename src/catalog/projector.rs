//! Card projection: items to display-ready cards, newest first.

use super::status::status_token;
use crate::domain::Item;

/// Display-ready projection of one item in the card list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub name: String,
    pub category: String,
    pub status: String,
    /// Normalized status used to pick the status color.
    pub status_token: String,
}

impl From<&Item> for ItemCard {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            status: item.status.clone(),
            status_token: status_token(&item.status),
        }
    }
}

/// Projects items into cards in reverse input order, so the most recently
/// appended item comes first. The input is only read.
///
/// # Examples
///
/// ```
/// use donation_board::catalog::project;
/// use donation_board::domain::Item;
///
/// let items = vec![
///     Item::donated("Older", "Books", ""),
///     Item::donated("Newer", "Books", ""),
/// ];
/// let cards = project(&items);
/// assert_eq!(cards[0].name, "Newer");
/// assert_eq!(cards[1].name, "Older");
/// ```
pub fn project<'a, I>(items: I) -> Vec<ItemCard>
where
    I: IntoIterator<Item = &'a Item>,
    I::IntoIter: DoubleEndedIterator,
{
    items.into_iter().rev().map(ItemCard::from).collect()
}
