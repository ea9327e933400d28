//! Status token normalization shared by cards and the detail view.

/// Normalizes a status for styling: lowercase, with every whitespace
/// character replaced by `-`.
///
/// # Examples
///
/// ```
/// use donation_board::catalog::status_token;
///
/// assert_eq!(status_token("Available"), "available");
/// assert_eq!(status_token("On Hold"), "on-hold");
/// assert_eq!(status_token("Pending  Pickup"), "pending--pickup");
/// ```
#[must_use]
pub fn status_token(status: &str) -> String {
    status
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizing_twice_is_stable() {
        for status in ["Available", "On Hold", "Given\tAway", ""] {
            let once = status_token(status);
            assert_eq!(status_token(&once), once);
        }
    }

    #[test]
    fn leading_and_trailing_whitespace_become_hyphens() {
        assert_eq!(status_token(" Reserved "), "-reserved-");
    }
}
