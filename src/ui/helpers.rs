//! Shared rendering utilities and helpers.
//!
//! Text helpers here count `char`s, not bytes, so item names and
//! descriptions with non-ASCII text lay out without splitting a code point.
//!
//! # Example
//!
//! ```rust
//! use donation_board::ui::helpers::{truncate, wrap_text};
//!
//! assert_eq!(truncate("Complete Fairytale Book Set", 12), "Complete ...");
//! assert_eq!(wrap_text("Used, works fine", 10), ["Used,", "works fine"]);
//! ```

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal cells `text` occupies, assuming one cell per char.
#[must_use]
pub fn visual_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` chars, ending in `...` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if visual_len(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

/// Greedy word wrap to lines of at most `width` chars.
///
/// Words longer than `width` are split. Embedded newlines start a new line.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if line.is_empty() {
                word.len()
            } else {
                visual_len(&line) + 1 + word.len()
            };
            if needed > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.extend(word);
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("Daunenjacke für Kälte", 10), "Daunenj...");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn wrap_keeps_words_and_splits_long_ones() {
        assert_eq!(
            wrap_text("A practical guide to thesis writing", 12),
            ["A practical", "guide to", "thesis", "writing"]
        );
        assert_eq!(wrap_text("abcdefghij", 4), ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_preserves_paragraph_breaks() {
        assert_eq!(wrap_text("one\n\ntwo", 10), ["one", "", "two"]);
        assert!(wrap_text("", 10).is_empty());
    }
}
