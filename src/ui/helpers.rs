//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple
//! UI components: cursor positioning, word wrapping for card text, and
//! tail-truncation for long draft fields.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Wraps text into lines no wider than `width` characters.
///
/// Greedy word wrapping on whitespace. Words longer than the width are hard
/// split rather than overflowing. Empty input yields a single empty line so
/// callers always have something to render.
///
/// Widths are counted in characters, not bytes, so multi-byte input does
/// not split mid-codepoint.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > width {
            // Flush the partial line, then hard split the oversized word.
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(width) {
                lines.push(chunk.iter().collect());
            }
            continue;
        }

        let needed = if current_len == 0 { word_len } else { current_len + 1 + word_len };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            if current_len > 0 {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
        }
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Truncates a draft field to its visible tail.
///
/// Long URLs and paths keep their end visible (the part the user is still
/// typing), prefixed with an ellipsis marker.
#[must_use]
pub fn truncate_tail(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        // No room for a tail; the marker alone, clamped to the width.
        return ".".repeat(max_width);
    }
    let keep = max_width - 3;
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps", 11);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn hard_splits_oversized_words() {
        let lines = wrap_text("see https://example.com/abcdef now", 10);
        assert!(lines.iter().all(|line| line.chars().count() <= 10));
        assert!(lines.len() >= 3);
    }

    #[test]
    fn empty_text_yields_one_blank_line() {
        assert_eq!(wrap_text("", 20), vec![String::new()]);
    }

    #[test]
    fn short_text_is_untouched_by_truncation() {
        assert_eq!(truncate_tail("short", 10), "short");
    }

    #[test]
    fn truncation_keeps_the_tail() {
        let truncated = truncate_tail("https://example.com/a/very/long/path", 15);
        assert_eq!(truncated.chars().count(), 15);
        assert!(truncated.starts_with("..."));
        assert!(truncated.ends_with("path"));
    }

    #[test]
    fn truncation_never_exceeds_degenerate_widths() {
        assert_eq!(truncate_tail("abcdef", 3), "...");
        assert_eq!(truncate_tail("abcdef", 2), "..");
        assert_eq!(truncate_tail("abcdef", 1), ".");
        assert_eq!(truncate_tail("abcdef", 0), "");
    }
}
