//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds max_width (unicode-aware).
///
/// Uses unicode width for accurate terminal column calculation, handling
/// wide characters (CJK, emoji) correctly.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    for ch in text.chars() {
        let next_width = truncated.width() + ch.width().unwrap_or(0);
        if next_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Wraps text to a maximum display width, breaking on whitespace where
/// possible. Existing newlines are preserved.
///
/// Used to pre-wrap the RFP description and preview panes so ratatui never
/// double-wraps.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![String::new()];
    }

    let mut out = Vec::new();
    for line in text.split('\n') {
        if line.width() <= max_width {
            out.push(line.to_string());
            continue;
        }

        let mut current = String::new();
        for word in line.split(' ') {
            let candidate_width = if current.is_empty() {
                word.width()
            } else {
                current.width() + 1 + word.width()
            };

            if candidate_width <= max_width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                continue;
            }

            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }

            // Word longer than the line: hard-break it by columns.
            let mut piece = String::new();
            for ch in word.chars() {
                if piece.width() + ch.width().unwrap_or(0) > max_width {
                    out.push(std::mem::take(&mut piece));
                }
                piece.push(ch);
            }
            current = piece;
        }
        out.push(current);
    }
    out
}

/// Hard-wraps text to a maximum display width at character granularity.
///
/// Unlike [`wrap_text`], no word boundaries are respected - every visual
/// row is packed to `max_width` columns. The preview pane uses this for
/// both the revealing text and the editor so the layout is identical at
/// the transition, and so cursor positions map directly onto visual rows.
pub fn hard_wrap(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![String::new()];
    }

    let mut out = Vec::new();
    for line in text.split('\n') {
        out.extend(hard_wrap_line(line, max_width));
    }
    out
}

/// Hard-wraps one logical line (no embedded newlines).
pub fn hard_wrap_line(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![String::new()];
    }
    if line.width() <= max_width {
        return vec![line.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if current_width + w > max_width {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += w;
    }
    rows.push(current);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_and_exact() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn truncate_long() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello w…");
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
    }

    #[test]
    fn wrap_preserves_newlines() {
        assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
    }

    #[test]
    fn wrap_breaks_on_whitespace() {
        assert_eq!(
            wrap_text("the quick brown fox", 9),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn wrap_hard_breaks_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn hard_wrap_packs_rows_to_width() {
        assert_eq!(hard_wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(hard_wrap("ab\ncd", 3), vec!["ab", "cd"]);
    }

    #[test]
    fn hard_wrap_respects_wide_chars() {
        // Each CJK char is 2 columns; only one fits per 3-column row
        // alongside a narrow char.
        assert_eq!(hard_wrap("a中b文", 3), vec!["a中", "b文"]);
    }
}
