//! Display-width helpers for table cells and dropdown rows.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate a string to at most `max_width` display columns, appending an
/// ellipsis when content is cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
    }

    #[test]
    fn long_strings_get_an_ellipsis() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
    }

    #[test]
    fn wide_chars_count_double() {
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }

    #[test]
    fn zero_width_budget_yields_empty() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
