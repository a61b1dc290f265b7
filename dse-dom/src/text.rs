//! Display-width helpers. Widths are terminal columns, not chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Columns taken by `c`; zero for control and combining characters.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max` columns, ending with `…` when anything was
/// dropped.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let budget = max - 1;
    let mut used = 0;
    let mut out: String = s
        .chars()
        .take_while(|&c| {
            used += char_width(c);
            used <= budget
        })
        .collect();
    out.push('…');
    out
}
