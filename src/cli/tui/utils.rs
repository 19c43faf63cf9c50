//! Shared helpers for browser views and key handling

use ratatui::style::Color;

use crate::domain::{Filter, ToyTag};

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncate_at = max_len.saturating_sub(3);
        let truncated: String = s.chars().take(truncate_at).collect();
        format!("{}...", truncated)
    }
}

/// Next filter in the cycle `All -> values[0] -> ... -> values[n-1] -> All`
pub fn cycle_filter<T: Copy + PartialEq>(current: Filter<T>, values: &[T]) -> Filter<T> {
    let next = match current {
        Filter::All => 0,
        Filter::Only(value) => match values.iter().position(|v| *v == value) {
            Some(i) => i + 1,
            None => values.len(),
        },
    };

    values.get(next).copied().map_or(Filter::All, Filter::Only)
}

/// Step an index through `len` items, wrapping at both ends
pub fn wrap_index(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        0
    } else if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

/// Accent color of a tag chip; unparsable colors are ignored
pub fn tag_color(tag: &ToyTag) -> Option<Color> {
    tag.color.as_deref().and_then(|c| c.parse().ok())
}
