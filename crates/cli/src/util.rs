use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string, accounting for combining marks and wide chars.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` to at most `width` columns. A cut name ends in "…" with any
/// trailing space before it dropped, so "Ghost Person" at 7 reads "Ghost…".
pub(crate) fn truncate_display(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let kept: String = s
        .chars()
        .take_while(|ch| {
            used += ch.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    format!("{}…", kept.trim_end())
}

/// Fit `s` into a column of exactly `width` display columns.
pub(crate) fn pad_right(s: &str, width: usize) -> String {
    let fitted = truncate_display(s, width);
    let pad = width.saturating_sub(display_width(&fitted));
    format!("{fitted}{}", " ".repeat(pad))
}

/// `value`, or "Not available" when blank.
pub(crate) fn or_not_available(value: &str) -> &str {
    if value.trim().is_empty() {
        "Not available"
    } else {
        value
    }
}
