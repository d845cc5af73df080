//! Shared rendering utilities and helpers.
//!
//! Components build their output into a `String` frame buffer; these helpers
//! cover cursor placement and width-aware text fitting. All widths are counted
//! in characters, not bytes.

/// Appends the escape sequence moving the cursor to `row`/`col` (1-indexed).
///
/// ```rust
/// use zslideshow::ui::helpers::position_cursor;
///
/// let mut out = String::new();
/// position_cursor(&mut out, 5, 1);
/// assert_eq!(out, "\u{1b}[5;1H");
/// ```
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `width` characters, marking the cut with `…`.
///
/// ```rust
/// use zslideshow::ui::helpers::truncate;
///
/// assert_eq!(truncate("harbour at dusk", 8), "harbour…");
/// assert_eq!(truncate("dusk", 8), "dusk");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Centers `text` in exactly `width` characters, truncating if needed.
///
/// Left padding is the smaller half when the remainder is odd.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let len = char_len(&text);
    let left = (width - len) / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(width - len - left))
}

/// Returns the characters of `text` in `start..start + width`.
#[must_use]
pub fn slice_columns(text: &str, start: usize, width: usize) -> String {
    text.chars().skip(start).take(width).collect()
}
