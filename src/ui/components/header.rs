//! Header component renderer.
//!
//! Renders the slide position on the left, the highlighted slide's label
//! centered, and the autoplay status badge on the right.

use crate::ui::helpers::{center, char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HeaderInfo, PlaybackStatus};

/// Renders the header bar at the specified row.
///
/// # Parameters
///
/// * `out` - Frame buffer
/// * `row` - Row position to render the header (1-indexed)
/// * `header` - Header information
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
/// 2/5            harbour.jpg            ▶ playing
/// ```
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let left = format!(" {}", header.position);
    let right = format!("{} ", header.status.badge());
    let side = char_len(&left).max(char_len(&right));
    let middle = cols.saturating_sub(2 * side);

    position_cursor(out, row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&format!("{left:<side$}"));

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&center(&header.title, middle));

    let status_color = match header.status {
        PlaybackStatus::Playing => &theme.colors.status_playing_fg,
        PlaybackStatus::Paused | PlaybackStatus::Stopped => &theme.colors.status_paused_fg,
    };
    out.push_str(Theme::reset());
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    out.push_str(&Theme::fg(status_color));
    if 2 * side <= cols {
        out.push_str(&format!("{right:>side$}"));
    }

    out.push_str(Theme::reset());
    row + 1
}
