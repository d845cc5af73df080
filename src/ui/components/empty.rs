//! Empty state component renderer.
//!
//! Shown instead of the carousel when the slideshow could not be built, e.g.
//! because no slides were configured.

use crate::ui::helpers::{center, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message.
///
/// # Layout
///
/// ```text
/// [blank lines]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// The message sits a third of the way down the pane, the subtitle right below
/// it in dimmed text.
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, rows: usize, cols: usize) {
    let message_row = (rows / 3).max(1);

    position_cursor(out, message_row, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    out.push_str(&center(&empty.message, cols));
    out.push_str(Theme::reset());

    position_cursor(out, message_row + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&center(&empty.subtitle, cols));
    out.push_str(Theme::reset());
}
