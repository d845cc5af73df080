//! Slide track renderer.

use crate::ui::filmstrip::{Piece, Tone};
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Paints the composed filmstrip rows starting at `row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_track(out: &mut String, row: usize, rows: &[Vec<Piece>], theme: &Theme) -> usize {
    for (line, pieces) in rows.iter().enumerate() {
        position_cursor(out, row + line, 1);
        for piece in pieces {
            match piece.tone {
                Tone::Frame => out.push_str(&Theme::fg(&theme.colors.slide_border)),
                Tone::Title => {
                    out.push_str(Theme::bold());
                    out.push_str(&Theme::fg(&theme.colors.slide_title_fg));
                }
                Tone::Caption => out.push_str(&Theme::fg(&theme.colors.text_normal)),
                Tone::Clone | Tone::Gap => {
                    out.push_str(Theme::dim());
                    out.push_str(&Theme::fg(&theme.colors.text_dim));
                }
            }
            out.push_str(&piece.text);
            out.push_str(Theme::reset());
        }
    }
    row + rows.len()
}
