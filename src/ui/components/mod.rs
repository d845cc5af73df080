//! Composable UI component renderers.
//!
//! Each component renders one part of the interface into the frame buffer.
//!
//! # Components
//!
//! - [`header`]: Slide position, title and autoplay status
//! - [`track`]: The visible window of the slide track
//! - [`nav`]: Previous/next controls and jump links
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Message shown when no slideshow exists

mod empty;
mod footer;
mod header;
mod nav;
mod track;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use header::render_header;
use nav::render_nav;
use track::render_track;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the carousel layout.
///
/// Layout structure:
/// ```text
/// [Header]
/// [Border]
/// [Track rows]
/// [Navigation bar]
/// [Border]
/// [Footer]
/// ```
pub fn render_carousel(out: &mut String, vm: &UIViewModel, theme: &Theme) {
    let layout = vm.layout;
    let cols = layout.cols;

    let mut current_row = layout.header_line() + 1;
    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    let _current_row = render_track(out, current_row, &vm.filmstrip, theme);

    render_nav(out, &vm.nav, &layout, theme);
    render_border(out, layout.nav_line() + 2, &theme.colors.border, cols);
    render_footer(out, layout.footer_line() + 1, &vm.footer, theme, cols);
}
