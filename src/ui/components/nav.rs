//! Navigation bar renderer: `‹` control, jump links, `›` control.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Layout, NavBar};

/// Renders the navigation bar on the layout's navigation line.
///
/// The active jump link is drawn as `●`, the others as `○`. Columns match
/// [`Layout::hit_test`]: the controls take the two outermost columns on each
/// side, links sit centered with one space between them.
pub fn render_nav(out: &mut String, nav: &NavBar, layout: &Layout, theme: &Theme) {
    let cols = layout.cols;
    position_cursor(out, layout.nav_line() + 1, 1);
    if cols < 4 {
        out.push_str(&" ".repeat(cols));
        return;
    }

    let control = |out: &mut String, glyph: &str| {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.control_fg));
        out.push_str(glyph);
        out.push_str(Theme::reset());
    };

    control(out, "‹ ");
    for col in 2..cols - 2 {
        let link = nav.links.and_then(|(count, active)| {
            let offset = col.checked_sub(layout.links_start(count))?;
            (offset % 2 == 0 && offset / 2 < count).then_some(offset / 2 == active)
        });
        match link {
            Some(true) => {
                out.push_str(&Theme::fg(&theme.colors.link_active_fg));
                out.push('●');
                out.push_str(Theme::reset());
            }
            Some(false) => {
                out.push_str(&Theme::fg(&theme.colors.link_inactive_fg));
                out.push('○');
                out.push_str(Theme::reset());
            }
            None => out.push(' '),
        }
    }
    control(out, " ›");
}
