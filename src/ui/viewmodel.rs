//! View model types representing renderable UI state.
//!
//! View models are computed from a [`Slideshow`] and consumed by the renderer.
//! They contain no business logic, only display-ready data: the composed
//! filmstrip rows, header and footer text, and the navigation bar.
//!
//! The [`Layout`] type is shared with the plugin shim so that mouse clicks can
//! be mapped back onto the controls that were painted.

use crate::runtime::Slideshow;

use super::filmstrip::{compose, filmstrip_rows, Piece};

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub layout: Layout,
    pub header: HeaderInfo,
    /// Painted rows of the visible track window.
    pub filmstrip: Vec<Vec<Piece>>,
    pub nav: NavBar,
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Label of the highlighted slide.
    pub title: String,
    /// One-based position, e.g. `2/5`.
    pub position: String,
    pub status: PlaybackStatus,
}

/// Autoplay status shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Playing,
    Paused,
    Stopped,
}

impl PlaybackStatus {
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Playing => "▶ playing",
            Self::Paused => "⏸ paused",
            Self::Stopped => "■ stopped",
        }
    }
}

/// Navigation bar: previous control, jump links, next control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    /// Jump link count and highlighted link; `None` when links are hidden.
    pub links: Option<(usize, usize)>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Keys bound to the previous/next controls, shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHints {
    pub prev: char,
    pub next: char,
}

impl Default for KeyHints {
    fn default() -> Self {
        Self { prev: 'h', next: 'l' }
    }
}

impl KeyHints {
    #[must_use]
    pub fn footer(self) -> FooterInfo {
        FooterInfo {
            keybindings: format!(
                "{}/←: prev | {}/→: next | 1-9: jump | space: play/stop | p: pause | q: quit",
                self.prev, self.next
            ),
        }
    }
}

/// Empty state message, shown when no slideshow could be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Row and column geometry of the pane (0-indexed lines).
///
/// ```text
/// line 0          header
/// line 1          border
/// lines 2..k      filmstrip
/// line k          navigation bar
/// line k + 1      border
/// line k + 2      footer (last line)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
}

/// Column width of one jump link, including its trailing space.
const LINK_WIDTH: usize = 2;

/// What a click on the navigation bar hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Prev,
    Next,
    Link(usize),
    Track,
}

impl Layout {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub const fn header_line(&self) -> usize {
        0
    }

    #[must_use]
    pub const fn filmstrip_start(&self) -> usize {
        2
    }

    /// Number of filmstrip lines (at least one).
    #[must_use]
    pub const fn filmstrip_height(&self) -> usize {
        let height = self.rows.saturating_sub(5);
        if height == 0 {
            1
        } else {
            height
        }
    }

    #[must_use]
    pub const fn nav_line(&self) -> usize {
        self.filmstrip_start() + self.filmstrip_height()
    }

    #[must_use]
    pub const fn footer_line(&self) -> usize {
        self.nav_line() + 2
    }

    /// First column of the jump links for `count` links.
    #[must_use]
    pub const fn links_start(&self, count: usize) -> usize {
        self.cols.saturating_sub(count * LINK_WIDTH) / 2
    }

    /// Maps a 0-indexed click position onto a control.
    ///
    /// Clicks on the filmstrip lines hit the track. Clicks on the header,
    /// borders, footer, or on the bar between controls hit nothing.
    #[must_use]
    pub fn hit_test(&self, line: usize, col: usize, link_count: Option<usize>) -> Option<Hit> {
        if (self.filmstrip_start()..self.nav_line()).contains(&line) {
            return Some(Hit::Track);
        }
        if line != self.nav_line() {
            return None;
        }
        if col < 2 {
            return Some(Hit::Prev);
        }
        if col + 2 >= self.cols {
            return Some(Hit::Next);
        }
        let count = link_count?;
        let start = self.links_start(count);
        let offset = col.checked_sub(start)?;
        let link = offset / LINK_WIDTH;
        (link < count && offset % LINK_WIDTH == 0).then_some(Hit::Link(link))
    }
}

/// Computes the view model for a pane of `rows` × `cols`.
#[must_use]
pub fn compute_viewmodel(show: &Slideshow, rows: usize, cols: usize, keys: KeyHints) -> UIViewModel {
    let layout = Layout::new(rows, cols);
    let state = show.state();
    let stage = show.stage();
    let slides = show.slides();

    let active = stage.active_link();
    let title = slides
        .get(active)
        .map_or_else(String::new, |slide| slide.label().to_string());

    let status = if !state.running() {
        PlaybackStatus::Stopped
    } else if state.paused() {
        PlaybackStatus::Paused
    } else {
        PlaybackStatus::Playing
    };

    let offset = stage.offset_at(show.now());
    let card_width = usize::try_from(stage.slide_width()).unwrap_or(0);
    let segments = compose(offset, stage.slide_width(), slides.len(), cols);
    let filmstrip = filmstrip_rows(
        slides,
        show.design(),
        &segments,
        card_width,
        layout.filmstrip_height(),
    );

    UIViewModel {
        layout,
        header: HeaderInfo {
            title,
            position: format!("{}/{}", active + 1, slides.len()),
            status,
        },
        filmstrip,
        nav: NavBar {
            links: show.show_jump_links().then_some((slides.len(), active)),
        },
        footer: keys.footer(),
    }
}
