//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform the `Slideshow` into a `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! Output is built into a `String` frame and printed in one go, so a frame is
//! never half-painted.
//!
//! # Example
//!
//! ```rust
//! use zslideshow::ui::{render_to_string, KeyHints};
//! use zslideshow::{initialize, Config};
//!
//! let config = Config { slides: vec!["a.png".into()], ..Config::default() };
//! let show = initialize(&config, 30)?;
//! let frame = render_to_string(&show, 12, 30, KeyHints::default());
//! assert!(frame.contains("a.png"));
//! # Ok::<(), zslideshow::SlideshowError>(())
//! ```

use crate::runtime::Slideshow;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{compute_viewmodel, EmptyState, KeyHints};

/// Renders the plugin UI to stdout.
///
/// # Parameters
///
/// * `show` - Current slideshow
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
/// * `keys` - Bound control keys for the footer
pub fn render(show: &Slideshow, rows: usize, cols: usize, keys: KeyHints) {
    print!("{}", render_to_string(show, rows, cols, keys));
}

/// Renders one frame into a string.
#[must_use]
pub fn render_to_string(show: &Slideshow, rows: usize, cols: usize, keys: KeyHints) -> String {
    let viewmodel = compute_viewmodel(show, rows, cols, keys);
    let mut out = String::new();
    components::render_carousel(&mut out, &viewmodel, show.theme());
    out
}

/// Renders the empty state for a slideshow that failed to initialize.
pub fn render_error(message: &str, theme: &Theme, rows: usize, cols: usize) {
    let empty = EmptyState {
        message: "No slideshow to show".to_string(),
        subtitle: message.to_string(),
    };
    let mut out = String::new();
    components::render_empty_state(&mut out, &empty, theme, rows, cols);
    print!("{out}");
}
