//! User interface rendering layer with component-based architecture.
//!
//! This module turns the live slideshow into ANSI-styled terminal output
//! through composable rendering components.
//!
//! # Architecture
//!
//! ```text
//! Slideshow → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types and pane layout
//! - [`filmstrip`]: Composition of the visible track window
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod filmstrip;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_error, render_to_string};
pub use theme::Theme;
pub use viewmodel::{
    compute_viewmodel, EmptyState, FooterInfo, HeaderInfo, Hit, KeyHints, Layout, NavBar,
    PlaybackStatus, UIViewModel,
};
