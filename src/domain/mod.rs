//! Domain layer for the slideshow plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`slide`]: Slide model and materialization from data units
//!
//! # Examples
//!
//! ```
//! use zslideshow::domain::{materialize, Result, Slide};
//!
//! fn single_slide() -> Result<Vec<Slide>> {
//!     materialize(&["cover.png".to_string()], &[], false)
//! }
//! assert_eq!(single_slide().unwrap().len(), 1);
//! ```

pub mod error;
pub mod slide;

pub use error::{Result, SlideshowError};
pub use slide::{materialize, Slide, SlideData};
