//! Mode and orientation types for the carousel.
//!
//! This module defines the small enums that parameterize the state machine:
//! the reading [`Direction`] fixed at initialization, the [`SliderDesign`]
//! layout variant, the physical [`Step`] of a shift, and where a shift came
//! from ([`ShiftOrigin`]).
//!
//! # Example
//!
//! ```rust
//! use zslideshow::app::modes::{Direction, SliderDesign, Step};
//!
//! let direction = Direction::from_locale(Some("ar"));
//! assert_eq!(direction, Direction::Backward);
//! assert_eq!(direction.advance_step(), Step::Previous);
//! assert!(SliderDesign::parse("multiSlide").is_ok());
//! ```

use std::str::FromStr;

use crate::domain::{Result, SlideshowError};

/// Language tags whose documents read right-to-left.
const RTL_LANGUAGES: [&str; 4] = ["ar", "he", "fa", "ur"];

/// Base reading direction of the carousel.
///
/// Set once at initialization, either explicitly through the `direction`
/// option or detected from the host locale. Forward layouts start on the first
/// slide; Backward layouts start on the last one and advance towards the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left-to-right reading order (`direction = -1`, "left").
    #[default]
    Forward,
    /// Right-to-left reading order (`direction = 1`, "right").
    Backward,
}

impl Direction {
    /// Detects the direction from a language tag such as `ar` or `en-US`.
    ///
    /// Unknown or missing locales read forward.
    #[must_use]
    pub fn from_locale(lang: Option<&str>) -> Self {
        let Some(lang) = lang else {
            return Self::Forward;
        };
        let primary = lang
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if RTL_LANGUAGES.contains(&primary.as_str()) {
            Self::Backward
        } else {
            Self::Forward
        }
    }

    /// Resolves the configured direction, falling back to locale detection.
    ///
    /// # Errors
    ///
    /// Returns [`SlideshowError::Configuration`] for values other than `1` and `-1`.
    pub fn resolve(configured: Option<i32>, lang: Option<&str>) -> Result<Self> {
        match configured {
            None => Ok(Self::from_locale(lang)),
            Some(-1) => Ok(Self::Forward),
            Some(1) => Ok(Self::Backward),
            Some(other) => Err(SlideshowError::Configuration(format!(
                "direction must be 1 or -1, got {other}"
            ))),
        }
    }

    /// The physical step taken by `advance()` in this reading direction.
    #[must_use]
    pub const fn advance_step(self) -> Step {
        match self {
            Self::Forward => Step::Next,
            Self::Backward => Step::Previous,
        }
    }

    /// The physical step taken by `retreat()` in this reading direction.
    #[must_use]
    pub const fn retreat_step(self) -> Step {
        self.advance_step().reversed()
    }
}

/// A single physical shift of the track by one slide.
///
/// `Next` moves the track one slide width towards negative offsets and
/// increments the index; `Previous` does the opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

impl Step {
    /// Signed index delta of the step.
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Next => Self::Previous,
            Self::Previous => Self::Next,
        }
    }
}

impl TryFrom<i32> for Step {
    type Error = SlideshowError;

    fn try_from(dir: i32) -> Result<Self> {
        match dir {
            1 => Ok(Self::Next),
            -1 => Ok(Self::Previous),
            other => Err(SlideshowError::InvalidArgument(format!(
                "shift direction must be +1 or -1, got {other}"
            ))),
        }
    }
}

/// Where a shift request came from.
///
/// Drag-originated shifts keep the anchor captured at drag start, since the
/// track already sits at the dragged position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftOrigin {
    Control,
    Drag,
}

/// Layout variant of the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderDesign {
    /// One full-width slide per view with a prominent title.
    #[default]
    Hero,
    /// Compact cards framed individually.
    MultiSlide,
}

impl SliderDesign {
    /// Parses a design name (`hero` or `multiSlide`).
    ///
    /// # Errors
    ///
    /// Returns [`SlideshowError::Configuration`] for unrecognized names.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim() {
            "hero" => Ok(Self::Hero),
            "multiSlide" | "multi_slide" | "multi-slide" => Ok(Self::MultiSlide),
            other => Err(SlideshowError::Configuration(format!(
                "unknown slider design `{other}` (expected `hero` or `multiSlide`)"
            ))),
        }
    }
}

impl FromStr for SliderDesign {
    type Err = SlideshowError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
