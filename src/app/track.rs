//! Track geometry: slide positions, offsets and resize rounding.
//!
//! The track holds `slide_count + 2` equally wide cells: a clone of the last
//! slide, the real slides, and a clone of the first slide.
//!
//! ```text
//! position:   -1      0      1     ...    n-1      n
//!          [clone ][ s0  ][ s1  ] ... [ sn-1 ][clone ]
//!           last                                first
//! ```
//!
//! Logical position `p` sits at offset `-(p + 1) * slide_width`, so position 0
//! (the first real slide) is at `-slide_width`.

/// Width-dependent layout of the slide track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    slide_count: usize,
    slide_width: i32,
}

impl Track {
    /// Creates a track for `slide_count` real slides of `slide_width` units.
    #[must_use]
    pub const fn new(slide_count: usize, slide_width: i32) -> Self {
        Self {
            slide_count,
            slide_width,
        }
    }

    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub const fn slide_width(&self) -> i32 {
        self.slide_width
    }

    /// Number of real slides as a signed index bound.
    #[must_use]
    pub fn len(&self) -> i32 {
        i32::try_from(self.slide_count).unwrap_or(i32::MAX)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    /// Total width including both clone slides.
    #[must_use]
    pub fn container_width(&self) -> i32 {
        (self.len() + 2) * self.slide_width
    }

    /// Offset at which logical position `position` is in view.
    #[must_use]
    pub const fn offset_of(&self, position: i32) -> i32 {
        -(position + 1) * self.slide_width
    }

    /// Returns a copy of the track with a new slide width.
    #[must_use]
    pub const fn with_slide_width(self, slide_width: i32) -> Self {
        Self {
            slide_width,
            ..self
        }
    }

    /// Re-expresses `offset` for a new slide width, snapping to a whole slide.
    ///
    /// The offset is first converted into slide units using the current width
    /// and rounded with [`round_slide_units`], then scaled by `new_width`.
    #[must_use]
    pub fn rescale_offset(&self, offset: i32, new_width: i32) -> i32 {
        if self.slide_width <= 0 {
            return self.with_slide_width(new_width).offset_of(0);
        }
        let units = f64::from(offset) / f64::from(self.slide_width);
        round_slide_units(units) * new_width
    }
}

/// Rounds a slide-unit offset to the nearest whole slide.
///
/// Rounding is sign-aware: magnitudes round half away from zero and the sign is
/// re-applied, so `2.5 → 3` and `-2.5 → -3` rather than flooring to `-3`/`-2`
/// asymmetrically.
///
/// ```
/// use zslideshow::app::track::round_slide_units;
///
/// assert_eq!(round_slide_units(-2.5), -3);
/// assert_eq!(round_slide_units(2.5), 3);
/// assert_eq!(round_slide_units(-2.4), -2);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_slide_units(units: f64) -> i32 {
    let magnitude = units.abs().round() as i32;
    if units > 0.0 {
        magnitude
    } else {
        -magnitude
    }
}
