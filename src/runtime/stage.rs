//! Render model of the slide track.
//!
//! The [`Stage`] plays the part of the styled container element: it receives
//! the geometry and position actions emitted by the state machine and answers
//! "where is the track right now?" for the renderer. Animated moves follow an
//! ease-out curve over the configured transition; moves issued while the
//! transition is disabled snap immediately.

use crate::app::{Action, Track};

/// One in-flight animated move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Animation {
    from: i32,
    to: i32,
    started_at: u64,
    duration_ms: u64,
}

impl Animation {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn offset_at(&self, now_ms: u64) -> i32 {
        let elapsed = now_ms.saturating_sub(self.started_at);
        if self.duration_ms == 0 || elapsed >= self.duration_ms {
            return self.to;
        }
        let progress = ease_out(elapsed as f64 / self.duration_ms as f64);
        let travelled = f64::from(self.to - self.from) * progress;
        self.from + travelled.round() as i32
    }

    const fn ends_at(&self) -> u64 {
        self.started_at.saturating_add(self.duration_ms)
    }
}

/// Quadratic ease-out: fast start, gentle landing.
#[must_use]
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Current visual state of the track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    slide_width: i32,
    container_width: i32,
    resting_offset: i32,
    transition_ms: Option<u64>,
    animation: Option<Animation>,
    active_link: usize,
}

impl Stage {
    /// Creates a stage resting at `offset` with the given geometry.
    #[must_use]
    pub fn new(track: Track, offset: i32, active_link: usize) -> Self {
        Self {
            slide_width: track.slide_width(),
            container_width: track.container_width(),
            resting_offset: offset,
            transition_ms: None,
            animation: None,
            active_link,
        }
    }

    #[must_use]
    pub const fn slide_width(&self) -> i32 {
        self.slide_width
    }

    #[must_use]
    pub const fn container_width(&self) -> i32 {
        self.container_width
    }

    /// Highlighted jump link.
    #[must_use]
    pub const fn active_link(&self) -> usize {
        self.active_link
    }

    /// Transition currently applied to moves, if any.
    #[must_use]
    pub const fn transition(&self) -> Option<u64> {
        self.transition_ms
    }

    /// Visual offset at `now_ms`.
    #[must_use]
    pub fn offset_at(&self, now_ms: u64) -> i32 {
        self.animation
            .map_or(self.resting_offset, |a| a.offset_at(now_ms))
    }

    #[must_use]
    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.animation.is_some_and(|a| now_ms < a.ends_at())
    }

    /// Applies a stage action at `now_ms`. Other actions are ignored.
    pub fn apply(&mut self, action: &Action, now_ms: u64) {
        match *action {
            Action::SetTransition(transition) => {
                if transition.is_none() {
                    self.finish_animation();
                }
                self.transition_ms = transition;
            }
            Action::MoveTrack { offset } => self.move_to(offset, now_ms),
            Action::ResizeTrack {
                container_width,
                slide_width,
            } => {
                self.container_width = container_width;
                self.slide_width = slide_width;
            }
            Action::HighlightLink(link) => self.active_link = link,
            _ => {}
        }
    }

    fn move_to(&mut self, offset: i32, now_ms: u64) {
        let from = self.offset_at(now_ms);
        match self.transition_ms {
            Some(duration_ms) if duration_ms > 0 && from != offset => {
                self.animation = Some(Animation {
                    from,
                    to: offset,
                    started_at: now_ms,
                    duration_ms,
                });
            }
            _ => self.animation = None,
        }
        self.resting_offset = offset;
    }

    /// Removing the transition lands any running animation on its target.
    fn finish_animation(&mut self) {
        if let Some(animation) = self.animation.take() {
            self.resting_offset = animation.to;
        }
    }
}
