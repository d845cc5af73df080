//! Carousel state machine.
//!
//! This module defines [`CarouselState`], the single source of truth for the
//! carousel's index, guard and autoplay flags, and the drag accumulator. Every
//! operation borrows the current state and returns a [`Transition`]: the next
//! validated state plus the [`Action`]s the host must execute. Nothing here
//! touches timers or rendering directly, so the whole machine is testable
//! without a host.
//!
//! # Shift lifecycle
//!
//! ```text
//!   shift(+1)                      settle
//!  ──────────► index = n (sentinel) ───────► index = 0, snap without animation
//!  guard off                                  guard on
//! ```
//!
//! The two clone slides at the ends of the track let the shift animate into a
//! sentinel position; the settle then snaps to the matching real slide without
//! animation, which reads as an endless loop.
//!
//! # Example
//!
//! ```rust
//! use zslideshow::app::{CarouselState, Direction};
//!
//! let state = CarouselState::new(4, 100, Direction::Forward)?;
//! let moving = state.advance().state;
//! assert_eq!(moving.index(), 1);
//! assert!(!moving.shift_allowed());
//!
//! let settled = moving.settle().state;
//! assert!(settled.shift_allowed());
//! # Ok::<(), zslideshow::SlideshowError>(())
//! ```

use super::actions::{Action, Notification};
use super::modes::{Direction, ShiftOrigin, Step};
use super::track::Track;
use crate::domain::{Result, SlideshowError};

/// Minimum drag displacement, in logical units, that commits a slide change.
pub const DEFAULT_DRAG_THRESHOLD: i32 = 100;

/// Default transition length.
pub const DEFAULT_DURATION_MS: u64 = 2000;

/// Default autoplay interval.
pub const DEFAULT_DELAY_MS: u64 = 6000;

/// Delay after the last resize before autoplay resumes.
pub const RESIZE_SETTLE_MS: u64 = 5000;

/// Timing parameters of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Transition animation length; also the delay before a shift settles.
    pub duration_ms: u64,
    /// Period of the repeating autoplay timer.
    pub autoplay_interval_ms: u64,
    /// Debounce delay before autoplay resumes after a resize.
    pub resize_settle_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            autoplay_interval_ms: DEFAULT_DELAY_MS,
            resize_settle_ms: RESIZE_SETTLE_MS,
        }
    }
}

/// Pointer state captured while a drag gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    /// Track offset when the gesture started.
    pub anchor_offset: i32,
    /// Last pointer coordinate seen.
    pub last_coordinate: i32,
}

/// The next state of the carousel together with the side effects to run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Transition {
    pub state: CarouselState,
    pub actions: Vec<Action>,
}

impl Transition {
    fn unchanged(state: &CarouselState) -> Self {
        Self {
            state: state.clone(),
            actions: Vec::new(),
        }
    }

    /// Notifications emitted by this transition, in order.
    pub fn notifications(&self) -> impl Iterator<Item = Notification> + '_ {
        self.actions.iter().filter_map(|action| match action {
            Action::Notify(notification) => Some(*notification),
            _ => None,
        })
    }

    /// Chains a follow-up transition computed from this one's state.
    fn then(mut self, next: impl FnOnce(&CarouselState) -> Self) -> Self {
        let Self { state, actions } = next(&self.state);
        self.actions.extend(actions);
        self.state = state;
        self
    }
}

/// Index/position state machine of one carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    track: Track,
    index: i32,
    direction: Direction,
    shift_allowed: bool,
    running: bool,
    paused: bool,
    drag: Option<DragGesture>,
    drag_threshold: i32,
    offset: i32,
    anchor: i32,
    timing: Timing,
    pause_on_hover: bool,
}

impl CarouselState {
    /// Creates the state for `slide_count` slides of `slide_width` units.
    ///
    /// The index starts on the first slide for forward layouts and on the last
    /// slide for backward ones, with the track positioned accordingly. Shifts
    /// are allowed and autoplay is neither running nor paused.
    ///
    /// # Errors
    ///
    /// - [`SlideshowError::Configuration`] if `slide_count` is zero
    /// - [`SlideshowError::InvalidArgument`] if `slide_width` is not positive
    pub fn new(slide_count: usize, slide_width: i32, direction: Direction) -> Result<Self> {
        if slide_count == 0 {
            return Err(SlideshowError::Configuration(
                "a carousel needs at least one slide".to_string(),
            ));
        }
        if slide_width <= 0 {
            return Err(SlideshowError::InvalidArgument(format!(
                "slide width must be positive, got {slide_width}"
            )));
        }

        let track = Track::new(slide_count, slide_width);
        let index = match direction {
            Direction::Forward => 0,
            Direction::Backward => track.len() - 1,
        };
        let offset = track.offset_of(index);

        Ok(Self {
            track,
            index,
            direction,
            shift_allowed: true,
            running: false,
            paused: false,
            drag: None,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            offset,
            anchor: offset,
            timing: Timing::default(),
            pause_on_hover: true,
        })
    }

    #[must_use]
    pub const fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    #[must_use]
    pub const fn with_drag_threshold(mut self, threshold: i32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    #[must_use]
    pub const fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    #[must_use]
    pub const fn index(&self) -> i32 {
        self.index
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn shift_allowed(&self) -> bool {
        self.shift_allowed
    }

    #[must_use]
    pub const fn running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub const fn drag(&self) -> Option<DragGesture> {
        self.drag
    }

    #[must_use]
    pub const fn drag_threshold(&self) -> i32 {
        self.drag_threshold
    }

    /// Committed track offset (the last position the host was told about).
    #[must_use]
    pub const fn offset(&self) -> i32 {
        self.offset
    }

    #[must_use]
    pub const fn track(&self) -> Track {
        self.track
    }

    #[must_use]
    pub const fn timing(&self) -> Timing {
        self.timing
    }

    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.track.slide_count()
    }

    /// Real slide whose jump link is active.
    ///
    /// Sentinel indices map onto the slide their clone shows, so `-1` reads as
    /// the last slide and `slide_count` as the first.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn active_link(&self) -> usize {
        self.index.rem_euclid(self.track.len()) as usize
    }

    /// Starts autoplay. No-op when already running.
    pub fn start(&self) -> Transition {
        if self.running {
            return Transition::unchanged(self);
        }
        tracing::debug!(interval_ms = self.timing.autoplay_interval_ms, "autoplay started");
        let mut state = self.clone();
        state.running = true;
        Transition {
            state,
            actions: vec![
                Action::StartAutoplay {
                    period_ms: self.timing.autoplay_interval_ms,
                },
                Action::Notify(Notification::Started),
            ],
        }
    }

    /// Stops autoplay. No-op when not running.
    pub fn stop(&self) -> Transition {
        if !self.running {
            return Transition::unchanged(self);
        }
        tracing::debug!("autoplay stopped");
        let mut state = self.clone();
        state.running = false;
        Transition {
            state,
            actions: vec![Action::CancelAutoplay, Action::Notify(Notification::Stopped)],
        }
    }

    /// Suspends autoplay ticks without touching the timer.
    ///
    /// Idempotent: only the first call emits [`Notification::Paused`].
    pub fn pause(&self) -> Transition {
        if self.paused {
            return Transition::unchanged(self);
        }
        let mut state = self.clone();
        state.paused = true;
        Transition {
            state,
            actions: vec![Action::Notify(Notification::Paused)],
        }
    }

    /// Resumes autoplay ticks. Idempotent like [`Self::pause`].
    pub fn unpause(&self) -> Transition {
        if !self.paused {
            return Transition::unchanged(self);
        }
        let mut state = self.clone();
        state.paused = false;
        Transition {
            state,
            actions: vec![Action::Notify(Notification::Unpaused)],
        }
    }

    /// Handles one firing of the autoplay timer.
    pub fn autoplay_tick(&self) -> Transition {
        if !self.running || self.paused {
            tracing::trace!(running = self.running, paused = self.paused, "autoplay tick skipped");
            return Transition::unchanged(self);
        }
        self.advance()
    }

    /// Moves one slide in reading direction.
    pub fn advance(&self) -> Transition {
        self.shift(self.direction.advance_step(), ShiftOrigin::Control)
    }

    /// Moves one slide against reading direction.
    pub fn retreat(&self) -> Transition {
        self.shift(self.direction.retreat_step(), ShiftOrigin::Control)
    }

    /// Shifts the track by one slide.
    ///
    /// While another shift is in flight only the transition duration is
    /// re-applied; the index is untouched and no settle is scheduled. Control
    /// shifts are ignored while a drag gesture holds the track.
    pub fn shift(&self, step: Step, origin: ShiftOrigin) -> Transition {
        if origin == ShiftOrigin::Control && self.drag.is_some() {
            tracing::trace!(?step, "shift ignored, drag in progress");
            return Transition::unchanged(self);
        }
        let mut actions = vec![Action::SetTransition(Some(self.timing.duration_ms))];
        if !self.shift_allowed {
            tracing::trace!(?step, index = self.index, "shift rejected, transition in flight");
            return Transition {
                state: self.clone(),
                actions,
            };
        }

        let mut state = self.clone();
        actions.push(Action::Notify(Notification::Moving));
        if origin != ShiftOrigin::Drag {
            state.anchor = self.offset;
        }

        let width = self.track.slide_width();
        match step {
            Step::Next => {
                actions.push(Action::Notify(Notification::MovingNext));
                state.offset = state.anchor - width;
            }
            Step::Previous => {
                actions.push(Action::Notify(Notification::MovingPrev));
                state.offset = state.anchor + width;
            }
        }
        state.index += step.delta();
        state.shift_allowed = false;

        tracing::debug!(?step, ?origin, index = state.index, offset = state.offset, "shift accepted");

        actions.extend([
            Action::MoveTrack {
                offset: state.offset,
            },
            Action::HighlightLink(state.active_link()),
            Action::ScheduleSettle {
                after_ms: self.timing.duration_ms,
            },
        ]);
        Transition { state, actions }
    }

    /// Post-transition normalization.
    ///
    /// Snaps sentinel indices back onto the real slide their clone showed,
    /// without animation, and re-enables shifting. The track always ends up at
    /// the settled slide's offset. Ignored when no shift is in flight.
    pub fn settle(&self) -> Transition {
        if self.shift_allowed {
            tracing::trace!("settle without an in-flight shift ignored");
            return Transition::unchanged(self);
        }

        let mut state = self.clone();
        let mut actions = vec![
            Action::Notify(Notification::HasMoved),
            Action::SetTransition(None),
        ];

        let last = self.track.len() - 1;
        if self.index == -1 {
            state.index = last;
        } else if self.index == self.track.len() {
            state.index = 0;
        }
        if state.index != self.index {
            tracing::debug!(from = self.index, to = state.index, "sentinel index normalized");
        }

        // The track always rests on the settled slide.
        let resting = self.track.offset_of(state.index);
        if state.index != self.index || self.offset != resting {
            state.offset = resting;
            actions.push(Action::MoveTrack { offset: resting });
        }

        state.shift_allowed = true;
        Transition { state, actions }
    }

    /// Animates directly to the real slide `target`.
    ///
    /// Guarded like a shift. Jumping to the current slide does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SlideshowError::InvalidArgument`] if `target` is not a slide.
    pub fn jump_to(&self, target: usize) -> Result<Transition> {
        if target >= self.slide_count() {
            return Err(SlideshowError::InvalidArgument(format!(
                "jump target {target} out of range for {} slides",
                self.slide_count()
            )));
        }
        let target = i32::try_from(target)
            .map_err(|_| SlideshowError::InvalidArgument(format!("jump target {target} too large")))?;

        if self.drag.is_some() {
            tracing::trace!(target, "jump ignored, drag in progress");
            return Ok(Transition::unchanged(self));
        }
        if !self.shift_allowed {
            return Ok(Transition {
                state: self.clone(),
                actions: vec![Action::SetTransition(Some(self.timing.duration_ms))],
            });
        }
        if target == self.index {
            return Ok(Transition::unchanged(self));
        }

        let mut state = self.clone();
        let towards = if target > self.index {
            Notification::MovingNext
        } else {
            Notification::MovingPrev
        };
        state.anchor = self.offset;
        state.offset = self.track.offset_of(target);
        state.index = target;
        state.shift_allowed = false;

        tracing::debug!(from = self.index, to = target, "jumping to slide");

        Ok(Transition {
            actions: vec![
                Action::SetTransition(Some(self.timing.duration_ms)),
                Action::Notify(Notification::Moving),
                Action::Notify(towards),
                Action::MoveTrack {
                    offset: state.offset,
                },
                Action::HighlightLink(state.active_link()),
                Action::ScheduleSettle {
                    after_ms: self.timing.duration_ms,
                },
            ],
            state,
        })
    }

    /// Begins a drag gesture at pointer coordinate `coordinate`.
    ///
    /// Ignored while a shift is in flight, since the committed offset does not
    /// yet match what is on screen.
    pub fn drag_start(&self, coordinate: i32) -> Transition {
        if !self.shift_allowed {
            tracing::trace!("drag start ignored, transition in flight");
            return Transition::unchanged(self);
        }
        let mut state = self.clone();
        state.drag = Some(DragGesture {
            anchor_offset: self.offset,
            last_coordinate: coordinate,
        });
        Transition {
            state,
            actions: vec![Action::SetTransition(None)],
        }
    }

    /// Moves the track along with the pointer.
    pub fn drag_move(&self, coordinate: i32) -> Transition {
        let Some(gesture) = self.drag else {
            return Transition::unchanged(self);
        };
        let delta = gesture.last_coordinate - coordinate;
        let mut state = self.clone();
        state.drag = Some(DragGesture {
            last_coordinate: coordinate,
            ..gesture
        });
        state.offset = self.offset - delta;
        Transition {
            actions: vec![Action::MoveTrack {
                offset: state.offset,
            }],
            state,
        }
    }

    /// Ends the drag gesture, committing or rejecting it.
    ///
    /// The displacement must strictly exceed the threshold to commit.
    pub fn drag_end(&self) -> Transition {
        let Some(gesture) = self.drag else {
            return Transition::unchanged(self);
        };
        let mut state = self.clone();
        state.drag = None;
        state.anchor = gesture.anchor_offset;

        let displacement = self.offset - gesture.anchor_offset;
        tracing::debug!(displacement, threshold = self.drag_threshold, "drag ended");

        if displacement < -self.drag_threshold {
            state.shift(Step::Next, ShiftOrigin::Drag)
        } else if displacement > self.drag_threshold {
            state.shift(Step::Previous, ShiftOrigin::Drag)
        } else {
            state.offset = gesture.anchor_offset;
            Transition {
                actions: vec![
                    Action::SetTransition(Some(self.timing.duration_ms)),
                    Action::MoveTrack {
                        offset: state.offset,
                    },
                ],
                state,
            }
        }
    }

    /// Pointer entered the widget: pauses autoplay when configured to.
    pub fn hover_enter(&self) -> Transition {
        if self.pause_on_hover && self.running {
            self.pause()
        } else {
            Transition::unchanged(self)
        }
    }

    /// Pointer left the widget: resumes autoplay when configured to.
    pub fn hover_leave(&self) -> Transition {
        if self.pause_on_hover && self.running {
            self.unpause()
        } else {
            Transition::unchanged(self)
        }
    }

    /// Adapts the track to a new host width.
    ///
    /// Pauses autoplay, snaps the offset to the nearest whole slide in the new
    /// geometry, and schedules the resume once resizing has settled. A drag in
    /// progress is dropped and the track returns to where the drag began.
    ///
    /// # Errors
    ///
    /// Returns [`SlideshowError::InvalidArgument`] if `host_width` is not positive.
    pub fn resize(&self, host_width: i32) -> Result<Transition> {
        if host_width <= 0 {
            return Err(SlideshowError::InvalidArgument(format!(
                "host width must be positive, got {host_width}"
            )));
        }

        let settle_ms = self.timing.resize_settle_ms;
        Ok(self.pause().then(|paused| {
            let mut state = paused.clone();
            let committed = paused.drag.map_or(paused.offset, |g| g.anchor_offset);
            state.offset = paused.track.rescale_offset(committed, host_width);
            state.anchor = paused.track.rescale_offset(paused.anchor, host_width);
            state.track = paused.track.with_slide_width(host_width);
            state.drag = None;

            tracing::debug!(
                host_width,
                offset = state.offset,
                container_width = state.track.container_width(),
                "track resized"
            );

            Transition {
                actions: vec![
                    Action::SetTransition(None),
                    Action::ResizeTrack {
                        container_width: state.track.container_width(),
                        slide_width: host_width,
                    },
                    Action::MoveTrack {
                        offset: state.offset,
                    },
                    Action::ScheduleResume { after_ms: settle_ms },
                ],
                state,
            }
        }))
    }

    /// Resumes autoplay once the resize debounce has elapsed.
    pub fn resume_after_resize(&self) -> Transition {
        self.unpause()
    }

    /// Stops autoplay and detaches from the host.
    pub fn destroy(&self) -> Transition {
        self.stop().then(|stopped| {
            let mut state = stopped.clone();
            state.drag = None;
            Transition {
                state,
                actions: vec![Action::Teardown],
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(slides: usize) -> CarouselState {
        CarouselState::new(slides, 100, Direction::Forward).unwrap()
    }

    fn settled(transition: Transition) -> CarouselState {
        transition.state.settle().state
    }

    #[test]
    fn initial_state_depends_on_direction() {
        let forward = carousel(4);
        assert_eq!(forward.index(), 0);
        assert_eq!(forward.offset(), -100);
        assert!(forward.shift_allowed());
        assert!(!forward.running());
        assert!(!forward.paused());

        let backward = CarouselState::new(4, 100, Direction::Backward).unwrap();
        assert_eq!(backward.index(), 3);
        assert_eq!(backward.offset(), -400);
    }

    #[test]
    fn zero_slides_fail_initialization() {
        assert!(matches!(
            CarouselState::new(0, 100, Direction::Forward),
            Err(SlideshowError::Configuration(_))
        ));
        assert!(CarouselState::new(2, 0, Direction::Forward).is_err());
    }

    #[test]
    fn accepted_shift_emits_notifications_in_order() {
        let transition = carousel(4).advance();
        let notifications: Vec<_> = transition.notifications().collect();
        assert_eq!(notifications, vec![Notification::Moving, Notification::MovingNext]);
        assert!(transition.actions.contains(&Action::MoveTrack { offset: -200 }));
        assert!(transition.actions.contains(&Action::ScheduleSettle { after_ms: 2000 }));
    }

    #[test]
    fn rejected_shift_only_reapplies_the_transition() {
        let moving = carousel(4).advance().state;
        let again = moving.advance();
        assert_eq!(again.actions, vec![Action::SetTransition(Some(2000))]);
        assert_eq!(again.state, moving);
    }

    #[test]
    fn forward_scenario_wraps_through_the_sentinel() {
        let mut state = carousel(4);
        for expected in 1..=3 {
            state = settled(state.advance());
            assert_eq!(state.index(), expected);
        }

        let sentinel = state.advance().state;
        assert_eq!(sentinel.index(), 4);
        assert_eq!(sentinel.active_link(), 0);

        let wrapped = sentinel.settle();
        assert_eq!(wrapped.state.index(), 0);
        assert_eq!(wrapped.state.offset(), -100);
        assert!(wrapped.actions.contains(&Action::SetTransition(None)));
    }

    #[test]
    fn retreat_from_the_first_slide_wraps_to_the_last() {
        let sentinel = carousel(3).retreat().state;
        assert_eq!(sentinel.index(), -1);
        assert_eq!(sentinel.offset(), 0);

        let settled = sentinel.settle().state;
        assert_eq!(settled.index(), 2);
        assert_eq!(settled.offset(), -300);
    }

    #[test]
    fn backward_layout_advances_towards_lower_indices() {
        let state = CarouselState::new(3, 100, Direction::Backward).unwrap();
        let moved = state.advance();
        assert_eq!(moved.state.index(), 1);
        assert!(moved.notifications().any(|n| n == Notification::MovingPrev));
    }

    #[test]
    fn spurious_settle_is_ignored() {
        let state = carousel(2);
        let transition = state.settle();
        assert!(transition.actions.is_empty());
        assert_eq!(transition.state, state);
    }

    #[test]
    fn start_and_stop_are_guarded() {
        let running = carousel(2).start().state;
        assert!(running.running());
        assert!(running.start().actions.is_empty());

        let stopped = running.stop();
        assert_eq!(
            stopped.actions,
            vec![Action::CancelAutoplay, Action::Notify(Notification::Stopped)]
        );
        assert!(stopped.state.stop().actions.is_empty());
    }

    #[test]
    fn paused_autoplay_skips_ticks() {
        let paused = carousel(3).start().state.pause().state;
        let tick = paused.autoplay_tick();
        assert!(tick.actions.is_empty());
        assert_eq!(tick.state.index(), 0);

        let resumed = paused.unpause().state;
        assert_eq!(resumed.autoplay_tick().state.index(), 1);
    }

    #[test]
    fn ticks_without_autoplay_do_nothing() {
        assert!(carousel(3).autoplay_tick().actions.is_empty());
    }

    #[test]
    fn drag_tracks_the_pointer() {
        let state = carousel(3).drag_start(50).state;
        let moved = state.drag_move(30).state.drag_move(20).state;
        assert_eq!(moved.offset(), -130);
        assert_eq!(moved.drag().map(|g| g.last_coordinate), Some(20));
    }

    #[test]
    fn short_drag_snaps_back() {
        let state = carousel(3).drag_start(200).state.drag_move(150).state;
        let end = state.drag_end();
        assert_eq!(end.state.offset(), -100);
        assert_eq!(end.state.index(), 0);
        assert!(end.state.drag().is_none());
        assert!(end.state.shift_allowed());
    }

    #[test]
    fn long_drag_to_the_right_retreats_from_the_anchor() {
        let state = carousel(3).drag_start(0).state.drag_move(150).state;
        let end = state.drag_end();
        assert_eq!(end.state.index(), -1);
        assert_eq!(end.state.offset(), 0);
    }

    #[test]
    fn control_shifts_wait_for_the_drag() {
        let dragging = carousel(4).start().state.drag_start(50).state.drag_move(40).state;
        assert_eq!(dragging.offset(), -110);

        let tick = dragging.autoplay_tick();
        assert!(tick.actions.is_empty());
        assert_eq!(tick.state, dragging);
        assert_eq!(dragging.retreat().state, dragging);
        assert!(dragging.jump_to(2).unwrap().actions.is_empty());

        let end = dragging.drag_end();
        assert_eq!(end.state.index(), 0);
        assert_eq!(end.state.offset(), -100);
    }

    #[test]
    fn settle_puts_the_track_back_on_the_slide_grid() {
        let mut moving = carousel(4).advance().state;
        moving.offset = -210;

        let settle = moving.settle();
        assert_eq!(settle.state.index(), 1);
        assert_eq!(settle.state.offset(), -200);
        assert!(settle.actions.contains(&Action::MoveTrack { offset: -200 }));
    }

    #[test]
    fn retreats_wrap_back_to_the_start() {
        let mut state = carousel(3);
        for expected in [2, 1, 0] {
            state = settled(state.retreat());
            assert_eq!(state.index(), expected);
            assert_eq!(state.offset(), state.track().offset_of(expected));
        }
    }

    #[test]
    fn backward_layouts_wrap_when_advancing() {
        let mut state = CarouselState::new(3, 100, Direction::Backward).unwrap();
        for expected in [1, 0] {
            state = settled(state.advance());
            assert_eq!(state.index(), expected);
        }

        let sentinel = state.advance().state;
        assert_eq!(sentinel.index(), -1);
        assert_eq!(sentinel.active_link(), 2);

        let wrapped = sentinel.settle().state;
        assert_eq!(wrapped.index(), 2);
        assert_eq!(wrapped.offset(), -300);
    }

    #[test]
    fn drag_is_ignored_while_shifting() {
        let moving = carousel(3).advance().state;
        assert_eq!(moving.drag_start(10).state, moving);
        assert!(moving.drag_end().actions.is_empty());
    }

    #[test]
    fn jump_to_animates_to_the_target() {
        let jump = carousel(5).jump_to(3).unwrap();
        assert_eq!(jump.state.index(), 3);
        assert_eq!(jump.state.offset(), -400);
        assert!(!jump.state.shift_allowed());
        assert!(jump.actions.contains(&Action::HighlightLink(3)));

        let back = jump.state.settle().state.jump_to(1).unwrap();
        assert!(back.notifications().any(|n| n == Notification::MovingPrev));
    }

    #[test]
    fn jump_to_validates_the_target() {
        assert!(matches!(
            carousel(2).jump_to(2),
            Err(SlideshowError::InvalidArgument(_))
        ));
        assert!(carousel(2).jump_to(0).unwrap().actions.is_empty());
    }

    #[test]
    fn hover_only_pauses_running_autoplay() {
        let idle = carousel(2);
        assert!(idle.hover_enter().actions.is_empty());

        let running = idle.start().state;
        let hovered = running.hover_enter().state;
        assert!(hovered.paused());
        assert!(!hovered.hover_leave().state.paused());

        let ignoring = running.with_pause_on_hover(false);
        assert!(!ignoring.hover_enter().state.paused());
    }

    #[test]
    fn resize_rescales_and_schedules_resume() {
        let state = carousel(4).advance().state.settle().state;
        let resized = state.resize(80).unwrap();

        assert!(resized.state.paused());
        assert_eq!(resized.state.offset(), -160);
        assert_eq!(resized.state.track().slide_width(), 80);
        assert!(resized.actions.contains(&Action::ResizeTrack {
            container_width: 480,
            slide_width: 80,
        }));
        assert!(resized.actions.contains(&Action::ScheduleResume { after_ms: 5000 }));
        assert!(!resized.state.resume_after_resize().state.paused());
    }

    #[test]
    fn resize_mid_drag_returns_to_the_dragged_slide() {
        let dragging = carousel(3).drag_start(100).state.drag_move(40).state;
        assert_eq!(dragging.offset(), -160);

        let resized = dragging.resize(100).unwrap().state;
        assert!(resized.drag().is_none());
        assert_eq!(resized.index(), 0);
        assert_eq!(resized.offset(), -100);
    }

    #[test]
    fn resize_rejects_empty_hosts() {
        assert!(carousel(2).resize(0).is_err());
    }

    #[test]
    fn destroy_stops_and_tears_down() {
        let destroyed = carousel(2).start().state.destroy();
        assert!(!destroyed.state.running());
        assert_eq!(destroyed.actions.last(), Some(&Action::Teardown));
        assert!(destroyed.notifications().any(|n| n == Notification::Stopped));
    }
}
