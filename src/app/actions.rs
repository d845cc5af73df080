//! Actions representing side effects to be executed by the host runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced by
//! the state machine after each transition, and the [`Notification`] lifecycle
//! signals forwarded to the host. Actions bridge pure state transitions and
//! effectful operations: positioning the track, toggling the transition
//! animation, scheduling timers.
//!
//! # Architecture
//!
//! Every transition returns a `Vec<Action>` so that one event can queue several
//! side effects atomically. The runtime ([`crate::runtime::Slideshow`]) executes
//! them in order: stage actions update the render model, timer actions touch
//! the timer queue, notifications are handed back to the caller.
//!
//! # Example
//!
//! ```rust
//! use zslideshow::app::{Action, Notification};
//!
//! let actions = vec![
//!     Action::Notify(Notification::Moving),
//!     Action::MoveTrack { offset: -160 },
//!     Action::ScheduleSettle { after_ms: 2000 },
//! ];
//! assert_eq!(actions.len(), 3);
//! ```

/// Lifecycle notifications emitted to the host.
///
/// These replace the callback options of a classic widget (`moving`,
/// `hasMoved`, `movingNext`, ...); the host reacts to them however it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// The next control was clicked (emitted after the shift request).
    ClickNext,
    /// The previous control was clicked (emitted after the shift request).
    ClickPrev,
    /// An accepted shift is starting.
    Moving,
    /// A shift has settled.
    HasMoved,
    /// The accepted shift moves towards the next slide.
    MovingNext,
    /// The accepted shift moves towards the previous slide.
    MovingPrev,
    /// Autoplay started.
    Started,
    /// Autoplay stopped.
    Stopped,
    /// Autoplay paused.
    Paused,
    /// Autoplay resumed.
    Unpaused,
}

/// Commands representing side effects to be executed by the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Forwards a lifecycle notification to the host.
    Notify(Notification),

    /// Sets the track's transition: `Some(ms)` animates subsequent moves over
    /// `ms` milliseconds, `None` makes them instantaneous.
    SetTransition(Option<u64>),

    /// Positions the track at `offset` logical units.
    MoveTrack {
        /// New container offset (negative values scroll towards later slides).
        offset: i32,
    },

    /// Applies new track geometry after a resize.
    ResizeTrack {
        /// Total width of the track including both clone slides.
        container_width: i32,
        /// Width of every slide.
        slide_width: i32,
    },

    /// Marks the jump link of the given real slide as active.
    HighlightLink(usize),

    /// Schedules the settle continuation of the in-flight shift.
    ScheduleSettle {
        /// Delay before the settle runs.
        after_ms: u64,
    },

    /// Installs (or reinstalls) the repeating autoplay timer.
    StartAutoplay {
        /// Interval between autoplay ticks.
        period_ms: u64,
    },

    /// Cancels the repeating autoplay timer.
    CancelAutoplay,

    /// Schedules the resume-after-resize timer, replacing any pending one.
    ScheduleResume {
        /// Delay before autoplay is unpaused.
        after_ms: u64,
    },

    /// Cancels every pending timer except in-flight settles and detaches the
    /// widget from its host.
    Teardown,
}
