//! Event handling and state transition logic.
//!
//! This module implements the event handler that translates host input and
//! timer firings into carousel transitions. It is the only place that commits
//! a [`Transition`](super::state::Transition) back into the live state.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin shim or the timer queue
//! 2. [`handle_event`] pattern-matches the event type
//! 3. The matching `CarouselState` operation computes a transition
//! 4. The new state is committed and its actions are returned for execution
//!
//! # Event Types
//!
//! - **Autoplay**: `Start`, `Stop`, `Pause`, `Unpause`, `AutoplayTick`
//! - **Navigation**: `Advance`, `Retreat`, `NextClicked`, `PrevClicked`, `JumpTo`
//! - **Pointer**: `DragStart`, `DragMove`, `DragEnd`, `HoverEnter`, `HoverLeave`
//! - **Continuations**: `Settle`, `ResumeAfterResize`
//! - **Host**: `Resize`, `Destroy`
//!
//! # Example
//!
//! ```rust
//! use zslideshow::app::{handle_event, CarouselState, Direction, Event};
//!
//! let mut state = CarouselState::new(3, 40, Direction::Forward)?;
//! let (changed, actions) = handle_event(&mut state, &Event::Advance)?;
//! assert!(changed);
//! assert!(!actions.is_empty());
//! assert_eq!(state.index(), 1);
//! # Ok::<(), zslideshow::SlideshowError>(())
//! ```

use super::actions::{Action, Notification};
use super::state::{CarouselState, Transition};
use crate::domain::error::Result;

/// Events triggered by user input, host changes, or timer continuations.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. Events are processed sequentially, so transitions are
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Starts autoplay.
    Start,
    /// Stops autoplay.
    Stop,
    /// Suspends autoplay ticks.
    Pause,
    /// Resumes autoplay ticks.
    Unpause,

    /// Moves one slide in reading direction.
    Advance,
    /// Moves one slide against reading direction.
    Retreat,
    /// The next control was activated (click or bound key).
    NextClicked,
    /// The previous control was activated (click or bound key).
    PrevClicked,
    /// A jump link was activated for the given real slide.
    JumpTo(usize),

    /// The repeating autoplay timer fired.
    AutoplayTick,
    /// The settle continuation of an accepted shift fired.
    Settle,

    /// Pointer pressed on the track at horizontal coordinate `x`.
    DragStart {
        /// Pointer coordinate in logical units.
        x: i32,
    },
    /// Pointer moved while pressed.
    DragMove {
        /// Pointer coordinate in logical units.
        x: i32,
    },
    /// Pointer released.
    DragEnd,
    /// Pointer entered the widget.
    HoverEnter,
    /// Pointer left the widget.
    HoverLeave,

    /// The host reported a new width for the widget.
    Resize {
        /// New slide width in logical units.
        host_width: i32,
    },
    /// The resize debounce elapsed.
    ResumeAfterResize,
    /// The widget is being removed.
    Destroy,
}

/// Processes an event, commits the resulting state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to the carousel state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of:
/// - `bool`: whether the state changed (the host should re-render)
/// - `Vec<Action>`: actions to execute in order
///
/// # Errors
///
/// Returns [`SlideshowError::InvalidArgument`](crate::SlideshowError::InvalidArgument)
/// for out-of-range jumps and non-positive resize widths. The state is left
/// untouched in that case.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event for debugging.
pub fn handle_event(state: &mut CarouselState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event = ?event, index = state.index()).entered();

    let transition = match *event {
        Event::Start => state.start(),
        Event::Stop => state.stop(),
        Event::Pause => state.pause(),
        Event::Unpause => state.unpause(),
        Event::Advance => state.advance(),
        Event::Retreat => state.retreat(),
        Event::NextClicked => with_click(state.advance(), Notification::ClickNext),
        Event::PrevClicked => with_click(state.retreat(), Notification::ClickPrev),
        Event::JumpTo(target) => state.jump_to(target)?,
        Event::AutoplayTick => state.autoplay_tick(),
        Event::Settle => state.settle(),
        Event::DragStart { x } => state.drag_start(x),
        Event::DragMove { x } => state.drag_move(x),
        Event::DragEnd => state.drag_end(),
        Event::HoverEnter => state.hover_enter(),
        Event::HoverLeave => state.hover_leave(),
        Event::Resize { host_width } => state.resize(host_width)?,
        Event::ResumeAfterResize => state.resume_after_resize(),
        Event::Destroy => state.destroy(),
    };

    Ok(commit(state, transition))
}

fn with_click(mut transition: Transition, click: Notification) -> Transition {
    transition.actions.push(Action::Notify(click));
    transition
}

fn commit(state: &mut CarouselState, transition: Transition) -> (bool, Vec<Action>) {
    let Transition {
        state: next,
        actions,
    } = transition;
    let changed = next != *state;
    if changed {
        tracing::trace!(index = next.index(), offset = next.offset(), "state committed");
    }
    *state = next;
    (changed, actions)
}
