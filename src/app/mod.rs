//! Application layer coordinating state, events, and actions.
//!
//! This module holds the carousel logic, sitting between the plugin shim
//! (main.rs) and the runtime that executes side effects. Nothing in here knows
//! about timers, terminals or Zellij.
//!
//! # Architecture
//!
//! ```text
//! Host Input → Events → Event Handler → State Transition → Actions → Side Effects
//!                            ↑                                           ↓
//!                            └───────────── Timer Continuations ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands and lifecycle notifications
//! - [`handler`]: Event processing and transition commit
//! - [`modes`]: Direction, step and design enums
//! - [`state`]: The carousel state machine
//! - [`track`]: Slide track geometry
//!
//! # Example
//!
//! ```rust
//! use zslideshow::app::{handle_event, CarouselState, Direction, Event};
//!
//! let mut state = CarouselState::new(4, 80, Direction::Forward)?;
//! handle_event(&mut state, &Event::Start)?;
//! assert!(state.running());
//! # Ok::<(), zslideshow::SlideshowError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;
pub mod track;

pub use actions::{Action, Notification};
pub use handler::{handle_event, Event};
pub use modes::{Direction, ShiftOrigin, SliderDesign, Step};
pub use state::{CarouselState, DragGesture, Timing, Transition};
pub use track::Track;
