//! Runtime layer executing the actions of the state machine.
//!
//! - [`slideshow`]: the live instance owning state, timers and stage
//! - [`stage`]: render model of the track (offsets, animation, links)

pub mod slideshow;
pub mod stage;

pub use slideshow::{Slideshow, Task, FRAME_MS};
pub use stage::Stage;
