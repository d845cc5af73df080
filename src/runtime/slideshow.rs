//! The live slideshow: state machine, timers and stage wired together.

use crate::app::{handle_event, Action, CarouselState, Event, Notification, SliderDesign};
use crate::domain::{Result, Slide};
use crate::timing::{TimerHandle, TimerQueue};
use crate::ui::Theme;

use super::stage::Stage;

/// Interval between repaints while the track is animating.
pub const FRAME_MS: u64 = 40;

/// Deferred work kept on the timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// One autoplay tick (repeating).
    Autoplay,
    /// Settle continuation of an accepted shift.
    Settle,
    /// Resume autoplay after the resize debounce.
    ResumeAfterResize,
}

impl Task {
    const fn event(self) -> Event {
        match self {
            Self::Autoplay => Event::AutoplayTick,
            Self::Settle => Event::Settle,
            Self::ResumeAfterResize => Event::ResumeAfterResize,
        }
    }
}

/// A running carousel instance.
///
/// Owns the [`CarouselState`], executes the [`Action`]s it emits against the
/// [`Stage`] and the timer queue, and hands lifecycle notifications back to
/// the caller. Time only moves through [`Slideshow::advance_clock`].
#[derive(Debug, Clone)]
pub struct Slideshow {
    slides: Vec<Slide>,
    state: CarouselState,
    stage: Stage,
    timers: TimerQueue<Task>,
    autoplay: Option<TimerHandle>,
    resume: Option<TimerHandle>,
    design: SliderDesign,
    show_jump_links: bool,
    theme: Theme,
    torn_down: bool,
}

impl Slideshow {
    /// Wraps an initialized state. The stage starts at the state's offset.
    #[must_use]
    pub fn new(
        slides: Vec<Slide>,
        state: CarouselState,
        design: SliderDesign,
        show_jump_links: bool,
        theme: Theme,
    ) -> Self {
        let stage = Stage::new(state.track(), state.offset(), state.active_link());
        Self {
            slides,
            state,
            stage,
            timers: TimerQueue::new(),
            autoplay: None,
            resume: None,
            design,
            show_jump_links,
            theme,
            torn_down: false,
        }
    }

    /// Feeds one event through the state machine and executes its actions.
    ///
    /// # Returns
    ///
    /// Whether anything visible changed, and the notifications emitted.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::SlideshowError::InvalidArgument`] from the state
    /// machine; nothing is executed in that case.
    pub fn dispatch(&mut self, event: &Event) -> Result<(bool, Vec<Notification>)> {
        if self.torn_down {
            tracing::debug!(?event, "event after destroy ignored");
            return Ok((false, Vec::new()));
        }
        let (changed, actions) = handle_event(&mut self.state, event)?;
        let notifications = self.execute(actions);
        Ok((changed, notifications))
    }

    fn execute(&mut self, actions: Vec<Action>) -> Vec<Notification> {
        let now = self.timers.now();
        let mut notifications = Vec::new();

        for action in actions {
            match action {
                Action::Notify(notification) => {
                    tracing::debug!(?notification, "notification");
                    notifications.push(notification);
                }
                Action::SetTransition(_)
                | Action::MoveTrack { .. }
                | Action::ResizeTrack { .. }
                | Action::HighlightLink(_) => self.stage.apply(&action, now),
                Action::ScheduleSettle { after_ms } => {
                    self.timers.schedule_once(after_ms, Task::Settle);
                }
                Action::StartAutoplay { period_ms } => {
                    self.cancel_autoplay();
                    self.autoplay = Some(self.timers.schedule_repeating(period_ms, Task::Autoplay));
                }
                Action::CancelAutoplay => self.cancel_autoplay(),
                Action::ScheduleResume { after_ms } => {
                    self.cancel_resume();
                    self.resume = Some(self.timers.schedule_once(after_ms, Task::ResumeAfterResize));
                }
                Action::Teardown => {
                    self.cancel_autoplay();
                    self.cancel_resume();
                    self.timers.clear();
                    self.stage.apply(&Action::SetTransition(None), now);
                    self.torn_down = true;
                    tracing::info!("slideshow destroyed");
                }
            }
        }
        notifications
    }

    fn cancel_autoplay(&mut self) {
        if let Some(handle) = self.autoplay.take() {
            self.timers.cancel(handle);
        }
    }

    fn cancel_resume(&mut self) {
        if let Some(handle) = self.resume.take() {
            self.timers.cancel(handle);
        }
    }

    /// Moves the clock to `now_ms`, running every task that fell due.
    ///
    /// # Returns
    ///
    /// Whether a repaint is needed (a task changed the state or the track is
    /// animating), and the notifications emitted by the tasks in order.
    ///
    /// # Errors
    ///
    /// Propagates errors from the dispatched continuations.
    pub fn advance_clock(&mut self, now_ms: u64) -> Result<(bool, Vec<Notification>)> {
        let mut changed = self.stage.is_animating(self.timers.now());
        let mut notifications = Vec::new();

        while let Some((due, task)) = self.timers.pop_due(now_ms) {
            tracing::trace!(due, ?task, "timer fired");
            let (task_changed, emitted) = self.dispatch(&task.event())?;
            changed |= task_changed;
            notifications.extend(emitted);
        }
        self.timers.advance_to(now_ms);

        Ok((changed, notifications))
    }

    /// Earliest time at which [`Self::advance_clock`] has work to do.
    #[must_use]
    pub fn next_wakeup(&self) -> Option<u64> {
        let now = self.timers.now();
        let frame = self
            .stage
            .is_animating(now)
            .then(|| now.saturating_add(FRAME_MS));
        match (self.timers.next_deadline(), frame) {
            (Some(deadline), Some(frame)) => Some(deadline.min(frame)),
            (deadline, frame) => deadline.or(frame),
        }
    }

    pub fn start(&mut self) -> Result<Vec<Notification>> {
        self.dispatch(&Event::Start).map(|(_, n)| n)
    }

    pub fn stop(&mut self) -> Result<Vec<Notification>> {
        self.dispatch(&Event::Stop).map(|(_, n)| n)
    }

    pub fn pause(&mut self) -> Result<Vec<Notification>> {
        self.dispatch(&Event::Pause).map(|(_, n)| n)
    }

    pub fn unpause(&mut self) -> Result<Vec<Notification>> {
        self.dispatch(&Event::Unpause).map(|(_, n)| n)
    }

    pub fn advance(&mut self) -> Result<Vec<Notification>> {
        self.dispatch(&Event::Advance).map(|(_, n)| n)
    }

    pub fn retreat(&mut self) -> Result<Vec<Notification>> {
        self.dispatch(&Event::Retreat).map(|(_, n)| n)
    }

    /// Navigates directly to slide `target`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SlideshowError::InvalidArgument`] for targets past the
    /// last slide.
    pub fn jump_to(&mut self, target: usize) -> Result<Vec<Notification>> {
        self.dispatch(&Event::JumpTo(target)).map(|(_, n)| n)
    }

    /// Adapts to a new host width.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SlideshowError::InvalidArgument`] for non-positive widths.
    pub fn resize(&mut self, host_width: i32) -> Result<Vec<Notification>> {
        self.dispatch(&Event::Resize { host_width }).map(|(_, n)| n)
    }

    pub fn destroy(&mut self) -> Result<Vec<Notification>> {
        self.dispatch(&Event::Destroy).map(|(_, n)| n)
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub const fn state(&self) -> &CarouselState {
        &self.state
    }

    #[must_use]
    pub const fn stage(&self) -> &Stage {
        &self.stage
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub const fn design(&self) -> SliderDesign {
        self.design
    }

    #[must_use]
    pub const fn show_jump_links(&self) -> bool {
        self.show_jump_links
    }

    /// Current virtual time.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.timers.now()
    }

    /// Whether the repeating autoplay timer is installed.
    #[must_use]
    pub fn autoplay_installed(&self) -> bool {
        self.autoplay.is_some_and(|handle| self.timers.is_pending(handle))
    }

    /// Whether a resume-after-resize timer is pending.
    #[must_use]
    pub fn resume_pending(&self) -> bool {
        self.resume.is_some_and(|handle| self.timers.is_pending(handle))
    }

    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
