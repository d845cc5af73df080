//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the zslideshow
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait, translates Zellij events into library events, and drives the
//! slideshow's virtual clock from Zellij timers.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, subscribe to events
//! 2. **First Render**: Build the slideshow for the pane width (autostart)
//! 3. **Update**: Map keys, mouse and timers onto library events
//! 4. **Render**: Detect width changes (resize), then paint the frame
//!
//! # Event Mapping
//!
//! - `Key(l | Right)` → `Event::NextClicked` (key configurable via `next_btn`)
//! - `Key(h | Left)` → `Event::PrevClicked` (key configurable via `prev_btn`)
//! - `Key(1-9)` → `Event::JumpTo`
//! - `Key(Space)` → `Event::Start` / `Event::Stop`
//! - `Key(p)` → `Event::Pause` / `Event::Unpause`
//! - `Mouse(LeftClick)` on `‹`/`›` or a jump link → click / jump
//! - `Mouse(LeftClick | Hold | Release)` on the track → drag gesture
//! - `Mouse(Hover)` → `Event::HoverEnter`; pane losing focus → `Event::HoverLeave`
//! - `Timer` → `Slideshow::advance_clock`

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use std::time::Instant;

    use zellij_tile::prelude::*;

    use zslideshow::ui::{Hit, KeyHints, Layout};
    use zslideshow::{initialize, Config, Notification, Slideshow};

    /// Plugin state wrapper.
    ///
    /// Wraps the library's `Slideshow` with Zellij-specific concerns: the wall
    /// clock, the pending wakeup, pointer hover tracking and the pane size.
    pub struct State {
        config: Config,
        show: Option<Slideshow>,
        init_error: Option<String>,
        started_at: Instant,
        /// Virtual time of the earliest `set_timeout` still outstanding.
        wakeup_at: Option<u64>,
        hovering: bool,
        dragging: bool,
        rows: usize,
        cols: usize,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                config: Config::default(),
                show: None,
                init_error: None,
                started_at: Instant::now(),
                wakeup_at: None,
                hovering: false,
                dragging: false,
                rows: 0,
                cols: 0,
            }
        }
    }

    /// Converts a pane dimension into track units.
    fn to_width(cols: usize) -> i32 {
        i32::try_from(cols).unwrap_or(i32::MAX)
    }

    impl ZellijPlugin for State {
        /// Initializes the plugin on load.
        ///
        /// Parses configuration, initializes tracing, requests the permission
        /// needed for focus tracking and subscribes to events. The slideshow
        /// itself is built on the first render, once the pane width is known.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            match Config::from_zellij(&configuration) {
                Ok(config) => self.config = config,
                Err(e) => self.init_error = Some(e.to_string()),
            }
            zslideshow::observability::init_tracing(&self.config);

            let _guard = tracing::debug_span!("plugin_load").entered();
            if let Some(error) = &self.init_error {
                tracing::error!(%error, "invalid configuration");
            }
            tracing::debug!(
                slides = self.config.slides.len(),
                data = self.config.data.len(),
                design = %self.config.slider_design,
                "parsed configuration"
            );

            request_permission(&[PermissionType::ReadApplicationState]);
            subscribe(&[EventType::Key, EventType::Mouse, EventType::Timer, EventType::PaneUpdate]);
        }

        /// Handles incoming Zellij events.
        ///
        /// Returns `true` if the UI should re-render.
        fn update(&mut self, event: Event) -> bool {
            let _guard = tracing::debug_span!("plugin_update", event = %Self::event_name(&event)).entered();

            let our_event = match event {
                Event::Key(ref key) => match self.map_key_event(key) {
                    KeyOutcome::Dispatch(event) => event,
                    KeyOutcome::Close => {
                        close_self();
                        return false;
                    }
                    KeyOutcome::Ignore => return false,
                },
                Event::Mouse(mouse) => match self.map_mouse_event(mouse) {
                    Some(event) => event,
                    None => return false,
                },
                Event::PaneUpdate(manifest) => match self.map_pane_update(&manifest) {
                    Some(event) => event,
                    None => return false,
                },
                Event::Timer(_) => {
                    self.wakeup_at = None;
                    return self.tick();
                }
                _ => return false,
            };

            self.dispatch(&our_event)
        }

        /// Renders the plugin UI.
        ///
        /// Builds the slideshow on the first call and turns width changes into
        /// resizes before painting.
        fn render(&mut self, rows: usize, cols: usize) {
            self.rows = rows;
            if self.cols != cols {
                self.cols = cols;
                self.on_width(cols);
            }

            match (&self.show, &self.init_error) {
                (Some(show), _) => zslideshow::ui::render(show, rows, cols, self.key_hints()),
                (None, Some(error)) => {
                    zslideshow::ui::render_error(error, &self.config.load_theme(), rows, cols);
                }
                (None, None) => {}
            }
        }
    }

    /// Result of mapping a key press.
    enum KeyOutcome {
        Dispatch(zslideshow::Event),
        Close,
        Ignore,
    }

    impl State {
        fn event_name(event: &Event) -> String {
            match event {
                Event::Key(key) => format!("Key({:?})", key.bare_key),
                Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
                Event::Timer(elapsed) => format!("Timer({elapsed})"),
                Event::PaneUpdate(..) => "PaneUpdate".to_string(),
                _ => "Other".to_string(),
            }
        }

        const fn key_hints(&self) -> KeyHints {
            KeyHints {
                prev: self.config.prev_btn,
                next: self.config.next_btn,
            }
        }

        fn now_ms(&self) -> u64 {
            u64::try_from(self.started_at.elapsed().as_millis()).unwrap_or(u64::MAX)
        }

        /// Builds the slideshow on the first known width, resizes afterwards.
        fn on_width(&mut self, cols: usize) {
            if cols == 0 {
                return;
            }
            if self.show.is_some() {
                tracing::debug!(cols, "pane resized");
                self.dispatch(&zslideshow::Event::Resize {
                    host_width: to_width(cols),
                });
                return;
            }
            if self.init_error.is_some() {
                return;
            }

            match initialize(&self.config, to_width(cols)) {
                Ok(mut show) => {
                    let (_, notifications) = show
                        .advance_clock(self.now_ms())
                        .unwrap_or_default();
                    Self::report(&notifications);
                    self.show = Some(show);
                    self.schedule_wakeup();
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to initialize slideshow");
                    self.init_error = Some(e.to_string());
                }
            }
        }

        /// Catches the virtual clock up with the wall clock.
        fn tick(&mut self) -> bool {
            let now = self.now_ms();
            let Some(show) = self.show.as_mut() else {
                return false;
            };
            let changed = match show.advance_clock(now) {
                Ok((changed, notifications)) => {
                    Self::report(&notifications);
                    changed
                }
                Err(e) => {
                    tracing::warn!(error = %e, "timer continuation failed");
                    false
                }
            };
            self.schedule_wakeup();
            changed
        }

        fn dispatch(&mut self, event: &zslideshow::Event) -> bool {
            let catch_up = self.tick();
            let Some(show) = self.show.as_mut() else {
                return false;
            };
            let changed = match show.dispatch(event) {
                Ok((changed, notifications)) => {
                    Self::report(&notifications);
                    changed
                }
                Err(e) => {
                    tracing::warn!(error = %e, ?event, "event rejected");
                    false
                }
            };
            self.schedule_wakeup();
            catch_up || changed
        }

        fn report(notifications: &[Notification]) {
            for notification in notifications {
                tracing::info!(?notification, "slideshow notification");
            }
        }

        /// Asks Zellij for a timer event at the slideshow's next wakeup.
        fn schedule_wakeup(&mut self) {
            let Some(next) = self.show.as_ref().and_then(Slideshow::next_wakeup) else {
                return;
            };
            if self.wakeup_at.is_some_and(|pending| pending <= next) {
                return;
            }
            let now = self.now_ms();
            #[allow(clippy::cast_precision_loss)]
            let delay_secs = next.saturating_sub(now) as f64 / 1000.0;
            set_timeout(delay_secs);
            self.wakeup_at = Some(next);
        }

        /// Maps keyboard events to library events.
        fn map_key_event(&self, key: &KeyWithModifier) -> KeyOutcome {
            tracing::debug!(bare_key = ?key.bare_key, "key event");
            let Some(show) = self.show.as_ref() else {
                return match key.bare_key {
                    BareKey::Char('q') | BareKey::Esc => KeyOutcome::Close,
                    _ => KeyOutcome::Ignore,
                };
            };
            let state = show.state();

            let event = match key.bare_key {
                BareKey::Right => zslideshow::Event::NextClicked,
                BareKey::Left => zslideshow::Event::PrevClicked,
                BareKey::Char(c) if c == self.config.next_btn => zslideshow::Event::NextClicked,
                BareKey::Char(c) if c == self.config.prev_btn => zslideshow::Event::PrevClicked,
                BareKey::Char(c @ '1'..='9') => {
                    let target = c as usize - '1' as usize;
                    zslideshow::Event::JumpTo(target)
                }
                BareKey::Char(' ') if state.running() => zslideshow::Event::Stop,
                BareKey::Char(' ') => zslideshow::Event::Start,
                BareKey::Char('p') if state.paused() => zslideshow::Event::Unpause,
                BareKey::Char('p') => zslideshow::Event::Pause,
                BareKey::Char('q') | BareKey::Esc => return KeyOutcome::Close,
                _ => return KeyOutcome::Ignore,
            };
            KeyOutcome::Dispatch(event)
        }

        /// Maps mouse events to library events.
        fn map_mouse_event(&mut self, mouse: Mouse) -> Option<zslideshow::Event> {
            let show = self.show.as_ref()?;
            let layout = Layout::new(self.rows, self.cols);
            let link_count = show.show_jump_links().then_some(show.slides().len());

            match mouse {
                Mouse::Hover(..) if !self.hovering => {
                    self.hovering = true;
                    Some(zslideshow::Event::HoverEnter)
                }
                Mouse::LeftClick(line, col) => {
                    let line = usize::try_from(line).ok()?;
                    match layout.hit_test(line, col, link_count)? {
                        Hit::Prev => Some(zslideshow::Event::PrevClicked),
                        Hit::Next => Some(zslideshow::Event::NextClicked),
                        Hit::Link(target) => Some(zslideshow::Event::JumpTo(target)),
                        Hit::Track => {
                            self.dragging = true;
                            Some(zslideshow::Event::DragStart { x: to_width(col) })
                        }
                    }
                }
                Mouse::Hold(_, col) if self.dragging => {
                    Some(zslideshow::Event::DragMove { x: to_width(col) })
                }
                Mouse::Release(..) if self.dragging => {
                    self.dragging = false;
                    Some(zslideshow::Event::DragEnd)
                }
                _ => None,
            }
        }

        /// Treats the plugin pane losing focus as the pointer leaving it.
        fn map_pane_update(&mut self, manifest: &PaneManifest) -> Option<zslideshow::Event> {
            if !self.hovering {
                return None;
            }
            let own_id = get_plugin_ids().plugin_id;
            let focused = manifest
                .panes
                .values()
                .flatten()
                .any(|pane| pane.is_plugin && pane.id == own_id && pane.is_focused);
            if focused {
                return None;
            }
            self.hovering = false;
            Some(zslideshow::Event::HoverLeave)
        }
    }
}

#[cfg(target_family = "wasm")]
use plugin::State;

#[cfg(target_family = "wasm")]
zellij_tile::register_plugin!(State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!(
        "zslideshow is a Zellij plugin: build it with `--target wasm32-wasip1` and load the .wasm from a layout"
    );
}
