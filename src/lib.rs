//! zslideshow: a draggable, auto-playing slideshow carousel for Zellij.
//!
//! The plugin cycles through a set of slides with:
//! - Seamless wraparound through clone slides at both ends of the track
//! - Autoplay with pause-on-hover and a debounced resume after resizes
//! - Drag gestures with a commit threshold and animated snap-back
//! - Jump links for direct navigation
//! - Left-to-right and right-to-left layouts

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Carousel state and transitions                   │
//! │  - Event handling                                   │
//! │  - Actions and notifications                        │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Runtime       │   │ Timing        │   │ UI Layer      │
//! │ (runtime/)    │   │ (timing/)     │   │ (ui/)         │
//! │ - Slideshow   │   │ - Timer queue │   │ - Filmstrip   │
//! │ - Stage       │   │ - Virtual     │   │ - Theming     │
//! │               │   │   clock       │   │ - Components  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Slide model (domain/slide)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber with rotating log file        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zslideshow.wasm" {
//!         slides "~/pictures/a.jpg,~/pictures/b.jpg"
//!         data "[{\"imagePath\": \"c.jpg\", \"title\": \"Harbour\"}]"
//!         slider_design "hero"
//!         delay "6000"
//!         duration "2000"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! Every key can also live in a TOML file named by `config_file`; keys given in
//! the layout override the file.
//!
//! # Example
//!
//! ```rust
//! use zslideshow::{initialize, Config, Notification};
//!
//! let config = Config {
//!     slides: vec!["a.png".into(), "b.png".into(), "c.png".into()],
//!     autostart: false,
//!     ..Config::default()
//! };
//!
//! let mut show = initialize(&config, 60)?;
//! let notifications = show.advance()?;
//! assert_eq!(notifications, vec![Notification::Moving, Notification::MovingNext]);
//!
//! show.advance_clock(config.duration_ms)?;
//! assert!(show.state().shift_allowed());
//! # Ok::<(), zslideshow::SlideshowError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod runtime;
pub mod timing;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, CarouselState, Direction, Event, Notification, SliderDesign};
pub use domain::{Result, Slide, SlideData, SlideshowError};
pub use runtime::Slideshow;
pub use ui::Theme;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::app::state::{Timing, DEFAULT_DELAY_MS, DEFAULT_DURATION_MS, RESIZE_SETTLE_MS};
use crate::infrastructure::expand_tilde;

/// Plugin configuration.
///
/// Values come from Zellij's KDL plugin block ([`Config::from_zellij`]) and
/// optionally from a TOML file ([`Config::from_file`]) using the same keys.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Layout variant name, `hero` or `multiSlide`. Validated at initialization.
    pub slider_design: String,

    /// Whether the `data` units are materialized into slides.
    pub fill_up: bool,

    /// Raw data units (`{ imagePath, title? }`).
    pub data: Vec<SlideData>,

    /// Pre-existing slides, as image paths.
    pub slides: Vec<String>,

    /// Start autoplay right after setup.
    pub autostart: bool,

    /// Pause autoplay while the pointer hovers the pane.
    pub pause_on_hover: bool,

    /// Transition length in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: u64,

    /// Autoplay interval in milliseconds.
    #[serde(rename = "delay")]
    pub delay_ms: u64,

    /// Use `duration` as the autoplay interval instead of `delay`.
    pub interval_from_duration: bool,

    /// `-1` reads left-to-right, `1` right-to-left. Detected from `lang` when unset.
    pub direction: Option<i32>,

    /// Host locale, e.g. `en` or `ar`.
    pub lang: Option<String>,

    /// Render the jump links below the track.
    pub show_jump_links: bool,

    /// Key bound to the next control.
    pub next_btn: char,

    /// Key bound to the previous control.
    pub prev_btn: char,

    /// Drag commit threshold in columns. Defaults to a quarter of the slide width.
    pub drag_threshold: Option<i32>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing filter, e.g. `debug` or `zslideshow=trace`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slider_design: "hero".to_string(),
            fill_up: true,
            data: Vec::new(),
            slides: Vec::new(),
            autostart: true,
            pause_on_hover: true,
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: DEFAULT_DELAY_MS,
            interval_from_duration: false,
            direction: None,
            lang: None,
            show_jump_links: true,
            next_btn: 'l',
            prev_btn: 'h',
            drag_threshold: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// When `config_file` is present the TOML file is loaded first and the
    /// remaining map keys override its values.
    ///
    /// # Parsing Rules
    ///
    /// - `slides`: comma-separated string → `Vec<String>` (filters empty values)
    /// - `data`: JSON array of `{ "imagePath": ..., "title": ... }`
    /// - booleans: `true`/`false`; numbers: decimal
    /// - `next_btn` / `prev_btn`: a single character
    ///
    /// # Errors
    ///
    /// Returns [`SlideshowError::Configuration`] for values that do not parse
    /// and propagates errors from reading `config_file`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zslideshow::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("slides".to_string(), "a.png, b.png".to_string());
    /// map.insert("delay".to_string(), "3000".to_string());
    ///
    /// let config = Config::from_zellij(&map)?;
    /// assert_eq!(config.slides, vec!["a.png", "b.png"]);
    /// assert_eq!(config.delay_ms, 3000);
    /// # Ok::<(), zslideshow::SlideshowError>(())
    /// ```
    pub fn from_zellij(map: &BTreeMap<String, String>) -> Result<Self> {
        let mut config = match map.get("config_file") {
            Some(path) => Self::from_file(expand_tilde(path.trim()))?,
            None => Self::default(),
        };

        for (key, value) in map {
            config.apply(key, value)?;
        }
        Ok(config)
    }

    /// Loads configuration from a TOML file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// - [`SlideshowError::Io`] if the file cannot be read
    /// - [`SlideshowError::Configuration`] if it is not valid configuration TOML
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        toml::from_str(&contents).map_err(|e| {
            SlideshowError::Configuration(format!(
                "invalid config file {}: {e}",
                path.as_ref().display()
            ))
        })
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "slider_design" => self.slider_design = value.to_string(),
            "fill_up" => self.fill_up = parse_value(key, value)?,
            "data" => {
                self.data = serde_json::from_str(value).map_err(|e| {
                    SlideshowError::Configuration(format!("`data` is not a valid slide array: {e}"))
                })?;
            }
            "slides" => {
                self.slides = value
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(String::from)
                    .collect();
            }
            "autostart" => self.autostart = parse_value(key, value)?,
            "pause_on_hover" => self.pause_on_hover = parse_value(key, value)?,
            "duration" => self.duration_ms = parse_value(key, value)?,
            "delay" => self.delay_ms = parse_value(key, value)?,
            "interval_from_duration" => self.interval_from_duration = parse_value(key, value)?,
            "direction" => self.direction = Some(parse_value(key, value)?),
            "lang" => self.lang = Some(value.to_string()),
            "show_jump_links" => self.show_jump_links = parse_value(key, value)?,
            "next_btn" => self.next_btn = parse_value(key, value)?,
            "prev_btn" => self.prev_btn = parse_value(key, value)?,
            "drag_threshold" => self.drag_threshold = Some(parse_value(key, value)?),
            "theme" => self.theme_name = Some(value.to_string()),
            "theme_file" => self.theme_file = Some(expand_tilde(value)),
            "trace_level" => self.trace_level = Some(value.to_string()),
            "config_file" => {}
            other => tracing::debug!(key = %other, "ignoring unknown configuration key"),
        }
        Ok(())
    }

    /// Timing parameters derived from `duration`, `delay` and
    /// `interval_from_duration`.
    #[must_use]
    pub const fn timing(&self) -> Timing {
        Timing {
            duration_ms: self.duration_ms,
            autoplay_interval_ms: if self.interval_from_duration {
                self.duration_ms
            } else {
                self.delay_ms
            },
            resize_settle_ms: RESIZE_SETTLE_MS,
        }
    }

    /// Drag threshold for slides `slide_width` columns wide.
    #[must_use]
    pub fn resolved_drag_threshold(&self, slide_width: i32) -> i32 {
        self.drag_threshold
            .unwrap_or_else(|| (slide_width / 4).max(1))
    }

    /// Loads the configured theme, falling back to the default on failure.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(theme_file).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| SlideshowError::Configuration(format!("invalid value `{value}` for `{key}`")))
}

/// Builds a slideshow from configuration for a pane `host_width` columns wide.
///
/// Initialization is all-or-nothing: on error no slideshow exists. When
/// `autostart` is set, autoplay is running on return.
///
/// # Errors
///
/// - [`SlideshowError::Configuration`] for an unknown slider design, an
///   invalid direction, or when no slides are available
/// - [`SlideshowError::InvalidArgument`] when `host_width` is not positive
pub fn initialize(config: &Config, host_width: i32) -> Result<Slideshow> {
    tracing::debug!(host_width, "initializing slideshow");

    let design = SliderDesign::parse(&config.slider_design)?;
    let slides = domain::materialize(&config.slides, &config.data, config.fill_up)?;
    let direction = Direction::resolve(config.direction, config.lang.as_deref())?;

    let state = CarouselState::new(slides.len(), host_width, direction)?
        .with_timing(config.timing())
        .with_drag_threshold(config.resolved_drag_threshold(host_width))
        .with_pause_on_hover(config.pause_on_hover);

    tracing::info!(
        slides = slides.len(),
        ?design,
        ?direction,
        autostart = config.autostart,
        "slideshow initialized"
    );

    let mut show = Slideshow::new(
        slides,
        state,
        design,
        config.show_jump_links,
        config.load_theme(),
    );
    if config.autostart {
        show.start()?;
    }
    Ok(show)
}
