//! Slide domain model and materialization.
//!
//! Slides reach the carousel in two ways: as pre-existing slides discovered on
//! the host (plain image paths from the `slides` option) and as raw data units
//! (`{ imagePath, title? }`) that are materialized into slides when `fill_up`
//! is enabled. Both sources are merged into one ordered list.

use serde::{Deserialize, Serialize};

use super::error::{Result, SlideshowError};

/// A raw data unit describing one slide before materialization.
///
/// Accepts both the camel-case keys of the JSON `data` option and snake-case
/// keys from TOML configuration files.
///
/// ```
/// use zslideshow::domain::SlideData;
///
/// let units: Vec<SlideData> =
///     serde_json::from_str(r#"[{"imagePath": "a.jpg", "title": "Hello, world!"}]"#).unwrap();
/// assert_eq!(units[0].image_path, "a.jpg");
/// assert_eq!(units[0].title.as_deref(), Some("Hello, world!"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideData {
    #[serde(alias = "imagePath")]
    pub image_path: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl SlideData {
    /// Creates a data unit without a title.
    #[must_use]
    pub fn new(image_path: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
            title: None,
        }
    }

    /// Attaches a title to the unit.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// One navigable content unit of the carousel.
///
/// `order` is the slide's position among the real (non-cloned) slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub order: usize,
    pub image_path: String,
    pub title: Option<String>,
}

impl Slide {
    /// Returns the label painted on the slide card: the title when present,
    /// otherwise the file name of the image.
    #[must_use]
    pub fn label(&self) -> &str {
        if let Some(title) = self.title.as_deref().filter(|t| !t.trim().is_empty()) {
            return title;
        }
        self.image_path
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(&self.image_path)
    }
}

/// Builds the ordered slide list from discovered slides and data units.
///
/// Discovered slides come first, followed by the materialized data units when
/// `fill_up` is set. Units with a blank image path still produce a slide, with
/// an empty source, so the slide count matches the configured data.
///
/// # Errors
///
/// Returns [`SlideshowError::Configuration`] when no slides are available.
///
/// ```
/// use zslideshow::domain::{materialize, SlideData};
///
/// let slides = materialize(&["cover.png".to_string()], &[SlideData::new("b.png")], true).unwrap();
/// assert_eq!(slides.len(), 2);
/// assert_eq!(slides[1].order, 1);
///
/// assert!(materialize(&[], &[SlideData::new("b.png")], false).is_err());
/// ```
pub fn materialize(discovered: &[String], data: &[SlideData], fill_up: bool) -> Result<Vec<Slide>> {
    let discovered = discovered.iter().map(|path| SlideData::new(path.trim()));
    let filled = data.iter().filter(|_| fill_up).cloned();

    let slides: Vec<Slide> = discovered
        .chain(filled)
        .enumerate()
        .map(|(order, unit)| Slide {
            order,
            image_path: unit.image_path.trim().to_string(),
            title: unit.title,
        })
        .collect();

    if slides.is_empty() {
        return Err(SlideshowError::Configuration(
            "no slides available: provide `slides` or enable `fill_up` with `data`".to_string(),
        ));
    }

    tracing::debug!(slide_count = slides.len(), fill_up, "slides materialized");
    Ok(slides)
}
