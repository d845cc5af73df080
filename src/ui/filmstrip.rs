//! Filmstrip composition: which part of which slide card is visible.
//!
//! The track is painted as a strip of equally wide cards, with a clone of the
//! last slide before the first and a clone of the first slide after the last.
//! The pane is a window onto that strip at the stage's current offset, so a
//! card can be cut anywhere while the track animates or follows a drag.
//!
//! # Example
//!
//! ```rust
//! use zslideshow::ui::filmstrip::{compose, Cell};
//!
//! // Three slides of 10 columns, halfway between slide 0 and slide 1.
//! let segments = compose(-15, 10, 3, 10);
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].cell, Cell::Slide { index: 0, clone: false });
//! assert_eq!((segments[0].from_col, segments[0].width), (5, 5));
//! ```

use crate::app::SliderDesign;
use crate::domain::Slide;
use crate::infrastructure::display_path;

use super::helpers::{center, char_len, slice_columns};

/// What occupies a run of visible columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A slide card; `clone` marks the copies at the track ends.
    Slide { index: usize, clone: bool },
    /// Empty space beyond either end of the track (over-dragged).
    Gap,
}

/// A visible run of columns taken from one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilmSegment {
    pub cell: Cell,
    /// First card column shown.
    pub from_col: usize,
    /// Number of columns shown.
    pub width: usize,
}

/// Styling role of a painted piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Frame,
    Title,
    Caption,
    Clone,
    Gap,
}

/// A run of text painted with one tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub text: String,
    pub tone: Tone,
}

/// Splits a `viewport` columns wide window at track `offset` into segments.
///
/// Offsets follow the track convention: position `p` is fully in view at
/// `-(p + 1) * slide_width`.
#[must_use]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub fn compose(offset: i32, slide_width: i32, slide_count: usize, viewport: usize) -> Vec<FilmSegment> {
    let mut segments = Vec::new();
    if slide_width <= 0 || slide_count == 0 || viewport == 0 {
        return segments;
    }

    let width = slide_width as usize;
    let track_len = (slide_count + 2) * width;
    let mut remaining = viewport;

    let mut col = if offset > 0 {
        let gap = (offset as usize).min(remaining);
        segments.push(FilmSegment {
            cell: Cell::Gap,
            from_col: 0,
            width: gap,
        });
        remaining -= gap;
        0
    } else {
        offset.unsigned_abs() as usize
    };

    while remaining > 0 && col < track_len {
        let card = col / width;
        let within = col % width;
        let take = (width - within).min(remaining);
        let index = match card {
            0 => Cell::Slide {
                index: slide_count - 1,
                clone: true,
            },
            c if c == slide_count + 1 => Cell::Slide { index: 0, clone: true },
            c => Cell::Slide {
                index: c - 1,
                clone: false,
            },
        };
        segments.push(FilmSegment {
            cell: index,
            from_col: within,
            width: take,
        });
        col += take;
        remaining -= take;
    }

    if remaining > 0 {
        segments.push(FilmSegment {
            cell: Cell::Gap,
            from_col: 0,
            width: remaining,
        });
    }
    segments
}

/// Lays out one slide card as `height` lines of exactly `width` characters.
///
/// Each line carries the tone it should be painted with.
#[must_use]
pub fn card_lines(slide: &Slide, design: SliderDesign, width: usize, height: usize) -> Vec<(String, Tone)> {
    let inset = match design {
        SliderDesign::Hero => 0,
        SliderDesign::MultiSlide => 2.min(width / 4),
    };
    let frame_width = width - 2 * inset;
    let pad = " ".repeat(inset);

    if frame_width < 2 || height < 3 {
        let mid = height / 2;
        return (0..height)
            .map(|row| {
                if row == mid {
                    (center(slide.label(), width), Tone::Title)
                } else {
                    (" ".repeat(width), Tone::Frame)
                }
            })
            .collect();
    }

    let inner = frame_width - 2;
    let title_row = height / 2;
    let caption_row = title_row + 1;
    let badge = format!("#{}", slide.order + 1);
    let caption = display_path(&slide.image_path);

    (0..height)
        .map(|row| {
            let framed = |body: String| format!("{pad}│{body}│{pad}");
            if row == 0 {
                (format!("{pad}╭{}╮{pad}", "─".repeat(inner)), Tone::Frame)
            } else if row == height - 1 {
                (format!("{pad}╰{}╯{pad}", "─".repeat(inner)), Tone::Frame)
            } else if row == title_row {
                (framed(center(slide.label(), inner)), Tone::Title)
            } else if row == caption_row && caption_row < height - 1 && slide.title.is_some() {
                (framed(center(&caption, inner)), Tone::Caption)
            } else if row == 1 && design == SliderDesign::MultiSlide && title_row > 1 {
                (framed(center(&badge, inner)), Tone::Caption)
            } else {
                (framed(" ".repeat(inner)), Tone::Frame)
            }
        })
        .collect()
}

/// Paints the visible window as `height` rows of toned pieces.
#[must_use]
pub fn filmstrip_rows(
    slides: &[Slide],
    design: SliderDesign,
    segments: &[FilmSegment],
    card_width: usize,
    height: usize,
) -> Vec<Vec<Piece>> {
    let cards: Vec<Option<Vec<(String, Tone)>>> = segments
        .iter()
        .map(|segment| match segment.cell {
            Cell::Slide { index, .. } => slides
                .get(index)
                .map(|slide| card_lines(slide, design, card_width, height)),
            Cell::Gap => None,
        })
        .collect();

    (0..height)
        .map(|row| {
            segments
                .iter()
                .zip(&cards)
                .map(|(segment, card)| match (segment.cell, card) {
                    (Cell::Slide { clone, .. }, Some(lines)) => {
                        let (line, tone) = &lines[row];
                        Piece {
                            text: slice_columns(line, segment.from_col, segment.width),
                            tone: if clone { Tone::Clone } else { *tone },
                        }
                    }
                    _ => Piece {
                        text: " ".repeat(segment.width),
                        tone: Tone::Gap,
                    },
                })
                .collect()
        })
        .collect()
}

/// Concatenates the text of a painted row without styling.
#[must_use]
pub fn plain_text(row: &[Piece]) -> String {
    row.iter().map(|piece| piece.text.as_str()).collect()
}

/// Visible width of a painted row.
#[must_use]
pub fn row_width(row: &[Piece]) -> usize {
    row.iter().map(|piece| char_len(&piece.text)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::materialize;

    fn slides(count: usize) -> Vec<Slide> {
        let paths: Vec<String> = (0..count).map(|i| format!("s{i}.png")).collect();
        materialize(&paths, &[], false).unwrap()
    }

    #[test]
    fn resting_offset_shows_one_real_slide() {
        let segments = compose(-20, 20, 3, 20);
        assert_eq!(
            segments,
            vec![FilmSegment {
                cell: Cell::Slide { index: 0, clone: false },
                from_col: 0,
                width: 20,
            }]
        );
    }

    #[test]
    fn clone_slides_sit_at_both_ends() {
        let leading = compose(0, 20, 3, 20);
        assert_eq!(leading[0].cell, Cell::Slide { index: 2, clone: true });

        let trailing = compose(-80, 20, 3, 20);
        assert_eq!(trailing[0].cell, Cell::Slide { index: 0, clone: true });
    }

    #[test]
    fn over_drag_exposes_gaps() {
        let segments = compose(5, 20, 2, 20);
        assert_eq!(segments[0].cell, Cell::Gap);
        assert_eq!(segments[0].width, 5);
        assert_eq!(segments[1].cell, Cell::Slide { index: 1, clone: true });

        let past_end = compose(-75, 20, 2, 20);
        assert_eq!(past_end.last().map(|s| s.cell), Some(Cell::Gap));
        assert_eq!(past_end.iter().map(|s| s.width).sum::<usize>(), 20);
    }

    #[test]
    fn rows_are_exactly_the_viewport_wide() {
        let slides = slides(3);
        let segments = compose(-27, 20, 3, 20);
        let rows = filmstrip_rows(&slides, SliderDesign::Hero, &segments, 20, 6);
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| row_width(row) == 20));
        assert!(plain_text(&rows[0]).starts_with('─'));
    }

    #[test]
    fn cards_show_the_label_and_clones_are_dimmed() {
        let slides = slides(2);
        let rows = filmstrip_rows(&slides, SliderDesign::Hero, &compose(0, 16, 2, 16), 16, 5);
        assert!(plain_text(&rows[2]).contains("s1.png"));
        assert!(rows.iter().flatten().all(|piece| piece.tone == Tone::Clone));
    }

    #[test]
    fn multi_slide_cards_are_inset() {
        let slides = slides(1);
        let lines = card_lines(&slides[0], SliderDesign::MultiSlide, 16, 6);
        assert!(lines[0].0.starts_with("  ╭"));
        assert!(lines[1].0.contains("#1"));
        assert!(lines.iter().all(|(line, _)| char_len(line) == 16));
    }
}
