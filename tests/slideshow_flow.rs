//! End-to-end flows through the public API on the virtual clock.

use zslideshow::app::Direction;
use zslideshow::ui::filmstrip::{compose, Cell, FilmSegment};
use zslideshow::ui::{render_to_string, KeyHints};
use zslideshow::{initialize, Config, Event, Notification, Slideshow, SlideshowError};

fn config(slides: &[&str]) -> Config {
    Config {
        slides: slides.iter().map(|s| (*s).to_string()).collect(),
        autostart: false,
        ..Config::default()
    }
}

fn show(slides: &[&str], width: i32) -> Slideshow {
    initialize(&config(slides), width).unwrap()
}

#[test]
fn advancing_past_the_last_slide_wraps_to_the_first() {
    let mut show = show(&["a.png", "b.png", "c.png"], 30);

    show.advance().unwrap();
    show.advance_clock(2_000).unwrap();
    show.advance().unwrap();
    show.advance_clock(4_000).unwrap();
    assert_eq!(show.state().index(), 2);

    show.advance().unwrap();
    assert_eq!(show.state().index(), 3);
    assert_eq!(show.state().active_link(), 0);
    assert_eq!(show.stage().active_link(), 0);

    let (_, notifications) = show.advance_clock(6_000).unwrap();
    assert_eq!(notifications, vec![Notification::HasMoved]);
    assert_eq!(show.state().index(), 0);
    assert_eq!(show.state().offset(), -30);
    assert_eq!(show.stage().offset_at(show.now()), -30);
    assert!(!show.stage().is_animating(show.now()));
}

#[test]
fn retreating_from_the_first_slide_wraps_to_the_last() {
    let mut show = show(&["a.png", "b.png", "c.png"], 30);

    let notifications = show.retreat().unwrap();
    assert_eq!(notifications, vec![Notification::Moving, Notification::MovingPrev]);
    assert_eq!(show.state().index(), -1);
    assert_eq!(show.state().active_link(), 2);

    show.advance_clock(2_000).unwrap();
    assert_eq!(show.state().index(), 2);
    assert_eq!(show.state().offset(), -90);
    assert!(show.state().shift_allowed());
}

#[test]
fn autoplay_ticks_once_per_interval() {
    let mut show = initialize(
        &Config {
            autostart: true,
            ..config(&["a.png", "b.png", "c.png"])
        },
        30,
    )
    .unwrap();
    assert!(show.state().running());
    assert_eq!(show.next_wakeup(), Some(6_000));

    let (_, early) = show.advance_clock(5_999).unwrap();
    assert!(early.is_empty());

    let (changed, tick) = show.advance_clock(6_000).unwrap();
    assert!(changed);
    assert_eq!(tick, vec![Notification::Moving, Notification::MovingNext]);
    assert_eq!(show.state().index(), 1);

    let (_, settle) = show.advance_clock(8_000).unwrap();
    assert_eq!(settle, vec![Notification::HasMoved]);

    show.advance_clock(12_000).unwrap();
    assert_eq!(show.state().index(), 2);
}

#[test]
fn paused_autoplay_skips_ticks_but_keeps_the_timer() {
    let mut show = initialize(
        &Config {
            autostart: true,
            ..config(&["a.png", "b.png"])
        },
        30,
    )
    .unwrap();

    assert_eq!(show.pause().unwrap(), vec![Notification::Paused]);
    let (_, skipped) = show.advance_clock(12_000).unwrap();
    assert!(skipped.is_empty());
    assert_eq!(show.state().index(), 0);
    assert!(show.autoplay_installed());

    assert_eq!(show.unpause().unwrap(), vec![Notification::Unpaused]);
    let (_, resumed) = show.advance_clock(18_000).unwrap();
    assert_eq!(resumed, vec![Notification::Moving, Notification::MovingNext]);
    assert_eq!(show.state().index(), 1);
}

#[test]
fn autoplay_uses_duration_when_configured() {
    let show = initialize(
        &Config {
            autostart: true,
            duration_ms: 500,
            interval_from_duration: true,
            ..config(&["a.png", "b.png"])
        },
        30,
    )
    .unwrap();
    assert_eq!(show.next_wakeup(), Some(500));
}

#[test]
fn a_newer_resize_restarts_the_debounce() {
    let mut show = initialize(
        &Config {
            autostart: true,
            ..config(&["a.png", "b.png", "c.png"])
        },
        30,
    )
    .unwrap();

    show.advance_clock(1_000).unwrap();
    assert_eq!(show.resize(40).unwrap(), vec![Notification::Paused]);
    assert_eq!(show.state().offset(), -40);

    show.advance_clock(3_000).unwrap();
    assert!(show.resize(50).unwrap().is_empty());
    assert_eq!(show.state().offset(), -50);
    assert_eq!(show.stage().slide_width(), 50);
    assert_eq!(show.stage().container_width(), 250);

    // The autoplay tick at 6000 lands while paused; the first resume is gone.
    let (_, waiting) = show.advance_clock(7_999).unwrap();
    assert!(waiting.is_empty());
    assert!(show.state().paused());
    assert!(show.resume_pending());
    assert_eq!(show.state().index(), 0);

    let (_, resumed) = show.advance_clock(8_000).unwrap();
    assert_eq!(resumed, vec![Notification::Unpaused]);
    assert!(!show.state().paused());
    assert!(!show.resume_pending());

    let (_, tick) = show.advance_clock(12_000).unwrap();
    assert_eq!(tick, vec![Notification::Moving, Notification::MovingNext]);
}

#[test]
fn non_positive_resize_is_rejected_without_side_effects() {
    let mut show = show(&["a.png", "b.png"], 30);
    assert!(matches!(
        show.resize(0),
        Err(SlideshowError::InvalidArgument(_))
    ));
    assert!(!show.state().paused());
    assert!(!show.resume_pending());
    assert_eq!(show.stage().slide_width(), 30);
}

#[test]
fn clicks_report_after_the_shift() {
    let mut show = show(&["a.png", "b.png", "c.png"], 30);

    let (_, clicked) = show.dispatch(&Event::NextClicked).unwrap();
    assert_eq!(
        clicked,
        vec![
            Notification::Moving,
            Notification::MovingNext,
            Notification::ClickNext
        ]
    );

    let (_, rejected) = show.dispatch(&Event::NextClicked).unwrap();
    assert_eq!(rejected, vec![Notification::ClickNext]);
    assert_eq!(show.state().index(), 1);

    show.advance_clock(2_000).unwrap();
    let (_, back) = show.dispatch(&Event::PrevClicked).unwrap();
    assert_eq!(back.last(), Some(&Notification::ClickPrev));
    assert_eq!(show.state().index(), 0);
}

#[test]
fn drag_past_the_threshold_commits_a_shift() {
    // Width 40 gives a default threshold of 10 columns.
    let mut show = show(&["a.png", "b.png", "c.png"], 40);

    show.dispatch(&Event::DragStart { x: 20 }).unwrap();
    show.dispatch(&Event::DragMove { x: 5 }).unwrap();
    assert_eq!(show.stage().offset_at(show.now()), -55);

    let (_, notifications) = show.dispatch(&Event::DragEnd).unwrap();
    assert_eq!(notifications, vec![Notification::Moving, Notification::MovingNext]);
    assert_eq!(show.state().index(), 1);
    assert_eq!(show.state().offset(), -80);
}

fn autoplay_show(slides: &[&str], width: i32) -> Slideshow {
    initialize(
        &Config {
            autostart: true,
            pause_on_hover: false,
            ..config(slides)
        },
        width,
    )
    .unwrap()
}

#[test]
fn autoplay_tick_during_a_drag_is_skipped() {
    // Width 100 gives a default threshold of 25 columns.
    let mut show = autoplay_show(&["a.png", "b.png", "c.png", "d.png"], 100);

    show.dispatch(&Event::DragStart { x: 50 }).unwrap();
    show.dispatch(&Event::DragMove { x: 40 }).unwrap();
    let (_, tick) = show.advance_clock(6_000).unwrap();
    assert!(tick.is_empty());
    assert_eq!(show.state().index(), 0);

    show.dispatch(&Event::DragEnd).unwrap();
    show.advance_clock(8_000).unwrap();

    let state = show.state();
    assert_eq!(state.index(), 0);
    assert_eq!(state.offset(), state.track().offset_of(state.index()));
    assert_eq!(show.stage().offset_at(show.now()), -100);
}

#[test]
fn committed_drag_after_a_skipped_tick_lands_on_the_grid() {
    let mut show = autoplay_show(&["a.png", "b.png", "c.png", "d.png"], 100);

    show.dispatch(&Event::DragStart { x: 50 }).unwrap();
    show.dispatch(&Event::DragMove { x: 10 }).unwrap();
    show.advance_clock(6_000).unwrap();
    let (_, committed) = show.dispatch(&Event::DragEnd).unwrap();
    assert_eq!(committed, vec![Notification::Moving, Notification::MovingNext]);

    show.advance_clock(8_000).unwrap();
    let state = show.state();
    assert_eq!(state.index(), 1);
    assert_eq!(state.offset(), -200);
    assert_eq!(show.stage().offset_at(show.now()), -200);
}

#[test]
fn keys_during_a_drag_only_report_the_click() {
    let mut show = show(&["a.png", "b.png", "c.png"], 40);

    show.dispatch(&Event::DragStart { x: 20 }).unwrap();
    let (_, clicked) = show.dispatch(&Event::NextClicked).unwrap();
    assert_eq!(clicked, vec![Notification::ClickNext]);
    assert_eq!(show.state().index(), 0);
}

#[test]
fn resize_during_a_drag_keeps_the_current_slide() {
    let mut show = show(&["a.png", "b.png", "c.png"], 100);

    show.dispatch(&Event::DragStart { x: 100 }).unwrap();
    show.dispatch(&Event::DragMove { x: 40 }).unwrap();
    show.resize(100).unwrap();

    assert!(show.state().drag().is_none());
    assert_eq!(show.state().index(), 0);
    assert_eq!(show.state().offset(), -100);
    assert_eq!(show.stage().offset_at(show.now()), -100);
}

#[test]
fn right_to_left_advances_wrap_from_the_first_slide() {
    let mut show = initialize(
        &Config {
            direction: Some(1),
            ..config(&["a.png", "b.png", "c.png"])
        },
        30,
    )
    .unwrap();

    let mut now = 0;
    for expected in [1, 0, 2] {
        show.advance().unwrap();
        now += 2_000;
        show.advance_clock(now).unwrap();
        assert_eq!(show.state().index(), expected);
    }
    assert_eq!(show.state().offset(), -90);
}

#[test]
fn retreating_a_full_lap_returns_to_the_start() {
    let mut show = show(&["a.png", "b.png", "c.png", "d.png"], 30);

    let mut now = 0;
    for _ in 0..4 {
        show.retreat().unwrap();
        now += 2_000;
        show.advance_clock(now).unwrap();
    }
    assert_eq!(show.state().index(), 0);
    assert_eq!(show.state().offset(), -30);
    assert_eq!(show.stage().offset_at(show.now()), -30);
}

#[test]
fn short_drag_snaps_back() {
    let mut show = show(&["a.png", "b.png", "c.png"], 40);

    show.dispatch(&Event::DragStart { x: 20 }).unwrap();
    show.dispatch(&Event::DragMove { x: 12 }).unwrap();
    let (_, notifications) = show.dispatch(&Event::DragEnd).unwrap();

    assert!(notifications.is_empty());
    assert_eq!(show.state().index(), 0);
    assert_eq!(show.state().offset(), -40);
    assert!(show.state().drag().is_none());
}

#[test]
fn jump_links_follow_the_index() {
    let mut show = show(&["a.png", "b.png", "c.png"], 30);

    let notifications = show.jump_to(2).unwrap();
    assert_eq!(notifications, vec![Notification::Moving, Notification::MovingNext]);
    assert_eq!(show.stage().active_link(), 2);
    assert_eq!(show.state().offset(), -90);

    assert!(matches!(
        show.jump_to(5),
        Err(SlideshowError::InvalidArgument(_))
    ));
}

#[test]
fn hovering_pauses_only_running_autoplay() {
    let mut idle = show(&["a.png", "b.png"], 30);
    let (_, none) = idle.dispatch(&Event::HoverEnter).unwrap();
    assert!(none.is_empty());

    let mut running = initialize(
        &Config {
            autostart: true,
            ..config(&["a.png", "b.png"])
        },
        30,
    )
    .unwrap();
    let (_, paused) = running.dispatch(&Event::HoverEnter).unwrap();
    assert_eq!(paused, vec![Notification::Paused]);
    let (_, unpaused) = running.dispatch(&Event::HoverLeave).unwrap();
    assert_eq!(unpaused, vec![Notification::Unpaused]);
}

#[test]
fn right_to_left_locales_start_on_the_last_slide() {
    let show = initialize(
        &Config {
            lang: Some("ar".to_string()),
            ..config(&["a.png", "b.png", "c.png"])
        },
        30,
    )
    .unwrap();
    assert_eq!(show.state().direction(), Direction::Backward);
    assert_eq!(show.state().index(), 2);
    assert_eq!(show.state().offset(), -90);
}

#[test]
fn destroy_stops_everything() {
    let mut show = initialize(
        &Config {
            autostart: true,
            ..config(&["a.png", "b.png"])
        },
        30,
    )
    .unwrap();

    assert_eq!(show.destroy().unwrap(), vec![Notification::Stopped]);
    assert!(show.is_torn_down());
    assert!(!show.autoplay_installed());
    assert_eq!(show.next_wakeup(), None);

    let (_, later) = show.advance_clock(60_000).unwrap();
    assert!(later.is_empty());
    assert_eq!(show.state().index(), 0);
}

#[test]
fn filmstrip_shows_clones_at_the_track_ends() {
    let leading = compose(0, 10, 3, 10);
    assert_eq!(
        leading,
        vec![FilmSegment {
            cell: Cell::Slide { index: 2, clone: true },
            from_col: 0,
            width: 10,
        }]
    );

    let trailing = compose(-40, 10, 3, 10);
    assert_eq!(trailing[0].cell, Cell::Slide { index: 0, clone: true });

    let over_dragged = compose(5, 10, 3, 10);
    assert_eq!(over_dragged[0].cell, Cell::Gap);
    assert_eq!(over_dragged[0].width, 5);
    assert_eq!(over_dragged[1].cell, Cell::Slide { index: 2, clone: true });
    assert_eq!(over_dragged[1].width, 5);
}

#[test]
fn rendered_frame_shows_the_current_slide() {
    let mut show = show(&["first.png", "second.png"], 30);
    let frame = render_to_string(&show, 12, 30, KeyHints::default());
    assert!(frame.contains("first.png"));

    show.advance().unwrap();
    show.advance_clock(2_000).unwrap();
    let frame = render_to_string(&show, 12, 30, KeyHints::default());
    assert!(frame.contains("second.png"));
}
