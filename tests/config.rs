//! Configuration parsing and initialization failures.

use std::collections::BTreeMap;
use std::fs;

use zslideshow::{initialize, Config, SliderDesign, SlideshowError};

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn zellij_keys_override_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zslideshow.toml");
    fs::write(
        &path,
        r#"
slider_design = "multiSlide"
slides = ["x.png", "y.png"]
delay = 3000
autostart = false
"#,
    )
    .unwrap();

    let config = Config::from_zellij(&map(&[
        ("config_file", path.to_str().unwrap()),
        ("delay", "4000"),
    ]))
    .unwrap();

    assert_eq!(config.slider_design, "multiSlide");
    assert_eq!(config.slides, vec!["x.png", "y.png"]);
    assert_eq!(config.delay_ms, 4000);
    assert!(!config.autostart);

    let show = initialize(&config, 40).unwrap();
    assert_eq!(show.design(), SliderDesign::MultiSlide);
    assert!(!show.state().running());
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let result = Config::from_zellij(&map(&[("config_file", missing.to_str().unwrap())]));
    assert!(matches!(result, Err(SlideshowError::Io(_))));
}

#[test]
fn unknown_keys_in_the_config_file_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "slides = [\"a.png\"]\nspeed = 3\n").unwrap();

    assert!(matches!(
        Config::from_file(&path),
        Err(SlideshowError::Configuration(_))
    ));
}

#[test]
fn malformed_data_is_a_configuration_error() {
    let result = Config::from_zellij(&map(&[("data", "[{\"imagePath\": ")]));
    assert!(matches!(result, Err(SlideshowError::Configuration(_))));
}

#[test]
fn unparsable_values_name_the_key() {
    let Err(SlideshowError::Configuration(message)) =
        Config::from_zellij(&map(&[("delay", "soon")]))
    else {
        panic!("expected a configuration error");
    };
    assert!(message.contains("delay"));
}

#[test]
fn data_units_fill_up_the_slides() {
    let config = Config::from_zellij(&map(&[
        ("slides", "cover.png"),
        (
            "data",
            r#"[{"imagePath": "a.jpg", "title": "Hello"}, {"imagePath": "b.jpg"}]"#,
        ),
        ("autostart", "false"),
    ]))
    .unwrap();

    let show = initialize(&config, 30).unwrap();
    let slides = show.slides();
    assert_eq!(slides.len(), 3);
    assert_eq!(slides[0].image_path, "cover.png");
    assert_eq!(slides[1].title.as_deref(), Some("Hello"));
    assert_eq!(slides[2].order, 2);

    let without_fill = Config {
        fill_up: false,
        ..config
    };
    assert_eq!(initialize(&without_fill, 30).unwrap().slides().len(), 1);
}

#[test]
fn unknown_design_fails_initialization() {
    let config = Config {
        slider_design: "carousel3d".to_string(),
        slides: vec!["a.png".to_string()],
        ..Config::default()
    };
    assert!(matches!(
        initialize(&config, 30),
        Err(SlideshowError::Configuration(_))
    ));
}

#[test]
fn zero_slides_fail_initialization() {
    assert!(matches!(
        initialize(&Config::default(), 30),
        Err(SlideshowError::Configuration(_))
    ));
}

#[test]
fn zero_width_fails_initialization() {
    let config = Config {
        slides: vec!["a.png".to_string()],
        ..Config::default()
    };
    assert!(matches!(
        initialize(&config, 0),
        Err(SlideshowError::InvalidArgument(_))
    ));
}

#[test]
fn invalid_direction_is_rejected() {
    let config = Config {
        slides: vec!["a.png".to_string()],
        direction: Some(0),
        ..Config::default()
    };
    assert!(matches!(
        initialize(&config, 30),
        Err(SlideshowError::Configuration(_))
    ));
}

#[test]
fn drag_threshold_defaults_to_a_quarter_slide() {
    let config = Config::default();
    assert_eq!(config.resolved_drag_threshold(80), 20);
    assert_eq!(config.resolved_drag_threshold(2), 1);

    let fixed = Config {
        drag_threshold: Some(7),
        ..Config::default()
    };
    assert_eq!(fixed.resolved_drag_threshold(80), 7);
}

#[test]
fn unknown_theme_falls_back_to_the_default() {
    let config = Config::from_zellij(&map(&[("theme", "solarized")])).unwrap();
    assert_eq!(config.load_theme(), zslideshow::Theme::default());

    let latte = Config::from_zellij(&map(&[("theme", "catppuccin-latte")])).unwrap();
    assert_ne!(latte.load_theme(), zslideshow::Theme::default());
}
