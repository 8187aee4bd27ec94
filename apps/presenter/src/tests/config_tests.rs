use std::{collections::HashMap, io::Write, path::PathBuf};

use super::{load_settings, Settings};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_match_the_stock_window() {
    let settings = Settings::default();
    assert_eq!(settings.deck_path, None);
    assert_eq!(settings.start_slide, 0);
    assert_eq!(settings.transition_ms, 500);
    assert_eq!(settings.window_size(), [1280.0, 800.0]);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    settings
        .apply_file(
            r#"
deck_path = "decks/review.toml"
start_slide = 3
window_width = 1600.0
transition_ms = 250
"#,
        )
        .expect("apply file");

    assert_eq!(settings.deck_path, Some(PathBuf::from("decks/review.toml")));
    assert_eq!(settings.start_slide, 3);
    assert_eq!(settings.window_width, 1600.0);
    assert_eq!(settings.window_height, 800.0);
    assert_eq!(settings.transition_ms, 250);
}

#[test]
fn unknown_file_keys_are_rejected() {
    let mut settings = Settings::default();
    assert!(settings.apply_file("slide_count = 9").is_err());
    assert_eq!(settings, Settings::default());
}

#[test]
fn env_overrides_file_values() {
    let mut settings = Settings::default();
    settings
        .apply_file("start_slide = 2\nlog_filter = \"warn\"")
        .expect("apply file");
    settings.apply_env(env_from(&[
        ("PRESENTER__START_SLIDE", "5"),
        ("PRESENTER__LOG_FILTER", "presenter=debug"),
        ("PRESENTER__DECK_PATH", "/tmp/deck.toml"),
    ]));

    assert_eq!(settings.start_slide, 5);
    assert_eq!(settings.log_filter, "presenter=debug");
    assert_eq!(settings.deck_path, Some(PathBuf::from("/tmp/deck.toml")));
}

#[test]
fn malformed_env_numbers_keep_previous_values() {
    let mut settings = Settings::default();
    settings.apply_env(env_from(&[
        ("PRESENTER__START_SLIDE", "seven"),
        ("PRESENTER__TRANSITION_MS", "-1"),
        ("PRESENTER__LOG_FILTER", "   "),
    ]));

    assert_eq!(settings, Settings::default());
}

#[test]
fn window_size_has_a_floor() {
    let settings = Settings {
        window_width: 100.0,
        window_height: 100.0,
        ..Settings::default()
    };
    assert_eq!(settings.window_size(), [640.0, 480.0]);
}

#[test]
fn explicit_config_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "transition_ms = 0").expect("write config");

    let settings = load_settings(Some(file.path())).expect("load settings");
    assert_eq!(settings.transition_ms, 0);
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_settings(Some(&dir.path().join("nope.toml"))).expect_err("missing config");
    assert!(err.to_string().contains("nope.toml"), "{err}");
}
