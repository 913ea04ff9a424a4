use menu_shared::config::{self, ConfigStore};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
struct Window {
    width: u32,
    title: String,
}

#[test]
fn reads_typed_section() {
    let store = ConfigStore::from_toml(
        r#"
[window]
width = 640
title = "Menus"
"#,
    );

    let window: Window = store.section("window");
    assert_eq!(window, Window { width: 640, title: "Menus".into() });
    assert!(store.has_section("window"));
}

#[test]
fn missing_section_is_default() {
    let store = ConfigStore::from_toml("");
    let window: Window = store.section("window");
    assert_eq!(window, Window::default());
    assert!(!store.has_section("window"));
}

#[test]
fn mismatched_section_is_default() {
    let store = ConfigStore::from_toml(
        r#"
[window]
width = "wide"
"#,
    );
    let window: Window = store.section("window");
    assert_eq!(window, Window::default());
}

#[test]
fn syntax_error_yields_empty_store() {
    let store = ConfigStore::from_toml("[window\nwidth = 1");
    assert!(!store.has_section("window"));
}

#[test]
fn missing_file_yields_defaults() {
    let store = ConfigStore::load("definitely/not/here/config.toml").unwrap();
    let window: Window = store.section("window");
    assert_eq!(window, Window::default());
}

#[test]
fn global_store_initializes_once() {
    config::init_from_str("[window]\nwidth = 320\n").unwrap();
    let window: Window = config::get("window");
    assert_eq!(window.width, 320);

    assert!(config::init_from_str("").is_err());
}
