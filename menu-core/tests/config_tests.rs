use menu_core::TransitionMode;
use menu_core::config::{NavigatorConfig, ScreenConfig, SystemConfig};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct File {
    navigator: NavigatorConfig,
    screens: Vec<ScreenConfig>,
    system: SystemConfig,
}

#[test]
fn reads_navigator_and_screens() {
    let file: File = toml::from_str(
        r#"
[navigator]
start_screen = "main"

[[screens]]
tag = "main"
transition = "activate"

[[screens]]
tag = "credits"
transition = "toolkit_visibility"
end_screen = true
first_focus = "close"
"#,
    )
    .unwrap();

    assert_eq!(file.navigator.start_screen.as_deref(), Some("main"));
    assert!(file.navigator.back_with_cancel_action);

    assert_eq!(file.screens.len(), 2);
    assert_eq!(file.screens[0].transition, TransitionMode::Activate);
    assert!(file.screens[0].active);
    assert!(!file.screens[0].end_screen);
    assert_eq!(file.screens[1].transition, TransitionMode::ToolkitVisibility);
    assert!(file.screens[1].end_screen);
    assert_eq!(file.screens[1].first_focus.as_deref(), Some("close"));

    assert_eq!(file.system.log_level, "info");
}

#[test]
fn defaults_survive_serialization() {
    let text = toml::to_string(&NavigatorConfig::default()).unwrap();
    let back: NavigatorConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, NavigatorConfig::default());

    let screen = ScreenConfig::new("main", TransitionMode::Fade);
    let text = toml::to_string(&screen).unwrap();
    assert!(text.contains("transition = \"fade\""));
}
