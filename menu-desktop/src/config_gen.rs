use std::fs;
use std::path::Path;

use menu_core::TransitionMode;
use menu_core::config::{NavigatorConfig, ScreenConfig, SystemConfig};
use serde::Serialize;

#[derive(Serialize)]
struct FullConfig {
    system: SystemConfig,
    navigator: NavigatorConfig,
    screens: Vec<ScreenConfig>,
}

fn default_screens() -> Vec<ScreenConfig> {
    let mut main = ScreenConfig::new("main", TransitionMode::Activate);
    main.first_focus = Some("play".into());

    let mut settings = ScreenConfig::new("settings", TransitionMode::ToolkitVisibility);
    settings.first_focus = Some("volume".into());

    let audio = ScreenConfig::new("audio", TransitionMode::Fade);

    let mut credits = ScreenConfig::new("credits", TransitionMode::Activate);
    credits.end_screen = true;
    credits.first_focus = Some("close".into());

    vec![main, settings, audio, credits]
}

pub fn ensure_config_exists(path: &str) {
    if Path::new(path).exists() {
        return;
    }

    println!("Creating default configuration at '{}'...", path);

    let default_config = FullConfig {
        system: SystemConfig::default(),
        navigator: NavigatorConfig {
            start_screen: Some("main".into()),
            ..NavigatorConfig::default()
        },
        // demo tree: main -> settings -> audio, credits is a dead end
        screens: default_screens(),
    };

    let toml_str = match toml::to_string_pretty(&default_config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to serialize default config: {}", e);
            return;
        }
    };

    if let Err(e) = fs::write(path, toml_str) {
        eprintln!("Failed to write config file: {}", e);
    } else {
        println!("Config file created successfully.");
    }
}
