//! Log-backed stand-ins for the visual and scene collaborators.

use log::info;
use menu_core::config::ScreenConfig;
use menu_core::discovery::ScreenDiscovery;
use menu_core::scene::SceneHost;
use menu_core::visual::{Content, Display, Fader, Focusable, VisualRoot};
use menu_core::{Screen, ScreenBehaviour, ScreenBuilder, TransitionMode};

struct ConsoleVisual(String);

impl Content for ConsoleVisual {
    fn set_active(&mut self, active: bool) {
        info!("[{}] active = {}", self.0, active);
    }
}

impl Fader for ConsoleVisual {
    fn fade_in(&mut self) {
        info!("[{}] fade in", self.0);
    }

    fn fade_out(&mut self) {
        info!("[{}] fade out", self.0);
    }
}

impl VisualRoot for ConsoleVisual {
    fn set_display(&mut self, display: Display) {
        info!("[{}] display = {:?}", self.0, display);
    }
}

struct ConsoleFocus {
    screen: String,
    target: String,
}

impl Focusable for ConsoleFocus {
    fn focus(&mut self) {
        info!("[{}] focus -> {}", self.screen, self.target);
    }
}

struct ConsoleBehaviour(String);

impl ScreenBehaviour for ConsoleBehaviour {
    fn destroy(&mut self) {
        info!("[{}] destroyed", self.0);
    }
}

/// Builds screens from the `[[screens]]` config entries.
pub struct ConfigDiscovery {
    configs: Vec<ScreenConfig>,
}

impl ConfigDiscovery {
    pub fn new(configs: Vec<ScreenConfig>) -> Self {
        Self { configs }
    }

    fn build(config: &ScreenConfig) -> Screen {
        let tag = config.tag.clone();
        let mut builder = ScreenBuilder::from_config(config)
            .behaviour(ConsoleBehaviour(tag.clone()));

        builder = match config.transition {
            TransitionMode::None => builder,
            TransitionMode::Activate => builder.content(ConsoleVisual(tag.clone())),
            TransitionMode::Fade => builder.fader(ConsoleVisual(tag.clone())),
            TransitionMode::ToolkitVisibility => builder.root(ConsoleVisual(tag.clone())),
        };

        if let Some(target) = &config.first_focus {
            builder = builder.first_focus(ConsoleFocus {
                screen: tag.clone(),
                target: target.clone(),
            });
        }

        let mut screen = builder.build();
        let t = tag.clone();
        screen.on_select().subscribe(move || info!("[{}] selected", t));
        screen.on_deselect().subscribe(move || info!("[{}] deselected", tag));
        screen
    }
}

impl ScreenDiscovery for ConfigDiscovery {
    fn discover(&mut self) -> Vec<Screen> {
        self.configs.iter().map(Self::build).collect()
    }
}

pub struct ConsoleHost;

impl SceneHost for ConsoleHost {
    fn load_scene(&mut self, name: &str) {
        info!("Scene '{}' requested, only the menu scene exists here.", name);
    }

    fn load_scene_index(&mut self, index: usize) {
        info!("Scene #{} requested, only the menu scene exists here.", index);
    }

    fn reload_current_scene(&mut self) {
        info!("Reloading the menu scene.");
    }

    fn quit(&mut self) {
        info!("Quit requested.");
    }
}
