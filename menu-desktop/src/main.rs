mod config_gen;
mod console;
mod setup;

use menu_core::config::{NavigatorConfig, ScreenConfig};
use menu_core::renderer::terminal::SessionEnd;
use menu_core::{Navigator, StartOutcome, TerminalRenderer};

use crate::console::{ConfigDiscovery, ConsoleHost};

fn main() {
    setup::init();
    log::info!(">>> Menu Desktop Launcher Started <<<");

    loop {
        let nav_cfg: NavigatorConfig = menu_shared::config::get("navigator");
        let screen_cfgs: Vec<ScreenConfig> = menu_shared::config::get("screens");
        log::debug!("Building {} screens from config", screen_cfgs.len());

        let mut nav = Navigator::new(nav_cfg).with_scene_host(ConsoleHost);
        if nav.start(&mut ConfigDiscovery::new(screen_cfgs)) == StartOutcome::Disabled {
            log::error!("No screens configured. Add [[screens]] entries to config.toml.");
            return;
        }

        // a fresh navigator per scene, the old one is destroyed at the end of the loop body
        let mut renderer = TerminalRenderer::new();
        match renderer.run_event_loop(&mut nav) {
            Ok(SessionEnd::Reload) => {
                log::info!("Reloading menu scene");
                continue;
            }
            Ok(end) => {
                log::info!("Session ended: {:?}", end);
                break;
            }
            Err(e) => {
                log::error!("Terminal I/O failed: {}", e);
                break;
            }
        }
    }
}
