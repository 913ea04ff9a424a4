pub mod config;
pub mod visual;
pub mod hook;
pub mod input;
pub mod screen;
pub mod discovery;
pub mod scene;
pub mod navigator;
pub mod renderer;

pub use navigator::{Navigator, ScreenKey, StartOutcome};
pub use screen::{Screen, ScreenBehaviour, ScreenBuilder};
pub use visual::TransitionMode;
pub use renderer::terminal::TerminalRenderer;
