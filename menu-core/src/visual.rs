//! Visual collaborators driven by a screen's transition mode.
//!
//! The navigator never draws anything itself. Each mode maps onto one of the
//! traits below and the host supplies the implementation.

use serde::{Deserialize, Serialize};

/// How a screen becomes visible or invisible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionMode {
    /// Visibility is left alone.
    #[default]
    None,
    /// The screen's content is activated and deactivated.
    Activate,
    /// An animation collaborator fades the screen in and out.
    Fade,
    /// The visual root's display style is toggled.
    ToolkitVisibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Flex,
    None,
}

/// Content that can be switched on and off as a whole (`TransitionMode::Activate`).
pub trait Content {
    fn set_active(&mut self, active: bool);
}

/// Fade animation collaborator (`TransitionMode::Fade`).
pub trait Fader {
    fn fade_in(&mut self);
    fn fade_out(&mut self);
}

/// Layout root of a toolkit document (`TransitionMode::ToolkitVisibility`).
pub trait VisualRoot {
    fn set_display(&mut self, display: Display);
}

/// An element that can take input focus when its screen is selected.
pub trait Focusable {
    fn focus(&mut self);
}

#[derive(Default)]
pub struct Visuals {
    content: Option<Box<dyn Content>>,
    fader:   Option<Box<dyn Fader>>,
    root:    Option<Box<dyn VisualRoot>>,
}

impl Visuals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_content(&mut self, content: Box<dyn Content>) {
        self.content = Some(content);
    }

    pub fn set_fader(&mut self, fader: Box<dyn Fader>) {
        self.fader = Some(fader);
    }

    pub fn set_root(&mut self, root: Box<dyn VisualRoot>) {
        self.root = Some(root);
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    pub fn has_fader(&self) -> bool {
        self.fader.is_some()
    }

    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }

    pub(crate) fn show(&mut self, mode: TransitionMode) {
        self.apply(mode, true);
    }

    pub(crate) fn hide(&mut self, mode: TransitionMode) {
        self.apply(mode, false);
    }

    fn apply(&mut self, mode: TransitionMode, shown: bool) {
        match mode {
            TransitionMode::None => {}
            TransitionMode::Activate => {
                if let Some(content) = self.content.as_mut() {
                    content.set_active(shown);
                }
            }
            TransitionMode::Fade => {
                if let Some(fader) = self.fader.as_mut() {
                    if shown { fader.fade_in() } else { fader.fade_out() }
                }
            }
            TransitionMode::ToolkitVisibility => {
                if let Some(root) = self.root.as_mut() {
                    root.set_display(if shown { Display::Flex } else { Display::None });
                }
            }
        }
    }
}

impl std::fmt::Debug for Visuals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Visuals")
            .field("content", &self.has_content())
            .field("fader", &self.has_fader())
            .field("root", &self.has_root())
            .finish()
    }
}
