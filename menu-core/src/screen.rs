//! A unit of menu content and its select/deselect state machine.

use log::{debug, warn};

use crate::config::ScreenConfig;
use crate::hook::Hook;
use crate::visual::{Content, Fader, Focusable, TransitionMode, VisualRoot, Visuals};

/// Extension points for screens that need more than the base behaviour.
///
/// Every method runs after the base state change and before the matching
/// hook fires.
pub trait ScreenBehaviour {
    fn on_initialize(&mut self) {}
    fn on_select(&mut self) {}
    fn on_deselect(&mut self) {}
    /// Called once when the owning navigator shuts down.
    fn destroy(&mut self) {}
}

pub struct Screen {
    tag: String,
    mode: TransitionMode,
    end_screen: bool,
    initialized: bool,
    selected: bool,
    active: bool,
    visuals: Visuals,
    first_focus: Option<Box<dyn Focusable>>,
    behaviour: Option<Box<dyn ScreenBehaviour>>,
    on_initialize: Hook,
    on_select: Hook,
    on_deselect: Hook,
}

impl Screen {
    pub fn builder(tag: impl Into<String>) -> ScreenBuilder {
        ScreenBuilder::new(tag)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn mode(&self) -> TransitionMode {
        self.mode
    }

    pub fn is_end_screen(&self) -> bool {
        self.end_screen
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the container holding this screen is active in the host.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_first_focus(&self) -> bool {
        self.first_focus.is_some()
    }

    pub fn on_initialize(&mut self) -> &mut Hook {
        &mut self.on_initialize
    }

    pub fn on_select(&mut self) -> &mut Hook {
        &mut self.on_select
    }

    pub fn on_deselect(&mut self) -> &mut Hook {
        &mut self.on_deselect
    }

    /// Marks the screen initialized and notifies observers.
    ///
    /// The navigator calls this once per screen at start. Calling it again
    /// fires the notification again.
    pub fn initialize(&mut self) {
        self.initialized = true;
        if let Some(behaviour) = self.behaviour.as_mut() {
            behaviour.on_initialize();
        }
        self.on_initialize.notify();

        if self.first_focus.is_none() {
            warn!("The screen '{}' has not defined a first focus target.", self.tag);
        }
    }

    /// Shows the screen.
    ///
    /// Not a no-op when already selected: visuals are re-applied, observers
    /// are notified and focus moves again.
    pub fn select(&mut self) {
        if !self.initialized {
            self.initialize();
        }

        self.selected = true;
        self.visuals.show(self.mode);
        if let Some(behaviour) = self.behaviour.as_mut() {
            behaviour.on_select();
        }
        self.on_select.notify();

        // last, so the target is already visible and focusable
        if let Some(target) = self.first_focus.as_mut() {
            target.focus();
        }
    }

    pub fn deselect(&mut self) {
        self.selected = false;
        self.visuals.hide(self.mode);
        if let Some(behaviour) = self.behaviour.as_mut() {
            behaviour.on_deselect();
        }
        self.on_deselect.notify();
    }

    pub fn destroy(&mut self) {
        if let Some(behaviour) = self.behaviour.as_mut() {
            behaviour.destroy();
        }
    }

    fn awake(&mut self) {
        if self.selected {
            return;
        }
        self.visuals.hide(self.mode);
    }
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen")
            .field("tag", &self.tag)
            .field("mode", &self.mode)
            .field("end_screen", &self.end_screen)
            .field("initialized", &self.initialized)
            .field("selected", &self.selected)
            .field("active", &self.active)
            .field("visuals", &self.visuals)
            .finish_non_exhaustive()
    }
}

pub struct ScreenBuilder {
    tag: String,
    mode: TransitionMode,
    end_screen: bool,
    selected: bool,
    active: bool,
    visuals: Visuals,
    first_focus: Option<Box<dyn Focusable>>,
    behaviour: Option<Box<dyn ScreenBehaviour>>,
}

impl ScreenBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            mode: TransitionMode::None,
            end_screen: false,
            selected: false,
            active: true,
            visuals: Visuals::new(),
            first_focus: None,
            behaviour: None,
        }
    }

    /// Starts from a configuration entry. Collaborators still have to be attached.
    pub fn from_config(config: &ScreenConfig) -> Self {
        Self::new(config.tag.clone())
            .transition(config.transition)
            .end_screen(config.end_screen)
            .selected(config.selected)
            .active(config.active)
    }

    pub fn transition(mut self, mode: TransitionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn end_screen(mut self, end_screen: bool) -> Self {
        self.end_screen = end_screen;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn content(mut self, content: impl Content + 'static) -> Self {
        self.visuals.set_content(Box::new(content));
        self
    }

    pub fn fader(mut self, fader: impl Fader + 'static) -> Self {
        self.visuals.set_fader(Box::new(fader));
        self
    }

    pub fn root(mut self, root: impl VisualRoot + 'static) -> Self {
        self.visuals.set_root(Box::new(root));
        self
    }

    pub fn first_focus(mut self, target: impl Focusable + 'static) -> Self {
        self.first_focus = Some(Box::new(target));
        self
    }

    pub fn behaviour(mut self, behaviour: impl ScreenBehaviour + 'static) -> Self {
        self.behaviour = Some(Box::new(behaviour));
        self
    }

    pub fn build(self) -> Screen {
        let mode = self.validated_mode();

        let mut screen = Screen {
            tag: self.tag,
            mode,
            end_screen: self.end_screen,
            initialized: false,
            selected: self.selected,
            active: self.active,
            visuals: self.visuals,
            first_focus: self.first_focus,
            behaviour: self.behaviour,
            on_initialize: Hook::new(),
            on_select: Hook::new(),
            on_deselect: Hook::new(),
        };
        screen.awake();
        screen
    }

    fn validated_mode(&self) -> TransitionMode {
        if self.visuals.has_root() {
            if self.mode != TransitionMode::ToolkitVisibility {
                debug!("Screen '{}' has a visual root, using toolkit visibility.", self.tag);
            }
            return TransitionMode::ToolkitVisibility;
        }

        match self.mode {
            TransitionMode::ToolkitVisibility => {
                warn!("Screen '{}' uses toolkit visibility without a visual root, falling back to none.", self.tag);
                TransitionMode::None
            }
            TransitionMode::Activate if !self.visuals.has_content() => {
                warn!("Screen '{}' uses activation without content to activate.", self.tag);
                TransitionMode::Activate
            }
            mode => mode,
        }
    }
}
