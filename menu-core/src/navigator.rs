//! Stack-based router over the registered screens.
//!
//! The navigator owns every screen for the lifetime of a session. It drives
//! their lifecycle one way: screens never call back into it.

use log::{debug, error, info, warn};
use rustc_hash::FxHashMap;

use crate::config::NavigatorConfig;
use crate::discovery::ScreenDiscovery;
use crate::hook::{HandlerId, InterceptChain};
use crate::input::{CancelPhase, CancelSource};
use crate::scene::SceneHost;
use crate::screen::Screen;

/// Handle to a registered screen. Only valid for the navigator that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenKey(usize);

impl ScreenKey {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started(ScreenKey),
    /// Nothing was discovered; the navigator stays inert.
    Disabled,
    AlreadyStarted,
    /// `shutdown` already ran; a finished session cannot be restarted.
    ShutDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Running,
    Disabled,
    ShutDown,
}

pub struct Navigator {
    config: NavigatorConfig,
    screens: Vec<Screen>,
    tags: FxHashMap<String, ScreenKey>,
    current: Option<ScreenKey>,
    /// Top of the stack is the last element.
    history: Vec<ScreenKey>,
    interceptors: InterceptChain,
    scene_host: Option<Box<dyn SceneHost>>,
    cancel_bound: bool,
    state: State,
}

impl Navigator {
    pub fn new(config: NavigatorConfig) -> Self {
        Self {
            config,
            screens: Vec::new(),
            tags: FxHashMap::default(),
            current: None,
            history: Vec::new(),
            interceptors: InterceptChain::new(),
            scene_host: None,
            cancel_bound: false,
            state: State::Idle,
        }
    }

    pub fn with_scene_host(mut self, host: impl SceneHost + 'static) -> Self {
        self.scene_host = Some(Box::new(host));
        self
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Discovers and initializes every screen, then selects the start screen.
    pub fn start(&mut self, discovery: &mut impl ScreenDiscovery) -> StartOutcome {
        match self.state {
            State::Idle => {}
            State::ShutDown => {
                warn!("Navigator was shut down, ignoring start request.");
                return StartOutcome::ShutDown;
            }
            State::Running | State::Disabled => {
                warn!("Navigator already started, ignoring start request.");
                return StartOutcome::AlreadyStarted;
            }
        }

        let screens = discovery.discover();
        if screens.is_empty() {
            error!("No screens were discovered, disabling the navigator!");
            self.state = State::Disabled;
            return StartOutcome::Disabled;
        }

        self.register(screens);

        // all screens, not just the start one

        for screen in &mut self.screens {
            screen.initialize();
        }

        let start = self.resolve_start();
        if !self.screens[start.0].is_active() {
            warn!("The start screen '{}' is not active!", self.screens[start.0].tag());
        }

        self.state = State::Running;
        info!("Navigator started with {} screens.", self.screens.len());
        self.set_current_screen(start);
        StartOutcome::Started(start)
    }

    fn register(&mut self, screens: Vec<Screen>) {
        for (index, screen) in screens.iter().enumerate() {
            let key = ScreenKey(index);
            if self.tags.contains_key(screen.tag()) {
                warn!("Duplicate screen tag '{}', lookups keep the first one.", screen.tag());
                continue;
            }
            self.tags.insert(screen.tag().to_string(), key);
        }
        self.screens = screens;
    }

    fn resolve_start(&self) -> ScreenKey {
        let fallback = ScreenKey(0);
        match self.config.start_screen.as_deref() {
            Some(tag) => match self.tags.get(tag) {
                Some(&key) => key,
                None => {
                    error!(
                        "Start screen '{}' is not registered, using '{}'.",
                        tag,
                        self.screens[fallback.0].tag()
                    );
                    fallback
                }
            },
            None => {
                error!("No start screen is defined, using '{}'.", self.screens[fallback.0].tag());
                fallback
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn is_disabled(&self) -> bool {
        self.state == State::Disabled
    }

    /// Navigates forward, recording the screen being left.
    ///
    /// Does nothing while the current screen is an end screen.
    pub fn set_current_screen(&mut self, target: ScreenKey) {
        if !self.accepts(target) {
            return;
        }

        if let Some(current) = self.current {
            if self.screens[current.0].is_end_screen() {
                debug!("'{}' is an end screen, forward navigation ignored.", self.screens[current.0].tag());
                return;
            }
            self.history.push(current);
            self.screens[current.0].deselect();
        }

        self.current = Some(target);
        self.screens[target.0].select();
        debug!("Navigated to '{}' (history: {}).", self.screens[target.0].tag(), self.history.len());
    }

    /// Replaces the current screen without touching history.
    ///
    /// End screens are not checked; this is how they are left.
    pub fn switch_to(&mut self, target: ScreenKey) {
        if !self.accepts(target) {
            return;
        }

        if let Some(current) = self.current {
            self.screens[current.0].deselect();
        }

        self.current = Some(target);
        self.screens[target.0].select();
        debug!("Switched to '{}'.", self.screens[target.0].tag());
    }

    /// Returns to the most recent history entry. No-op on empty history.
    pub fn back(&mut self) {
        if !self.is_running() {
            return;
        }
        let Some(previous) = self.history.pop() else {
            return;
        };

        // the screen being left is not pushed back
        let last = self.current.replace(previous);
        if let Some(last) = last {
            self.screens[last.0].deselect();
        }
        self.screens[previous.0].select();
        debug!("Back to '{}' (history: {}).", self.screens[previous.0].tag(), self.history.len());
    }

    pub fn back_all(&mut self) {
        if !self.is_running() {
            return;
        }
        while !self.history.is_empty() {
            self.back();
        }
    }

    /// Back request that honours interceptors. Returns `false` when an
    /// interceptor claimed it or the navigator is not running.
    pub fn request_back(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.interceptors.intercepted() {
            debug!("Back request intercepted.");
            return false;
        }
        self.back();
        true
    }

    /// Adds an interceptor polled before every requested back action.
    pub fn intercept_back(&mut self, interceptor: impl FnMut() -> bool + 'static) -> HandlerId {
        self.interceptors.push(interceptor)
    }

    pub fn remove_back_interceptor(&mut self, id: HandlerId) -> bool {
        self.interceptors.remove(id)
    }

    pub fn interceptors_mut(&mut self) -> &mut InterceptChain {
        &mut self.interceptors
    }

    /// Subscribes to the cancel action, if enabled in the config.
    pub fn enable(&mut self, source: &mut dyn CancelSource) {
        if !self.config.back_with_cancel_action || self.cancel_bound {
            return;
        }
        if source.subscribe_cancel() {
            self.cancel_bound = true;
        } else {
            debug!("Input source has no cancel action, back binding skipped.");
        }
    }

    pub fn disable(&mut self, source: &mut dyn CancelSource) {
        if !self.config.back_with_cancel_action || !self.cancel_bound {
            return;
        }
        source.unsubscribe_cancel();
        self.cancel_bound = false;
    }

    pub fn is_cancel_bound(&self) -> bool {
        self.cancel_bound
    }

    /// Cancel action callback. Only the start of a press navigates, so a held
    /// button does not walk back through the whole history.
    pub fn on_cancel(&mut self, phase: CancelPhase) {
        if !self.cancel_bound {
            debug!("Cancel event without binding ignored.");
            return;
        }
        if phase != CancelPhase::Started {
            return;
        }
        self.request_back();
    }

    /// Looks a screen up by tag, logging an error on a miss.
    pub fn screen_by_tag(&self, tag: &str) -> Option<ScreenKey> {
        let key = self.key_of(tag);
        if key.is_none() {
            error!("No screen tagged '{}' found!", tag);
        }
        key
    }

    /// Silent lookup.
    pub fn key_of(&self, tag: &str) -> Option<ScreenKey> {
        self.tags.get(tag).copied()
    }

    pub fn is_previous_screen(&self, key: ScreenKey) -> bool {
        self.history.contains(&key)
    }

    pub fn current(&self) -> Option<ScreenKey> {
        self.current
    }

    pub fn current_screen(&self) -> Option<&Screen> {
        self.current.map(|key| &self.screens[key.0])
    }

    /// History, most recent first.
    pub fn history(&self) -> impl Iterator<Item = ScreenKey> + '_ {
        self.history.iter().rev().copied()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn screen(&self, key: ScreenKey) -> Option<&Screen> {
        self.screens.get(key.0)
    }

    pub fn screen_mut(&mut self, key: ScreenKey) -> Option<&mut Screen> {
        self.screens.get_mut(key.0)
    }

    pub fn load_scene(&mut self, name: &str) {
        match self.scene_host.as_mut() {
            Some(host) => host.load_scene(name),
            None => warn!("No scene host, cannot load scene '{}'.", name),
        }
    }

    pub fn load_scene_index(&mut self, index: usize) {
        match self.scene_host.as_mut() {
            Some(host) => host.load_scene_index(index),
            None => warn!("No scene host, cannot load scene #{}.", index),
        }
    }

    pub fn reload_current_scene(&mut self) {
        match self.scene_host.as_mut() {
            Some(host) => host.reload_current_scene(),
            None => warn!("No scene host, cannot reload the current scene."),
        }
    }

    pub fn quit(&mut self) {
        match self.scene_host.as_mut() {
            Some(host) => host.quit(),
            None => warn!("No scene host, cannot quit."),
        }
    }

    /// Destroys every registered screen in discovery order. Runs once.
    pub fn shutdown(&mut self) {
        if self.state == State::ShutDown {
            return;
        }
        for screen in &mut self.screens {
            screen.destroy();
        }
        self.state = State::ShutDown;
        self.cancel_bound = false;
        info!("Navigator shut down.");
    }

    fn accepts(&self, target: ScreenKey) -> bool {
        if !self.is_running() {
            debug!("Navigator is not running, navigation ignored.");
            return false;
        }
        if target.0 >= self.screens.len() {
            error!("Screen key {} is not registered.", target.0);
            return false;
        }
        true
    }
}

impl Drop for Navigator {
    fn drop(&mut self) {
        self.shutdown();
    }
}
