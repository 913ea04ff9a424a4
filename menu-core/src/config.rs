use serde::{Deserialize, Serialize};

use crate::visual::TransitionMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub log_path:      String,
    pub log_level:     String,
    /// Log only to file while the terminal driver owns stdout.
    pub quiet_console: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Tag of the screen selected on start. Falls back to the first discovered screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_screen: Option<String>,
    /// Go back when the input layer reports its cancel action.
    pub back_with_cancel_action: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub tag:         String,
    pub transition:  TransitionMode,
    pub end_screen:  bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_focus: Option<String>,
    /// Already visible when built, so the initial hide is skipped.
    pub selected:    bool,
    /// Whether the container holding the screen is active.
    pub active:      bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_path:      "logs/".into(),
            log_level:     "info".into(),
            quiet_console: true,
        }
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            start_screen: None,
            back_with_cancel_action: true,
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            tag:         String::new(),
            transition:  TransitionMode::None,
            end_screen:  false,
            first_focus: None,
            selected:    false,
            active:      true,
        }
    }
}

impl ScreenConfig {
    pub fn new(tag: impl Into<String>, transition: TransitionMode) -> Self {
        Self {
            tag: tag.into(),
            transition,
            ..Self::default()
        }
    }
}
