/// Phase of the cancel action as reported by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelPhase {
    /// The press just began. The only phase that navigates.
    Started,
    /// The action is still held.
    Performed,
    /// The action was released or aborted.
    Canceled,
}

/// Input layer that exposes a cancel/back action.
pub trait CancelSource {
    /// Starts delivering cancel events to the navigator.
    /// Returns `false` when the source has no cancel action to offer.
    fn subscribe_cancel(&mut self) -> bool;

    fn unsubscribe_cancel(&mut self);
}

/// Turns a polled button state into cancel phases, for hosts that sample
/// input once per frame instead of receiving callbacks.
#[derive(Debug, Default, Clone, Copy)]
pub struct PressEdge {
    held: bool,
}

impl PressEdge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, down: bool) -> Option<CancelPhase> {
        let phase = match (self.held, down) {
            (false, true) => Some(CancelPhase::Started),
            (true, true) => Some(CancelPhase::Performed),
            (true, false) => Some(CancelPhase::Canceled),
            (false, false) => None,
        };
        self.held = down;
        phase
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}
