//! Dispatch flags carried by a UI event

/// Browser-style event flags a handler can set while consuming an event.
///
/// Handlers that own an event (form submission, the header's submenu
/// toggle) cancel the default action and stop it from reaching
/// document-level listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiEvent {
    default_prevented: bool,
    propagation_stopped: bool,
}

impl UiEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether the browser default action (navigation, form post) is cancelled.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether listeners further up the tree will see the event.
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
