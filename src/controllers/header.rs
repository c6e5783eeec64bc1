//! Shared site header controller

use crate::event::UiEvent;
use crate::geometry::Hits;
use crate::nav::{MenuState, NavController, NavEvent, OutsideScope, PointerKind};

/// Menu state of the shared header.
///
/// Pointer events are judged against the header's root region: anything
/// landing outside the header closes both menus.
#[derive(Debug, Clone)]
pub struct HeaderController {
    nav: NavController,
}

impl Default for HeaderController {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderController {
    pub fn new() -> Self {
        Self {
            nav: NavController::new(OutsideScope::HeaderRoot),
        }
    }

    pub fn state(&self) -> MenuState {
        self.nav.state()
    }

    pub fn toggle_menu(&mut self) {
        self.nav.toggle_menu();
    }

    /// Toggles the solutions dropdown from its trigger link.
    ///
    /// The trigger is an anchor, so the event is consumed to keep the
    /// browser from following it and document listeners from closing the
    /// dropdown again.
    pub fn toggle_solutions(&mut self, event: &mut UiEvent) {
        event.prevent_default();
        event.stop_propagation();
        self.nav.toggle_submenu();
    }

    /// Closes both menus after a navigation link is followed.
    pub fn on_nav_click(&mut self) {
        self.nav.navigate_link();
    }

    pub fn handle_pointer(&mut self, kind: PointerKind, hits: Hits) {
        self.nav.handle_pointer(kind, hits);
    }

    pub fn handle_escape(&mut self) {
        self.nav.handle_escape();
    }

    pub fn handle_resize(&mut self, width: u32) {
        self.nav.handle_resize(width);
    }

    /// Routes a raw event through the controller.
    ///
    /// `ToggleSubmenu` goes through `toggle_solutions` so the trigger's
    /// event is consumed the same way as in the browser.
    pub fn dispatch(&mut self, event: NavEvent) -> MenuState {
        match event {
            NavEvent::ToggleSubmenu => self.toggle_solutions(&mut UiEvent::new()),
            other => {
                self.nav.apply(other);
            }
        }
        self.state()
    }
}
