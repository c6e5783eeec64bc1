//! Navigation menu state machine
//!
//! One controller type serves both the shared site header and the page-local
//! navigation. The two differ only in how a pointer event is judged to be
//! "outside": the header closes everything when the pointer lands outside
//! its root, while the page-local variant checks the menu drawer and the
//! solutions dropdown separately.
//!
//! Every transition is a total function over the two flags.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::Hits;

/// Viewport width in logical pixels above which the desktop layout applies.
///
/// Resizing into the desktop layout closes any open menu.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Open/closed flags of the navigation drawer and the solutions submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuState {
    pub menu_open: bool,
    pub solutions_open: bool,
}

impl MenuState {
    pub fn is_closed(&self) -> bool {
        !self.menu_open && !self.solutions_open
    }

    fn close_all(&mut self) {
        self.menu_open = false;
        self.solutions_open = false;
    }
}

/// How a pointer event is classified as outside the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutsideScope {
    /// Containment against the header's root region.
    HeaderRoot,
    /// Containment against the `nav-menu` and `nav-dropdown` regions, with
    /// the `menu-btn` toggle exempt from closing the menu.
    Regions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Click,
    Touch,
}

/// Input events understood by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavEvent {
    ToggleMenu,
    ToggleSubmenu,
    /// Pointer-down or tap anywhere in the document, with the regions that
    /// contain the target.
    Pointer { kind: PointerKind, hits: Hits },
    Escape,
    Resize { width: u32 },
    /// A navigation link inside the header was followed.
    NavigateLink,
}

/// Menu and submenu controller for one mounted navigation instance.
#[derive(Debug, Clone)]
pub struct NavController {
    scope: OutsideScope,
    state: MenuState,
}

impl NavController {
    /// Creates a controller with both menus closed.
    pub fn new(scope: OutsideScope) -> Self {
        Self {
            scope,
            state: MenuState::default(),
        }
    }

    pub fn scope(&self) -> OutsideScope {
        self.scope
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
        debug!(menu_open = self.state.menu_open, "Toggled menu");
    }

    pub fn toggle_submenu(&mut self) {
        self.state.solutions_open = !self.state.solutions_open;
        debug!(solutions_open = self.state.solutions_open, "Toggled submenu");
    }

    /// Closes menus the pointer landed outside of.
    pub fn handle_pointer(&mut self, kind: PointerKind, hits: Hits) {
        if self.state.is_closed() {
            return;
        }

        match self.scope {
            OutsideScope::HeaderRoot => {
                if !hits.header_root {
                    self.close("pointer outside header");
                }
            }
            OutsideScope::Regions => {
                if self.state.solutions_open && !hits.nav_dropdown {
                    self.state.solutions_open = false;
                    debug!(?kind, "Closed submenu on outside pointer");
                }
                if self.state.menu_open && !hits.nav_menu && !hits.menu_button {
                    self.state.menu_open = false;
                    debug!(?kind, "Closed menu on outside pointer");
                }
            }
        }
    }

    pub fn handle_escape(&mut self) {
        self.close("escape");
    }

    /// Closes both menus when the viewport lands in the desktop layout.
    ///
    /// Widths at or below the breakpoint leave the state untouched.
    pub fn handle_resize(&mut self, width: u32) {
        if width > MOBILE_BREAKPOINT {
            self.close("resize above breakpoint");
        }
    }

    pub fn navigate_link(&mut self) {
        self.close("navigation");
    }

    /// Applies an event and returns the resulting state.
    pub fn apply(&mut self, event: NavEvent) -> MenuState {
        match event {
            NavEvent::ToggleMenu => self.toggle_menu(),
            NavEvent::ToggleSubmenu => self.toggle_submenu(),
            NavEvent::Pointer { kind, hits } => self.handle_pointer(kind, hits),
            NavEvent::Escape => self.handle_escape(),
            NavEvent::Resize { width } => self.handle_resize(width),
            NavEvent::NavigateLink => self.navigate_link(),
        }
        self.state
    }

    fn close(&mut self, reason: &str) {
        if !self.state.is_closed() {
            debug!(reason, "Closing menus");
        }
        self.state.close_all();
    }
}
