//! Event script replay through a navigation controller
//!
//! A script is a JSON document with an optional hit map and a list of
//! events. Pointer events carry coordinates, which are resolved against the
//! hit map before reaching the controller:
//!
//! ```json
//! {
//!   "hit_map": { "header_root": { "x": 0, "y": 0, "width": 1280, "height": 80 } },
//!   "events": [
//!     { "type": "toggle_menu" },
//!     { "type": "pointer", "kind": "click", "x": 40, "y": 600 }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::controllers::header::HeaderController;
use crate::controllers::page::PageController;
use crate::geometry::{HitMap, Point};
use crate::nav::{MenuState, NavEvent, OutsideScope, PointerKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub hit_map: HitMap,
    pub events: Vec<ScriptEvent>,
}

/// Scripted input event, with pointer targets given as coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    ToggleMenu,
    ToggleSubmenu,
    Pointer { kind: PointerKind, x: f64, y: f64 },
    Escape,
    Resize { width: u32 },
    NavigateLink,
}

impl ScriptEvent {
    /// Converts to a controller event, hit testing pointer coordinates.
    pub fn resolve(&self, hit_map: &HitMap) -> NavEvent {
        match *self {
            ScriptEvent::ToggleMenu => NavEvent::ToggleMenu,
            ScriptEvent::ToggleSubmenu => NavEvent::ToggleSubmenu,
            ScriptEvent::Pointer { kind, x, y } => NavEvent::Pointer {
                kind,
                hits: hit_map.hit_test(Point::new(x, y)),
            },
            ScriptEvent::Escape => NavEvent::Escape,
            ScriptEvent::Resize { width } => NavEvent::Resize { width },
            ScriptEvent::NavigateLink => NavEvent::NavigateLink,
        }
    }
}

/// State after one replayed event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    pub step: usize,
    pub event: ScriptEvent,
    pub state: MenuState,
}

/// Reads and parses a replay script.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not a valid script.
pub fn load_script(path: &Path) -> Result<ReplayScript> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read replay script: {}", path.display()))?;

    serde_json::from_str(&text)
        .with_context(|| format!("Invalid replay script: {}", path.display()))
}

/// Feeds every scripted event through a fresh controller.
///
/// `HeaderRoot` drives the shared header controller, `Regions` the home
/// page controller.
pub fn replay(script: &ReplayScript, scope: OutsideScope) -> Vec<ReplayStep> {
    let mut header = HeaderController::new();
    let mut page = PageController::new(0);

    script
        .events
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let resolved = event.resolve(&script.hit_map);
            let state = match scope {
                OutsideScope::HeaderRoot => header.dispatch(resolved),
                OutsideScope::Regions => page.dispatch(resolved),
            };
            ReplayStep {
                step: i + 1,
                event: *event,
                state,
            }
        })
        .collect()
}
