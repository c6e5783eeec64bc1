//! Region geometry and pointer hit testing
//!
//! Outside-click detection is expressed as containment of a pointer location
//! in the bounding boxes of the interactive regions, independent of any DOM
//! or widget tree. The browser binding measures the live elements and feeds
//! their boxes in; tests and the replay tool construct them directly.

use serde::{Deserialize, Serialize};

/// Pointer location in logical pixels, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a rendered region.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true when the point lies inside the box.
    ///
    /// Left and top edges are inclusive, right and bottom edges exclusive,
    /// so two adjacent boxes never both claim a point on their shared edge.
    /// Boxes with non-positive extent contain nothing.
    pub fn contains(&self, point: Point) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 {
            return false;
        }

        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Interactive regions of the navigation header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    /// The whole header component.
    HeaderRoot,
    /// The primary navigation drawer (`.nav-menu`).
    NavMenu,
    /// The "solutions" dropdown (`.nav-dropdown`).
    NavDropdown,
    /// The hamburger toggle control (`.menu-btn`).
    MenuButton,
}

impl Region {
    /// CSS class carried by the rendered element for this region.
    pub fn class_name(self) -> &'static str {
        match self {
            Region::HeaderRoot => "site-header",
            Region::NavMenu => "nav-menu",
            Region::NavDropdown => "nav-dropdown",
            Region::MenuButton => "menu-btn",
        }
    }
}

/// Set of regions containing a pointer location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hits {
    pub header_root: bool,
    pub nav_menu: bool,
    pub nav_dropdown: bool,
    pub menu_button: bool,
}

impl Hits {
    /// Hit set for a target outside every region.
    pub fn none() -> Self {
        Self::default()
    }

    /// Hit set for a target inside the given region only.
    ///
    /// Nested regions imply their ancestors: anything inside the menu, the
    /// dropdown or the toggle button is also inside the header root.
    pub fn inside(region: Region) -> Self {
        let mut hits = Self {
            header_root: true,
            ..Self::default()
        };
        match region {
            Region::HeaderRoot => {}
            Region::NavMenu => hits.nav_menu = true,
            Region::NavDropdown => {
                hits.nav_menu = true;
                hits.nav_dropdown = true;
            }
            Region::MenuButton => hits.menu_button = true,
        }
        hits
    }

    pub fn contains(&self, region: Region) -> bool {
        match region {
            Region::HeaderRoot => self.header_root,
            Region::NavMenu => self.nav_menu,
            Region::NavDropdown => self.nav_dropdown,
            Region::MenuButton => self.menu_button,
        }
    }
}

/// Measured boxes of the interactive regions.
///
/// A region without a box (not rendered, or collapsed) never contains a
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HitMap {
    #[serde(default)]
    pub header_root: Option<Rect>,
    #[serde(default)]
    pub nav_menu: Option<Rect>,
    #[serde(default)]
    pub nav_dropdown: Option<Rect>,
    #[serde(default)]
    pub menu_button: Option<Rect>,
}

impl HitMap {
    pub fn with(mut self, region: Region, rect: Rect) -> Self {
        *self.slot(region) = Some(rect);
        self
    }

    pub fn rect(&self, region: Region) -> Option<Rect> {
        match region {
            Region::HeaderRoot => self.header_root,
            Region::NavMenu => self.nav_menu,
            Region::NavDropdown => self.nav_dropdown,
            Region::MenuButton => self.menu_button,
        }
    }

    fn slot(&mut self, region: Region) -> &mut Option<Rect> {
        match region {
            Region::HeaderRoot => &mut self.header_root,
            Region::NavMenu => &mut self.nav_menu,
            Region::NavDropdown => &mut self.nav_dropdown,
            Region::MenuButton => &mut self.menu_button,
        }
    }

    /// Computes which regions contain the point.
    ///
    /// Containment follows the element tree rather than raw boxes: the
    /// dropdown sits inside the menu, and the menu and toggle button sit
    /// inside the header, so a dropdown overflowing the header bar still
    /// counts as inside the header.
    pub fn hit_test(&self, point: Point) -> Hits {
        let hit = |region: Region| self.rect(region).is_some_and(|r: Rect| r.contains(point));

        let nav_dropdown = hit(Region::NavDropdown);
        let nav_menu = nav_dropdown || hit(Region::NavMenu);
        let menu_button = hit(Region::MenuButton);

        Hits {
            header_root: nav_menu || menu_button || hit(Region::HeaderRoot),
            nav_menu,
            nav_dropdown,
            menu_button,
        }
    }
}
