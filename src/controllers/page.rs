//! Home page controller

use tracing::debug;

use crate::document::Document;
use crate::event::UiEvent;
use crate::form::{ContactForm, FormField};
use crate::geometry::Hits;
use crate::nav::{MenuState, NavController, NavEvent, OutsideScope, PointerKind};
use crate::seo::SeoMetadata;

/// State owned by the self-contained home page.
///
/// Holds a page-local navigation instance judged against the `nav-menu` and
/// `nav-dropdown` regions, the contact form buffer, and the once-per-view
/// metadata injection.
#[derive(Debug, Clone)]
pub struct PageController {
    nav: NavController,
    form: ContactForm,
    touch_active: bool,
    current_year: i32,
    loaded: bool,
}

impl PageController {
    pub fn new(current_year: i32) -> Self {
        Self {
            nav: NavController::new(OutsideScope::Regions),
            form: ContactForm::default(),
            touch_active: false,
            current_year,
            loaded: false,
        }
    }

    pub fn state(&self) -> MenuState {
        self.nav.state()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Whether a touch event has been seen since mount.
    pub fn touch_active(&self) -> bool {
        self.touch_active
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Runs the page's load-time initialization.
    ///
    /// Only the first call does anything: it writes the home page metadata
    /// into the document head, or silently skips that when the head is
    /// unavailable. Later calls return immediately.
    pub fn on_load(&mut self, document: &mut Document) {
        if self.loaded {
            debug!("Page already loaded, skipping initialization");
            return;
        }
        self.loaded = true;

        SeoMetadata::home(document.url()).inject(document);
    }

    pub fn toggle_menu(&mut self) {
        self.nav.toggle_menu();
    }

    pub fn toggle_solutions(&mut self) {
        self.nav.toggle_submenu();
    }

    pub fn handle_pointer(&mut self, kind: PointerKind, hits: Hits) {
        if kind == PointerKind::Touch && !self.touch_active {
            self.touch_active = true;
        }
        self.nav.handle_pointer(kind, hits);
    }

    pub fn handle_escape(&mut self) {
        self.nav.handle_escape();
    }

    pub fn handle_resize(&mut self, width: u32) {
        self.nav.handle_resize(width);
    }

    /// Updates one contact form field from its input.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn submit_contact_form(&mut self, event: &mut UiEvent) {
        self.form.submit(event);
        debug!("Contact form submitted and cleared");
    }

    /// Routes a raw navigation event through the controller.
    pub fn dispatch(&mut self, event: NavEvent) -> MenuState {
        if let NavEvent::Pointer { kind, hits } = event {
            self.handle_pointer(kind, hits);
        } else {
            self.nav.apply(event);
        }
        self.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MetaAttr;
    use crate::geometry::Region;

    #[test]
    fn test_new_page_is_idle() {
        // Arrange & Act
        let page = PageController::new(2026);

        // Assert
        assert!(page.state().is_closed());
        assert!(page.form().is_empty());
        assert!(!page.touch_active());
        assert_eq!(page.current_year(), 2026);
    }

    #[test]
    fn test_on_load_runs_once() {
        // Arrange
        let mut page = PageController::new(2026);
        let mut doc = Document::new("https://aalekhansoftware.com/");

        // Act
        page.on_load(&mut doc);
        page.on_load(&mut doc);

        // Assert
        let head = doc.head().unwrap();
        assert_eq!(head.links().len(), 1, "one canonical link");
        assert_eq!(head.json_ld().len(), 2, "two structured data blocks");
        assert_eq!(head.meta_content(MetaAttr::Name, "robots"), Some("index, follow"));
    }

    #[test]
    fn test_on_load_headless_is_silent() {
        // Arrange
        let mut page = PageController::new(2026);
        let mut doc = Document::headless("https://aalekhansoftware.com/");

        // Act
        page.on_load(&mut doc);

        // Assert
        assert!(doc.head().is_none());
    }

    #[test]
    fn test_submit_resets_buffer() {
        // Arrange
        let mut page = PageController::new(2026);
        page.set_field(FormField::Name, "Jordan");
        page.set_field(FormField::Email, "jordan@example.com");
        page.set_field(FormField::ProjectType, "Web Application");
        page.set_field(FormField::Message, "Hello");
        let mut event = UiEvent::new();

        // Act
        page.submit_contact_form(&mut event);

        // Assert
        assert!(page.form().is_empty());
        assert!(event.default_prevented());
    }

    #[test]
    fn test_first_touch_marks_touch_active() {
        // Arrange
        let mut page = PageController::new(2026);

        // Act
        page.handle_pointer(PointerKind::Click, Hits::none());
        let after_click = page.touch_active();
        page.handle_pointer(PointerKind::Touch, Hits::none());

        // Assert
        assert!(!after_click);
        assert!(page.touch_active());
    }

    #[test]
    fn test_touch_outside_dropdown_closes_submenu() {
        // Arrange
        let mut page = PageController::new(2026);
        page.toggle_menu();
        page.toggle_solutions();

        // Act
        let state = page.dispatch(NavEvent::Pointer {
            kind: PointerKind::Touch,
            hits: Hits::inside(Region::NavMenu),
        });

        // Assert
        assert!(state.menu_open);
        assert!(!state.solutions_open);
        assert!(page.touch_active());
    }

    #[test]
    fn test_submenu_escape_scenario() {
        // Arrange
        let mut page = PageController::new(2026);

        // Act & Assert
        page.toggle_solutions();
        assert!(page.state().solutions_open);
        page.handle_escape();
        assert!(!page.state().solutions_open);
    }

    #[test]
    fn test_resize_crossing_breakpoint() {
        // Arrange
        let mut page = PageController::new(2026);
        page.toggle_menu();

        // Act & Assert
        page.handle_resize(500);
        assert!(page.state().menu_open, "shrinking keeps menu open");
        page.handle_resize(1200);
        assert!(!page.state().menu_open, "growing past breakpoint closes menu");
    }
}
