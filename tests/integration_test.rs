//! Integration tests for the navigation controllers.
//!
//! Drives both controllers through the public API with pointer locations
//! resolved by hit testing, the way the browser binding feeds them.

mod common;

use aalekhan::{
    HeaderController, MOBILE_BREAKPOINT, NavEvent, PageController, Point, PointerKind, UiEvent,
};

fn click_at(x: f64, y: f64) -> NavEvent {
    NavEvent::Pointer {
        kind: PointerKind::Click,
        hits: common::desktop_hit_map().hit_test(Point::new(x, y)),
    }
}

fn tap_at(x: f64, y: f64) -> NavEvent {
    NavEvent::Pointer {
        kind: PointerKind::Touch,
        hits: common::desktop_hit_map().hit_test(Point::new(x, y)),
    }
}

/// Tests menu state follows toggle parity for long sequences.
#[test]
fn test_menu_open_matches_toggle_parity() {
    // Arrange
    let mut header = HeaderController::new();
    let mut page = PageController::new(2026);

    // Act & Assert
    for count in 1..=50 {
        header.toggle_menu();
        page.toggle_menu();
        assert_eq!(header.state().menu_open, count % 2 == 1);
        assert_eq!(page.state().menu_open, count % 2 == 1);
    }
}

/// Tests the documented header scenario end to end.
#[test]
fn test_header_inside_click_then_outside_click() {
    // Arrange
    let mut header = HeaderController::new();

    // Act & Assert
    assert!(header.dispatch(NavEvent::ToggleMenu).menu_open);
    assert!(
        header.dispatch(click_at(500.0, 40.0)).menu_open,
        "click inside menu region keeps menu open"
    );
    assert!(
        !header.dispatch(click_at(500.0, 900.0)).menu_open,
        "click outside header root closes menu"
    );
}

/// Tests a click on the dropdown, which overflows the header bar, counts as
/// inside the header.
#[test]
fn test_header_dropdown_overflow_is_inside() {
    // Arrange
    let mut header = HeaderController::new();
    header.toggle_solutions(&mut UiEvent::new());

    // Act
    let state = header.dispatch(click_at(600.0, 300.0));

    // Assert
    assert!(state.solutions_open);
}

/// Tests the page-local variant closes regions independently.
#[test]
fn test_page_regions_close_independently() {
    // Arrange
    let mut page = PageController::new(2026);
    page.toggle_menu();
    page.toggle_solutions();

    // Act: tap the menu drawer outside the dropdown.
    let state = page.dispatch(tap_at(1000.0, 40.0));

    // Assert
    assert!(state.menu_open);
    assert!(!state.solutions_open);
    assert!(page.touch_active());
}

/// Tests the toggle button does not close the page menu it controls.
#[test]
fn test_page_menu_button_click_keeps_menu() {
    // Arrange
    let mut page = PageController::new(2026);

    // Act: the button's own handler runs before the document listener.
    page.toggle_menu();
    let state = page.dispatch(click_at(1210.0, 30.0));

    // Assert
    assert!(state.menu_open);
}

/// Tests every outside pointer closes any open combination.
#[test]
fn test_outside_pointer_always_closes() {
    let openings: [&[NavEvent]; 3] = [
        &[NavEvent::ToggleMenu],
        &[NavEvent::ToggleSubmenu],
        &[NavEvent::ToggleMenu, NavEvent::ToggleSubmenu],
    ];

    for opening in openings {
        for outside in [click_at(10.0, 700.0), tap_at(1270.0, 1000.0)] {
            let mut header = HeaderController::new();
            let mut page = PageController::new(2026);
            for event in opening {
                header.dispatch(*event);
                page.dispatch(*event);
            }

            assert!(header.dispatch(outside).is_closed());
            assert!(page.dispatch(outside).is_closed());
        }
    }
}

/// Tests the documented submenu scenario.
#[test]
fn test_submenu_then_escape() {
    // Arrange
    let mut page = PageController::new(2026);

    // Act & Assert
    assert!(page.dispatch(NavEvent::ToggleSubmenu).solutions_open);
    assert!(!page.dispatch(NavEvent::Escape).solutions_open);
}

/// Tests resize behavior on both sides of the breakpoint.
#[test]
fn test_resize_breakpoint_direction() {
    // Arrange
    let mut page = PageController::new(2026);
    page.toggle_menu();
    page.toggle_solutions();

    // Act & Assert
    let down = page.dispatch(NavEvent::Resize { width: 375 });
    assert!(down.menu_open && down.solutions_open, "shrinking keeps state");

    let at = page.dispatch(NavEvent::Resize {
        width: MOBILE_BREAKPOINT,
    });
    assert!(at.menu_open, "exactly at breakpoint keeps state");

    let up = page.dispatch(NavEvent::Resize {
        width: MOBILE_BREAKPOINT + 256,
    });
    assert!(up.is_closed(), "growing past breakpoint closes");
}
