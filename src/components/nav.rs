//! Site header and navigation component

use maud::{Markup, html};

use super::icons::icon_tag;
use crate::content::{COMPANY, NAV_LINKS, SERVICES};
use crate::geometry::Region;
use crate::nav::{MOBILE_BREAKPOINT, MenuState, OutsideScope};

/// Renders the site header with menu drawer and solutions dropdown
///
/// Open classes and `aria-expanded` attributes reflect the given menu state.
/// The outside-pointer scope and the breakpoint are exposed as data
/// attributes so the browser binding applies the same transitions as the
/// controller that rendered the page.
///
/// # Arguments
///
/// * `state`: Menu state at render time
/// * `scope`: Outside-pointer scope of the controller driving this header
///
/// # Returns
///
/// Header markup containing the `menu-btn`, `nav-menu` and `nav-dropdown`
/// regions
pub fn site_header(state: MenuState, scope: OutsideScope) -> Markup {
    let scope_name = match scope {
        OutsideScope::HeaderRoot => "header",
        OutsideScope::Regions => "regions",
    };

    html! {
        header class=(Region::HeaderRoot.class_name())
            data-nav-scope=(scope_name)
            data-breakpoint=(MOBILE_BREAKPOINT) {
            div class="header-inner" {
                a class="brand" href="#top" data-action="navigate" {
                    img class="brand-logo" src=(COMPANY.logo) alt=(COMPANY.name) width="36" height="36";
                    span class="brand-name" { (COMPANY.name) }
                }
                button type="button"
                    class=(Region::MenuButton.class_name())
                    aria-label="Toggle navigation"
                    aria-controls="primary-nav"
                    aria-expanded=(aria_bool(state.menu_open))
                    data-action="toggle-menu" {
                    @if state.menu_open {
                        (icon_tag("ph-x"))
                    } @else {
                        (icon_tag("ph-list"))
                    }
                }
                nav id="primary-nav" class=(class_list(Region::NavMenu.class_name(), state.menu_open)) {
                    ul class="nav-links" {
                        li class=(class_list(Region::NavDropdown.class_name(), state.solutions_open)) {
                            a class="nav-dropdown-trigger"
                                href="#services"
                                aria-haspopup="true"
                                aria-expanded=(aria_bool(state.solutions_open))
                                data-action="toggle-submenu" {
                                "Solutions"
                                (icon_tag("ph-caret-down"))
                            }
                            ul class="dropdown-menu" {
                                @for service in SERVICES {
                                    li {
                                        a href=(format!("#{}", service.anchor())) data-action="navigate" {
                                            (icon_tag(service.icon))
                                            span { (service.title) }
                                        }
                                    }
                                }
                            }
                        }
                        @for link in NAV_LINKS {
                            li {
                                a href=(link.href) data-action="navigate" { (link.label) }
                            }
                        }
                    }
                    a class="btn btn-primary nav-cta" href="#contact" data-action="navigate" {
                        "Get a quote"
                    }
                }
            }
        }
    }
}

/// Joins a region class with the `open` modifier when the region is open.
pub fn class_list(base: &str, open: bool) -> String {
    if open {
        format!("{} open", base)
    } else {
        base.to_string()
    }
}

fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
