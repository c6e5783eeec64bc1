//! Site footer component

use maud::{Markup, html};

use crate::content::{COMPANY, NAV_LINKS};

/// Renders the footer with contact details and copyright line.
pub fn footer(year: i32) -> Markup {
    html! {
        footer class="site-footer" {
            div class="footer-inner" {
                div class="footer-brand" {
                    span class="brand-name" { (COMPANY.name) }
                    p class="footer-tagline" { (COMPANY.tagline) }
                }
                nav class="footer-links" {
                    @for link in NAV_LINKS {
                        a href=(link.href) { (link.label) }
                    }
                }
                div class="footer-contact" {
                    a href=(format!("mailto:{}", COMPANY.email)) { (COMPANY.email) }
                    a href=(format!("tel:{}", COMPANY.phone)) { (COMPANY.phone) }
                }
            }
            p class="copyright" {
                "\u{a9} " (year) " " (COMPANY.name) ". All rights reserved."
            }
        }
    }
}
