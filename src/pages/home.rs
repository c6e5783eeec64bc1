//! Home page generation

use maud::{Markup, html};

use crate::components::cards::{case_study_card, faq_item, service_card, testimonial_card};
use crate::components::contact::contact_form;
use crate::components::footer::footer;
use crate::components::layout::page_wrapper;
use crate::components::nav::site_header;
use crate::content::{CASE_STUDIES, COMPANY, FAQS, SERVICES, TESTIMONIALS};
use crate::controllers::page::PageController;
use crate::document::Document;
use crate::nav::OutsideScope;

pub const STYLESHEET: &str = "assets/site.css";
pub const NAV_SCRIPT: &str = "assets/nav.js";

/// Generates the home page
///
/// Renders the header from the controller's menu state, every content
/// section, the contact form bound to the controller's buffer, and the
/// footer. Head metadata comes from `document`; run the controller's
/// `on_load` against it first.
///
/// # Arguments
///
/// * `page`: Home page controller
/// * `document`: Host document, normally already initialized
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(page: &PageController, document: &Document) -> Markup {
    page_wrapper(
        document,
        &[STYLESHEET],
        &[NAV_SCRIPT],
        html! {
            (site_header(page.state(), OutsideScope::Regions))
            main id="top" {
                (hero())
                (section(
                    "services",
                    "What we build",
                    "Software development services",
                    html! {
                        div class="card-grid" {
                            @for service in SERVICES {
                                (service_card(service))
                            }
                        }
                    },
                ))
                (section(
                    "case-studies",
                    "Proven results",
                    "Case studies",
                    html! {
                        div class="card-grid card-grid-3" {
                            @for study in CASE_STUDIES {
                                (case_study_card(study))
                            }
                        }
                    },
                ))
                (section(
                    "testimonials",
                    "Client voices",
                    "What our partners say",
                    html! {
                        div class="card-grid card-grid-3" {
                            @for testimonial in TESTIMONIALS {
                                (testimonial_card(testimonial))
                            }
                        }
                    },
                ))
                (section(
                    "faq",
                    "Questions",
                    "Frequently asked questions",
                    html! {
                        div class="faq-list" {
                            @for faq in FAQS {
                                (faq_item(faq))
                            }
                        }
                    },
                ))
                (section(
                    "contact",
                    "Start a project",
                    "Tell us what you are building",
                    contact_form(page.form()),
                ))
            }
            (footer(page.current_year()))
        },
    )
}

fn hero() -> Markup {
    html! {
        section class="hero" {
            p class="eyebrow" { (COMPANY.tagline) }
            h1 class="hero-title" { "Custom software development for ambitious teams" }
            p class="hero-lead" {
                (COMPANY.name)
                " designs, builds and runs web applications, SaaS platforms and ERP/CRM systems, "
                "from discovery sprint to production."
            }
            div class="hero-actions" {
                a class="btn btn-primary" href="#contact" { "Get a quote" }
                a class="btn btn-ghost" href="#services" { "Explore services" }
            }
        }
    }
}

fn section(id: &str, eyebrow: &str, title: &str, body: Markup) -> Markup {
    html! {
        section class="section" id=(id) {
            header class="section-header" {
                p class="eyebrow" { (eyebrow) }
                h2 class="section-title" { (title) }
            }
            (body)
        }
    }
}
