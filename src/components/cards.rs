//! Content card components

use maud::{Markup, html};

use super::icons::icon_box;
use crate::content::{CaseStudy, Faq, Service, Testimonial};

/// Renders a service card anchored for the solutions dropdown.
pub fn service_card(service: &Service) -> Markup {
    html! {
        article class="card service-card" id=(service.anchor()) {
            (icon_box(service.icon))
            h3 class="card-title" { (service.title) }
            p class="card-text" { (service.description) }
        }
    }
}

/// Renders a case study card
///
/// The headline metric leads; impact and result follow as supporting
/// lines.
pub fn case_study_card(study: &CaseStudy) -> Markup {
    html! {
        article class="card case-study-card" {
            span class="case-metric" { (study.metric) }
            h3 class="card-title" { (study.name) }
            p class="case-impact" { (study.impact) }
            p class="case-result" { (study.result) }
        }
    }
}

pub fn testimonial_card(testimonial: &Testimonial) -> Markup {
    html! {
        figure class="card testimonial-card" {
            blockquote class="testimonial-quote" {
                p { (testimonial.quote) }
            }
            figcaption class="testimonial-author" {
                span class="author-name" { (testimonial.name) }
                span class="author-role" { (testimonial.role) }
            }
        }
    }
}

/// Renders an FAQ entry as a native disclosure widget.
pub fn faq_item(faq: &Faq) -> Markup {
    html! {
        details class="faq-item" {
            summary class="faq-question" { (faq.question) }
            p class="faq-answer" { (faq.answer) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CASE_STUDIES, FAQS, SERVICES, TESTIMONIALS};

    #[test]
    fn test_service_card_anchor_and_icon() {
        // Arrange
        let service = &SERVICES[1];

        // Act
        let html = service_card(service).into_string();

        // Assert
        assert!(html.contains(r#"id="full-stack-development""#));
        assert!(html.contains("ph ph-code"));
        assert!(html.contains("Full Stack Development"));
    }

    #[test]
    fn test_case_study_card_escapes_text() {
        // Arrange
        let study = &CASE_STUDIES[1];

        // Act
        let html = case_study_card(study).into_string();

        // Assert
        assert!(html.contains("Global CDN, &lt;200ms TTFB across 6 regions"));
        assert!(html.contains("28% conversion lift"));
    }

    #[test]
    fn test_testimonial_card() {
        // Arrange & Act
        let html = testimonial_card(&TESTIMONIALS[2]).into_string();

        // Assert
        assert!(html.contains("Casey Morgan"));
        assert!(html.contains("CTO, Helix Health"));
        assert!(html.contains("<blockquote"));
    }

    #[test]
    fn test_faq_item_disclosure() {
        // Arrange & Act
        let html = faq_item(&FAQS[0]).into_string();

        // Assert
        assert!(html.contains("<details class=\"faq-item\">"));
        assert!(html.contains("<summary class=\"faq-question\">How do you engage with new projects?</summary>"));
    }
}
