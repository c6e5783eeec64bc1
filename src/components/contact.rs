//! Contact form component

use maud::{Markup, html};

use crate::content::{COMPANY, PROJECT_TYPES};
use crate::form::{ContactForm, FormField};

/// Renders the contact form bound to the given buffer
///
/// Each control is named after its field and prefilled with the buffer's
/// current value. The form has no action: submission stays on the page.
///
/// # Arguments
///
/// * `form`: Current contact form buffer
///
/// # Returns
///
/// Contact section markup
pub fn contact_form(form: &ContactForm) -> Markup {
    html! {
        form class="contact-form" id="contact-form" novalidate data-action="submit-contact" {
            div class="form-row" {
                label for="contact-name" { "Name" }
                input id="contact-name" type="text" name=(FormField::Name.input_name())
                    value=(form.get(FormField::Name)) autocomplete="name";
            }
            div class="form-row" {
                label for="contact-email" { "Email" }
                input id="contact-email" type="email" name=(FormField::Email.input_name())
                    value=(form.get(FormField::Email)) autocomplete="email";
            }
            div class="form-row" {
                label for="contact-project" { "Project type" }
                select id="contact-project" name=(FormField::ProjectType.input_name()) {
                    option value="" selected[form.project_type.is_empty()] { "Select a project type" }
                    @for kind in PROJECT_TYPES {
                        option value=(kind) selected[form.project_type == *kind] { (kind) }
                    }
                }
            }
            div class="form-row" {
                label for="contact-message" { "Message" }
                textarea id="contact-message" name=(FormField::Message.input_name()) rows="5" {
                    (form.get(FormField::Message))
                }
            }
            button type="submit" class="btn btn-primary" { "Send message" }
            p class="form-note" {
                "Prefer email? Write to "
                a href=(format!("mailto:{}", COMPANY.email)) { (COMPANY.email) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_form_empty() {
        // Arrange
        let form = ContactForm::default();

        // Act
        let html = contact_form(&form).into_string();

        // Assert
        assert!(html.contains(r#"name="projectType""#));
        assert!(html.contains(r#"<option value="" selected>"#));
    }

    #[test]
    fn test_contact_form_tag_has_no_submission_target() {
        // Arrange
        let form = ContactForm::default();

        // Act
        let html = contact_form(&form).into_string();
        let form_tag = &html[..html.find('>').expect("form tag is closed") + 1];

        // Assert
        assert!(form_tag.starts_with("<form "));
        assert!(form_tag.contains(r#"data-action="submit-contact""#));
        assert!(!form_tag.contains(" action="), "form must not post anywhere: {}", form_tag);
        assert!(!form_tag.contains(" method="), "form must not post anywhere: {}", form_tag);
    }

    #[test]
    fn test_contact_form_prefilled() {
        // Arrange
        let mut form = ContactForm::default();
        form.set(FormField::Name, "Avery <Singh>");
        form.set(FormField::ProjectType, "SaaS Platform");
        form.set(FormField::Message, "Hi");

        // Act
        let html = contact_form(&form).into_string();

        // Assert
        assert!(html.contains(r#"value="Avery &lt;Singh&gt;""#));
        assert!(html.contains(r#"<option value="SaaS Platform" selected>"#));
        assert!(html.contains(">Hi</textarea>"));
    }
}
