//! Contact form buffer

use serde::{Deserialize, Serialize};

use crate::event::UiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    ProjectType,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::ProjectType,
        FormField::Message,
    ];

    /// Value of the rendered control's `name` attribute.
    pub fn input_name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::ProjectType => "projectType",
            FormField::Message => "message",
        }
    }
}

/// Free-text fields of the contact form, bound two-way to the inputs.
///
/// No validation is applied and nothing is sent anywhere: submitting only
/// clears the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::ProjectType => &self.project_type,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::ProjectType => self.project_type = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Handles the form's submit event.
    ///
    /// Cancels the browser's form post and stops propagation, then resets
    /// every field to an empty string.
    pub fn submit(&mut self, event: &mut UiEvent) {
        event.prevent_default();
        event.stop_propagation();
        *self = Self::default();
    }
}
