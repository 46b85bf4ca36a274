// File: src/contact_form.rs
// Purpose: Contact form built from rusty-fields components and validated by rusty-forms

use crate::config::ContactConfig;
use crate::form_context::{encode_touched, FIELD_KEY, TOUCHED_KEY};
use maud::{html, Markup};
use rusty_fields::{EventHandler, Input, InputMode, InputType, TextArea};
use rusty_forms::{FieldRules, FormState, Schema, Values};

pub const FORM_ID: &str = "contact-form";

pub const SUBMIT_PATH: &str = "/contact";
pub const CHANGE_PATH: &str = "/contact/change";
pub const BLUR_PATH: &str = "/contact/blur";

/// The contact form: first name, last name, email and a note
#[derive(Debug, Clone)]
pub struct ContactForm {
    config: ContactConfig,
    schema: Schema,
}

impl ContactForm {
    pub fn new(config: ContactConfig) -> Self {
        let max = config.note_max_length;
        let schema = Schema::new()
            .field(
                "first_name",
                FieldRules::string().required("First name is required"),
            )
            .field(
                "last_name",
                FieldRules::string().required("Last name is required"),
            )
            .field(
                "email",
                FieldRules::string()
                    .email("Invalid email address")
                    .required("Email is required"),
            )
            .field(
                "note",
                FieldRules::string()
                    .required("Note is required")
                    .max_length(max, format!("Note must be at most {} characters", max)),
            );

        Self { config, schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    /// Empty form, nothing touched
    pub fn initial_state(&self) -> FormState<'_> {
        FormState::new(&self.schema, Values::new())
    }

    /// The `<form>` element for the current state
    pub fn render(&self, form: &FormState<'_>) -> Markup {
        let first_name = Input::new("First Name", "first_name", "form-first-name", InputType::Text, InputMode::Text)
            .value(form.value("first_name"))
            .error_opt(form.field_error("first_name"))
            .required(true)
            .on_change(field_event(CHANGE_PATH))
            .on_blur(field_event(BLUR_PATH));

        let last_name = Input::new("Last Name", "last_name", "form-last-name", InputType::Text, InputMode::Text)
            .value(form.value("last_name"))
            .error_opt(form.field_error("last_name"))
            .required(true)
            .on_change(field_event(CHANGE_PATH))
            .on_blur(field_event(BLUR_PATH));

        let email = Input::new("Email", "email", "form-email", InputType::Email, InputMode::Email)
            .value(form.value("email"))
            .error_opt(form.field_error("email"))
            .required(true)
            .on_change(field_event(CHANGE_PATH))
            .on_blur(field_event(BLUR_PATH));

        let note = TextArea::new("Note", "note", "form-note")
            .value(form.value("note"))
            .error_opt(form.field_error("note"))
            .required(true)
            .max_length(self.config.note_max_length)
            .show_char_count(self.config.show_note_char_count)
            .on_change(field_event(CHANGE_PATH))
            .on_blur(field_event(BLUR_PATH))
            .support_text(self.config.note_support_text.as_str());

        html! {
            form
                id=(FORM_ID)
                method="post"
                action=(SUBMIT_PATH)
                hx-post=(SUBMIT_PATH)
                hx-target="this"
                hx-swap="outerHTML"
                novalidate
                class="grid grid-cols-1 gap-2 p-2" {
                input type="hidden" name=(TOUCHED_KEY) value=(encode_touched(form.touched()));
                div class="w-full grid grid-cols-1 md:grid-cols-2 gap-2" {
                    (first_name)
                    (last_name)
                }
                div class="w-full" {
                    (email)
                }
                div class="w-full" {
                    (note)
                }
                div class="w-full" {
                    button type="submit" class="p-2 bg-blue-500 text-white rounded-lg" {
                        "Submit"
                    }
                }
            }
        }
    }

    /// Shown in place of the form after a valid submission
    pub fn render_submitted(&self, values: &Values) -> Markup {
        let first_name = values.get("first_name").map(String::as_str).unwrap_or("");

        html! {
            div id=(FORM_ID) class="grid grid-cols-1 gap-2 p-2" role="status" {
                p class="text-base" {
                    "Thanks, " (first_name) "! Your message has been sent."
                }
                a href="/" class="p-2 bg-blue-500 text-white rounded-lg w-fit" { "Send another" }
            }
        }
    }
}

/// Client script posting the enclosing form to `path`. The firing field's
/// name travels as `__field`.
///
/// Only blur swaps the form. A committed change is followed by a blur on the
/// same element, and htmx drops that queued blur if the change response has
/// already replaced the element.
fn field_event(path: &str) -> EventHandler {
    let swap = if path == BLUR_PATH { "outerHTML" } else { "none" };
    EventHandler::new(format!(
        "htmx.ajax('POST', '{path}', {{source: this, target: '#{FORM_ID}', swap: '{swap}', values: {{{FIELD_KEY}: this.name}}}})"
    ))
}
