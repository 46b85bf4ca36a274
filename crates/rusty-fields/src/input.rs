// File: rusty-fields/src/input.rs
// Purpose: Single-line input field

use crate::attrs::{AutoComplete, InputMode, InputType};
use crate::field::{impl_field_builders, FieldControl, FieldCore};
use crate::lifecycle::FieldState;
use crate::value::{rendered_value, FieldValue};
use maud::{html, Markup};

const INPUT_CLASSES: &str = "mt-half w-full px-2 py-half text-base bg-form-background border-2 text-form-foreground rounded-24";

/// `<input>` field with label, optional counter and support text
///
/// ```rust
/// use rusty_fields::{Input, InputMode, InputType, Render};
///
/// let html = Input::new("Email", "email", "f", InputType::Email, InputMode::Email)
///     .value("a@b.com")
///     .error("Invalid email address")
///     .render()
///     .into_string();
///
/// assert!(html.contains(r#"aria-invalid="true""#));
/// assert!(html.contains(r#"aria-describedby="f-email_email-help""#));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    core: FieldCore,
    input_type: InputType,
    input_mode: InputMode,
    value: Option<FieldValue>,
    min: Option<f64>,
    max: Option<f64>,
}

impl Input {
    pub fn new(
        label: impl Into<String>,
        name: impl Into<String>,
        form_id: impl Into<String>,
        input_type: InputType,
        input_mode: InputMode,
    ) -> Self {
        Self {
            core: FieldCore::new(label, name, form_id),
            input_type,
            input_mode,
            value: None,
            min: None,
            max: None,
        }
    }

    pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn value_opt(mut self, value: Option<FieldValue>) -> Self {
        self.value = value;
        self
    }

    /// Smallest number allowed
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Largest number allowed
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn current_value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    /// Value written to the element; blank values become `""`
    pub fn rendered_value(&self) -> String {
        rendered_value(self.value.as_ref())
    }
}

impl_field_builders!(Input);

impl FieldControl for Input {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn count_source(&self) -> Option<&str> {
        if !self.input_type.counts_characters() {
            return None;
        }
        match &self.value {
            None => Some(""),
            Some(value) => value.as_text(),
        }
    }

    fn render_control(&self, state: &FieldState) -> Markup {
        let core = &self.core;

        html! {
            input
                id=(state.id())
                type=(self.input_type.as_str())
                name=(core.name)
                onchange=[core.on_change_script()]
                onblur=[core.on_blur_script()]
                aria-invalid=(if core.has_error() { "true" } else { "false" })
                aria-describedby=[state.described_by()]
                max=[self.max]
                maxlength=[core.max_length]
                min=[self.min]
                minlength=[core.min_length]
                required[core.required]
                placeholder=[core.placeholder.as_deref()]
                readonly[core.read_only]
                disabled[core.disabled]
                autocomplete=[core.auto_complete.map(AutoComplete::as_str)]
                autofocus[core.auto_focus]
                value=(self.rendered_value())
                inputmode=(self.input_mode.as_str())
                class=(core.control_classes(INPUT_CLASSES));
        }
    }
}
