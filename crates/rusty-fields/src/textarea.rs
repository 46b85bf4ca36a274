// File: rusty-fields/src/textarea.rs
// Purpose: Multi-line text field

use crate::attrs::{AutoComplete, InputMode};
use crate::field::{impl_field_builders, FieldControl, FieldCore};
use crate::lifecycle::FieldState;
use maud::{html, Markup};

const TEXTAREA_CLASSES: &str = "mt-half w-full px-2 py-2 text-base bg-form-background border-2 text-form-foreground rounded-24 min-h-[100px]";

/// `<textarea>` field. Always uses the `text` input mode.
#[derive(Debug, Clone, PartialEq)]
pub struct TextArea {
    core: FieldCore,
    value: Option<String>,
}

impl TextArea {
    pub fn new(label: impl Into<String>, name: impl Into<String>, form_id: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(label, name, form_id),
            value: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn value_opt(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }

    pub fn current_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Content written between the tags; a missing value becomes `""`
    pub fn rendered_value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

impl_field_builders!(TextArea);

impl FieldControl for TextArea {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn count_source(&self) -> Option<&str> {
        Some(self.rendered_value())
    }

    fn render_control(&self, state: &FieldState) -> Markup {
        let core = &self.core;

        html! {
            textarea
                id=(state.id())
                name=(core.name)
                onchange=[core.on_change_script()]
                onblur=[core.on_blur_script()]
                aria-invalid=(if core.has_error() { "true" } else { "false" })
                aria-describedby=[state.described_by()]
                maxlength=[core.max_length]
                minlength=[core.min_length]
                required[core.required]
                placeholder=[core.placeholder.as_deref()]
                readonly[core.read_only]
                disabled[core.disabled]
                autocomplete=[core.auto_complete.map(AutoComplete::as_str)]
                autofocus[core.auto_focus]
                inputmode=(InputMode::Text.as_str())
                class=(core.control_classes(TEXTAREA_CLASSES)) {
                (self.rendered_value())
            }
        }
    }
}
