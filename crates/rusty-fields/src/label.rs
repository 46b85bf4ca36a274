// File: rusty-fields/src/label.rs
// Purpose: Field label with required marker, screen-reader-only mode and tooltip node

use crate::classes::Classes;
use crate::described_by::{present, tooltip_id};
use maud::{html, Markup, Render};

/// `<label>` bound to a field by its id
#[derive(Debug, Clone, Copy)]
pub struct Label<'a> {
    label: &'a str,
    id: &'a str,
    name: &'a str,
    required: bool,
    hidden: bool,
    cursor_pointer: bool,
    tool_tip: Option<&'a str>,
    class: Option<&'a str>,
}

impl<'a> Label<'a> {
    pub fn new(label: &'a str, id: &'a str, name: &'a str) -> Self {
        Self {
            label,
            id,
            name,
            required: false,
            hidden: false,
            cursor_pointer: false,
            tool_tip: None,
            class: None,
        }
    }

    /// Show the required marker
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Hide visually but keep the label in the accessibility tree
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn cursor_pointer(mut self, cursor_pointer: bool) -> Self {
        self.cursor_pointer = cursor_pointer;
        self
    }

    pub fn tool_tip(mut self, tool_tip: Option<&'a str>) -> Self {
        self.tool_tip = tool_tip;
        self
    }

    /// Extra classes for the wrapper
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl Render for Label<'_> {
    fn render(&self) -> Markup {
        let wrapper = Classes::default()
            .add_if(self.hidden, "sr-only")
            .add_if(!self.hidden, "w-full flex flex-row flex-wrap items-center")
            .add_opt(self.class);

        let label = Classes::new("w-full max-w-[calc(100%-40px)] text-base")
            .add_if(self.cursor_pointer, "cursor-pointer");

        html! {
            div class=(wrapper) {
                label for=(self.id) class=(label) {
                    (self.label)
                    @if self.required {
                        " "
                        span class="text-primary" aria-hidden="true" { "*" }
                    }
                }
                @if let Some(tip) = present(self.tool_tip) {
                    span id=(tooltip_id(self.id, self.name)) role="tooltip" class="sr-only" {
                        (tip)
                    }
                }
            }
        }
    }
}
