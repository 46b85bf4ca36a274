// File: rusty-fields/src/support_text.rs
// Purpose: Error or support text under a field

use crate::classes::Classes;
use crate::described_by::{help_id, present};
use maud::{html, Markup, Render};

/// Shows a field's error, or its support text when there is no error.
///
/// Renders nothing at all when neither is present.
#[derive(Debug, Clone, Copy)]
pub struct SupportText<'a> {
    error: Option<&'a str>,
    support_text: Option<&'a str>,
    id: &'a str,
    name: &'a str,
}

impl<'a> SupportText<'a> {
    pub fn new(id: &'a str, name: &'a str) -> Self {
        Self {
            error: None,
            support_text: None,
            id,
            name,
        }
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn support_text(mut self, support_text: Option<&'a str>) -> Self {
        self.support_text = support_text;
        self
    }

    /// The text shown and whether it is an error
    fn visible(&self) -> Option<(&'a str, bool)> {
        match (present(self.error), present(self.support_text)) {
            (Some(error), _) => Some((error, true)),
            (None, Some(support)) => Some((support, false)),
            (None, None) => None,
        }
    }
}

impl Render for SupportText<'_> {
    fn render(&self) -> Markup {
        let Some((text, is_error)) = self.visible() else {
            return html! {};
        };

        let classes = Classes::new("text-sm block w-full")
            .add_if(is_error, "text-error")
            .add_if(!is_error, "text-white");

        html! {
            div class="w-full flex flex-row flex-wrap items-start mt-half" {
                small class=(classes) id=(help_id(self.id, self.name)) {
                    (text)
                }
            }
        }
    }
}
