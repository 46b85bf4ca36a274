// File: rusty-fields/src/char_count.rs
// Purpose: Character counting and the counter display

use maud::{html, Markup, Render};

/// Length of `value` in UTF-16 code units, the unit `maxlength` counts in
pub fn count(value: &str) -> usize {
    value.encode_utf16().count()
}

/// "{count}/{max}" display with a live region announcing what is left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterCount {
    pub char_count: usize,
    pub max_length: usize,
}

impl CharacterCount {
    pub fn new(char_count: usize, max_length: usize) -> Self {
        Self {
            char_count,
            max_length,
        }
    }

    /// Characters left before `max_length`; negative once the value overflows
    pub fn remaining(&self) -> i64 {
        self.max_length as i64 - self.char_count as i64
    }
}

impl Render for CharacterCount {
    fn render(&self) -> Markup {
        html! {
            small class="ml-auto text-right my-half" {
                span class="sr-only" aria-live="polite" aria-atomic="true" {
                    "You have " (self.remaining()) " characters remaining."
                }
                (self.char_count) "/" (self.max_length)
            }
        }
    }
}
