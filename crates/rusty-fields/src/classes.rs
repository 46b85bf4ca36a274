// File: rusty-fields/src/classes.rs
// Purpose: Conditional class-name composition for component markup

use maud::{html, Markup, Render};

/// Space-separated list of CSS classes built up conditionally.
///
/// Empty tokens are skipped, so the rendered attribute never carries stray
/// whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classes {
    tokens: Vec<String>,
}

impl Classes {
    pub fn new(base: &str) -> Self {
        Self::default().add(base)
    }

    pub fn add(mut self, class: &str) -> Self {
        self.tokens
            .extend(class.split_whitespace().map(str::to_string));
        self
    }

    pub fn add_if(self, condition: bool, class: &str) -> Self {
        if condition {
            self.add(class)
        } else {
            self
        }
    }

    pub fn add_opt(self, class: Option<&str>) -> Self {
        match class {
            Some(class) => self.add(class),
            None => self,
        }
    }

    pub fn build(&self) -> String {
        self.tokens.join(" ")
    }
}

impl Render for Classes {
    fn render(&self) -> Markup {
        html! { (self.build()) }
    }
}
