// File: src/layout.rs
// Purpose: Page shell wrapped around form fragments for non-HTMX requests

use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Full HTML document around `content`
pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src=(HTMX_SRC) {}
            }
            body class="bg-background text-foreground" {
                main class="max-w-2xl mx-auto p-4" {
                    h1 class="text-2xl mb-4" { (title) }
                    (content)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wraps_content() {
        let html = page("Contact", html! { p { "inner" } }).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Contact</title>"));
        assert!(html.contains("htmx.org"));
        assert!(html.contains("<p>inner</p>"));
    }
}
