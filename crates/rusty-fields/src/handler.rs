// File: rusty-fields/src/handler.rs
// Purpose: Client-side event handlers forwarded onto field elements

/// Script bound to a field event (`onchange`, `onblur`).
///
/// The script is written to the element exactly as given. Components never
/// wrap or rebind it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventHandler(String);

impl EventHandler {
    pub fn new(script: impl Into<String>) -> Self {
        Self(script.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventHandler {
    fn from(script: &str) -> Self {
        Self::new(script)
    }
}

impl From<String> for EventHandler {
    fn from(script: String) -> Self {
        Self(script)
    }
}
