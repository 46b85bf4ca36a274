//! # rusty-fields
//!
//! Accessible form-field components rendered with Maud.
//!
//! - [`Input`] and [`TextArea`]: native controls wrapped with a [`Label`], an
//!   optional [`CharacterCount`] and [`SupportText`]
//! - [`described_by`]: the `aria-describedby` id list for a field
//! - [`Field`] / [`FieldState`]: a mounted control and the state derived from
//!   its props (id, descriptors, character count)
//!
//! Components do not validate anything. They take an already resolved error
//! string (see `rusty-forms`) and render it.
//!
//! ```rust
//! use rusty_fields::{Render, TextArea};
//!
//! let html = TextArea::new("Note", "note", "form-note")
//!     .value("hello")
//!     .show_char_count(true)
//!     .max_length(100)
//!     .render()
//!     .into_string();
//!
//! assert!(html.contains("5/100"));
//! assert!(html.contains("You have 95 characters remaining."));
//! ```

pub mod attrs;
pub mod char_count;
pub mod classes;
pub mod described_by;
pub mod field;
pub mod handler;
pub mod input;
pub mod label;
pub mod lifecycle;
pub mod support_text;
pub mod textarea;
pub mod value;

pub use attrs::{AutoComplete, InputMode, InputType};
pub use char_count::{count, CharacterCount};
pub use classes::Classes;
pub use described_by::{described_by, help_id, tooltip_id, DescriptorParams};
pub use field::{field_id, Field, FieldControl, FieldCore};
pub use handler::EventHandler;
pub use input::Input;
pub use label::Label;
pub use lifecycle::FieldState;
pub use support_text::SupportText;
pub use textarea::TextArea;
pub use value::{rendered_value, FieldValue};

// Re-export Maud for templates
pub use maud::{html, Markup, PreEscaped, Render, DOCTYPE};
