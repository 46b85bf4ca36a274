// File: rusty-fields/src/field.rs
// Purpose: Props shared by every field control, and the mounted field wrapper

use crate::attrs::AutoComplete;
use crate::char_count::CharacterCount;
use crate::classes::Classes;
use crate::described_by::present;
use crate::handler::EventHandler;
use crate::label::Label;
use crate::lifecycle::FieldState;
use crate::support_text::SupportText;
use maud::{html, Markup, Render};

/// Element id of a field: `{form_id}-{name}`
pub fn field_id(form_id: &str, name: &str) -> String {
    format!("{}-{}", form_id, name)
}

/// Props common to `Input` and `TextArea`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldCore {
    pub label: String,
    pub name: String,
    pub form_id: String,
    pub error: Option<String>,
    pub support_text: Option<String>,
    pub tool_tip: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub auto_focus: bool,
    pub auto_complete: Option<AutoComplete>,
    pub placeholder: Option<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub show_char_count: bool,
    pub on_change: Option<EventHandler>,
    pub on_blur: Option<EventHandler>,
}

impl FieldCore {
    pub fn new(label: impl Into<String>, name: impl Into<String>, form_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            form_id: form_id.into(),
            ..Self::default()
        }
    }

    /// Error message, if one is present
    pub fn error_text(&self) -> Option<&str> {
        present(self.error.as_deref())
    }

    pub fn support_text(&self) -> Option<&str> {
        present(self.support_text.as_deref())
    }

    pub fn tool_tip(&self) -> Option<&str> {
        present(self.tool_tip.as_deref())
    }

    pub fn has_error(&self) -> bool {
        self.error_text().is_some()
    }

    /// Counter limit, when the counter may be shown. A zero limit disables it.
    pub fn counter_limit(&self) -> Option<usize> {
        if self.show_char_count {
            self.max_length.filter(|max| *max > 0)
        } else {
            None
        }
    }

    pub(crate) fn on_change_script(&self) -> Option<&str> {
        self.on_change.as_ref().map(EventHandler::as_str)
    }

    pub(crate) fn on_blur_script(&self) -> Option<&str> {
        self.on_blur.as_ref().map(EventHandler::as_str)
    }

    /// Classes for the native control: error border and disabled look
    pub(crate) fn control_classes(&self, base: &str) -> Classes {
        let error = self.has_error();
        Classes::new(base)
            .add_if(error, "border-error")
            .add_if(!error, "border-form-border")
            .add_if(self.disabled, "cursor-not-allowed opacity-75")
    }
}

/// A native control that can be mounted as a [`Field`]
pub trait FieldControl {
    fn core(&self) -> &FieldCore;

    /// Text the character counter reads, or `None` when the control's value
    /// has no character length.
    fn count_source(&self) -> Option<&str>;

    /// The `<input>`/`<textarea>` element itself
    fn render_control(&self, state: &FieldState) -> Markup;
}

/// A field control together with the state derived from its props
#[derive(Debug, Clone)]
pub struct Field<C> {
    control: C,
    state: FieldState,
}

impl<C: FieldControl> Field<C> {
    /// First render: derive id, descriptors and the initial count
    pub fn mount(control: C) -> Self {
        let state = FieldState::mount(&control);
        Self { control, state }
    }

    /// New props for an already mounted field
    pub fn update(&mut self, control: C) {
        self.state.update(&control);
        self.control = control;
    }

    pub fn id(&self) -> &str {
        self.state.id()
    }

    pub fn described_by(&self) -> Option<&str> {
        self.state.described_by()
    }

    pub fn char_count(&self) -> usize {
        self.state.char_count()
    }

    fn counter(&self) -> Option<CharacterCount> {
        let max = self.control.core().counter_limit()?;
        self.control.count_source()?;
        Some(CharacterCount::new(self.state.char_count(), max))
    }
}

impl<C: FieldControl> Render for Field<C> {
    fn render(&self) -> Markup {
        let core = self.control.core();
        let id = self.state.id();

        let label = Label::new(&core.label, id, &core.name)
            .required(core.required)
            .tool_tip(core.tool_tip());

        let support = SupportText::new(id, &core.name)
            .error(core.error_text())
            .support_text(core.support_text());

        html! {
            div class="w-full" {
                (label)
                (self.control.render_control(&self.state))
                @if let Some(counter) = self.counter() {
                    (counter)
                }
                (support)
            }
        }
    }
}

/// Builder methods over `FieldCore` for a control type with a `core` field
macro_rules! impl_field_builders {
    ($ty:ty) => {
        impl $ty {
            pub fn error(mut self, error: impl Into<String>) -> Self {
                self.core.error = Some(error.into());
                self
            }

            /// Set or clear the error, e.g. from `FormState::field_error`
            pub fn error_opt(mut self, error: Option<&str>) -> Self {
                self.core.error = error.map(str::to_string);
                self
            }

            pub fn support_text(mut self, support_text: impl Into<String>) -> Self {
                self.core.support_text = Some(support_text.into());
                self
            }

            pub fn tool_tip(mut self, tool_tip: impl Into<String>) -> Self {
                self.core.tool_tip = Some(tool_tip.into());
                self
            }

            pub fn required(mut self, required: bool) -> Self {
                self.core.required = required;
                self
            }

            pub fn disabled(mut self, disabled: bool) -> Self {
                self.core.disabled = disabled;
                self
            }

            pub fn read_only(mut self, read_only: bool) -> Self {
                self.core.read_only = read_only;
                self
            }

            pub fn auto_focus(mut self, auto_focus: bool) -> Self {
                self.core.auto_focus = auto_focus;
                self
            }

            pub fn auto_complete(mut self, auto_complete: $crate::AutoComplete) -> Self {
                self.core.auto_complete = Some(auto_complete);
                self
            }

            pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
                self.core.placeholder = Some(placeholder.into());
                self
            }

            pub fn min_length(mut self, min_length: usize) -> Self {
                self.core.min_length = Some(min_length);
                self
            }

            pub fn max_length(mut self, max_length: usize) -> Self {
                self.core.max_length = Some(max_length);
                self
            }

            pub fn show_char_count(mut self, show_char_count: bool) -> Self {
                self.core.show_char_count = show_char_count;
                self
            }

            pub fn on_change(mut self, handler: impl Into<$crate::EventHandler>) -> Self {
                self.core.on_change = Some(handler.into());
                self
            }

            pub fn on_blur(mut self, handler: impl Into<$crate::EventHandler>) -> Self {
                self.core.on_blur = Some(handler.into());
                self
            }

            /// Mount this control as a stateful field
            pub fn mount(self) -> $crate::Field<Self> {
                $crate::Field::mount(self)
            }
        }

        impl maud::Render for $ty {
            fn render(&self) -> maud::Markup {
                maud::Render::render(&$crate::Field::mount(self.clone()))
            }
        }
    };
}

pub(crate) use impl_field_builders;
