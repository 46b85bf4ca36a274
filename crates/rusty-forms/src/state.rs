// File: rusty-forms/src/state.rs
// Purpose: Values, errors and touched fields of one form, plus its events

use crate::{Errors, FormError, Schema, Touched, Values};
use serde::Serialize;

/// Result of [`FormState::handle_submit`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// Every field passed; the submit callback ran with these values
    Submitted { values: Values },
    /// At least one field failed; the callback did not run
    Invalid { errors: Errors },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted { .. })
    }
}

/// Error to display for `name`: only fields that are both touched and
/// invalid report one.
pub fn field_error<'a>(errors: &'a Errors, touched: &Touched, name: &str) -> Option<&'a str> {
    if touched.contains(name) {
        errors.get(name).map(String::as_str)
    } else {
        None
    }
}

/// State of a form bound to a [`Schema`]
#[derive(Debug, Clone)]
pub struct FormState<'s> {
    schema: &'s Schema,
    values: Values,
    errors: Errors,
    touched: Touched,
    submit_count: usize,
}

impl<'s> FormState<'s> {
    /// Create a form with initial values. Declared fields without an initial
    /// value start empty. Nothing is validated until the first event.
    pub fn new(schema: &'s Schema, initial: Values) -> Self {
        let mut values = initial;
        for name in schema.field_names() {
            values.entry(name.to_string()).or_default();
        }

        Self {
            schema,
            values,
            errors: Errors::new(),
            touched: Touched::new(),
            submit_count: 0,
        }
    }

    /// Rebuild a form from a submission: values plus the fields already
    /// touched on the client. Errors are recomputed from the values.
    pub fn restore(schema: &'s Schema, values: Values, touched: Touched) -> Result<Self, FormError> {
        if let Some(unknown) = touched.iter().find(|name| !schema.contains(name)) {
            return Err(FormError::UnknownField(unknown.clone()));
        }

        let mut form = Self::new(schema, values);
        form.touched = touched;
        form.validate();
        Ok(form)
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn touched(&self) -> &Touched {
        &self.touched
    }

    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error to display for `name` (touched and invalid)
    pub fn field_error(&self, name: &str) -> Option<&str> {
        field_error(&self.errors, &self.touched, name)
    }

    /// A field's value changed
    pub fn handle_change(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.ensure_field(name)?;
        let value = value.into();
        tracing::debug!(field = name, len = value.len(), "form field changed");
        self.values.insert(name.to_string(), value);
        self.validate();
        Ok(())
    }

    /// A field lost focus
    pub fn handle_blur(&mut self, name: &str) -> Result<(), FormError> {
        self.ensure_field(name)?;
        tracing::debug!(field = name, "form field blurred");
        self.touched.insert(name.to_string());
        self.validate();
        Ok(())
    }

    /// Touch every declared field, validate, and call `on_submit` only when
    /// the form is valid.
    pub fn handle_submit<F>(&mut self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(&Values),
    {
        self.submit_count += 1;
        self.touched
            .extend(self.schema.field_names().map(str::to_string));
        self.validate();

        if self.is_valid() {
            tracing::debug!(attempt = self.submit_count, "form submitted");
            on_submit(&self.values);
            SubmitOutcome::Submitted {
                values: self.values.clone(),
            }
        } else {
            tracing::debug!(
                attempt = self.submit_count,
                errors = self.errors.len(),
                "form submission rejected"
            );
            SubmitOutcome::Invalid {
                errors: self.errors.clone(),
            }
        }
    }

    fn ensure_field(&self, name: &str) -> Result<(), FormError> {
        if self.schema.contains(name) {
            Ok(())
        } else {
            Err(FormError::UnknownField(name.to_string()))
        }
    }

    fn validate(&mut self) {
        self.errors = self.schema.validate(&self.values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldRules;
    use pretty_assertions::assert_eq;

    fn schema() -> Schema {
        Schema::new()
            .field(
                "first_name",
                FieldRules::string().required("First name is required"),
            )
            .field(
                "email",
                FieldRules::string()
                    .email("Invalid email address")
                    .required("Email is required"),
            )
    }

    #[test]
    fn test_new_fills_declared_fields() {
        let schema = schema();
        let form = FormState::new(&schema, Values::new());
        assert_eq!(form.value("first_name"), "");
        assert_eq!(form.values().len(), 2);
        assert!(form.errors().is_empty());
        assert!(form.touched().is_empty());
    }

    #[test]
    fn test_error_hidden_until_touched() {
        let schema = schema();
        let mut form = FormState::new(&schema, Values::new());

        form.handle_change("email", "bad").unwrap();
        assert_eq!(form.errors()["email"], "Invalid email address");
        assert_eq!(form.field_error("email"), None);

        form.handle_blur("email").unwrap();
        assert_eq!(form.field_error("email"), Some("Invalid email address"));

        form.handle_change("email", "a@b.com").unwrap();
        assert_eq!(form.field_error("email"), None);
    }

    #[test]
    fn test_unknown_field() {
        let schema = schema();
        let mut form = FormState::new(&schema, Values::new());
        assert_eq!(
            form.handle_change("nickname", "x"),
            Err(FormError::UnknownField("nickname".to_string()))
        );
        assert!(form.handle_blur("nickname").is_err());
    }

    #[test]
    fn test_submit_invalid_touches_everything() {
        let schema = schema();
        let mut form = FormState::new(&schema, Values::new());
        let mut called = false;

        let outcome = form.handle_submit(|_| called = true);

        assert!(!called);
        assert!(!outcome.is_submitted());
        assert!(form.is_touched("first_name"));
        assert_eq!(form.field_error("first_name"), Some("First name is required"));
        assert_eq!(form.field_error("email"), Some("Email is required"));
        assert_eq!(form.submit_count(), 1);
    }

    #[test]
    fn test_submit_valid_calls_back() {
        let schema = schema();
        let mut form = FormState::new(&schema, Values::new());
        form.handle_change("first_name", "Ada").unwrap();
        form.handle_change("email", "ada@example.com").unwrap();

        let mut seen = None;
        let outcome = form.handle_submit(|values| seen = Some(values.clone()));

        let seen = seen.expect("submit callback should run");
        assert_eq!(seen["first_name"], "Ada");
        assert_eq!(outcome, SubmitOutcome::Submitted { values: seen });
    }

    #[test]
    fn test_restore_rejects_unknown_touched() {
        let schema = schema();
        let touched: Touched = ["bogus".to_string()].into_iter().collect();
        assert!(FormState::restore(&schema, Values::new(), touched).is_err());
    }

    #[test]
    fn test_restore_validates() {
        let schema = schema();
        let touched: Touched = ["first_name".to_string()].into_iter().collect();
        let form = FormState::restore(&schema, Values::new(), touched).unwrap();
        assert_eq!(form.field_error("first_name"), Some("First name is required"));
        assert_eq!(form.field_error("email"), None);
    }

    #[test]
    fn test_field_error_free_function() {
        let mut errors = Errors::new();
        errors.insert("note".to_string(), "Note is required".to_string());
        let mut touched = Touched::new();

        assert_eq!(field_error(&errors, &touched, "note"), None);
        touched.insert("note".to_string());
        assert_eq!(field_error(&errors, &touched, "note"), Some("Note is required"));
        assert_eq!(field_error(&errors, &touched, "other"), None);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = SubmitOutcome::Invalid {
            errors: [("email".to_string(), "Email is required".to_string())]
                .into_iter()
                .collect(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "invalid");
        assert_eq!(json["errors"]["email"], "Email is required");
    }
}
