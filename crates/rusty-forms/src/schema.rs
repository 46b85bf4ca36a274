// File: rusty-forms/src/schema.rs
// Purpose: Declarative per-field validation rules

use crate::{Errors, Values};
use rusty_forms_validation::{has_max_length, has_min_length, is_present, is_valid_email};

/// A single check applied to a field value, with the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required(String),
    Email(String),
    MinLength(usize, String),
    MaxLength(usize, String),
}

impl Rule {
    /// Returns the failure message, or `None` when the value passes.
    ///
    /// Every rule except `Required` accepts an empty value.
    fn check(&self, value: &str) -> Option<&str> {
        let passes = match self {
            Rule::Required(_) => is_present(value),
            _ if value.is_empty() => true,
            Rule::Email(_) => is_valid_email(value),
            Rule::MinLength(min, _) => has_min_length(value, *min),
            Rule::MaxLength(max, _) => has_max_length(value, *max),
        };

        if passes {
            None
        } else {
            Some(self.message())
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Rule::Required(msg)
            | Rule::Email(msg)
            | Rule::MinLength(_, msg)
            | Rule::MaxLength(_, msg) => msg,
        }
    }
}

/// Ordered rules for one field. The first failing rule reports the error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRules {
    rules: Vec<Rule>,
}

impl FieldRules {
    /// Rules for a string field
    pub fn string() -> Self {
        Self::default()
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Required(message.into()));
        self
    }

    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Email(message.into()));
        self
    }

    pub fn min_length(mut self, min: usize, message: impl Into<String>) -> Self {
        self.rules.push(Rule::MinLength(min, message.into()));
        self
    }

    pub fn max_length(mut self, max: usize, message: impl Into<String>) -> Self {
        self.rules.push(Rule::MaxLength(max, message.into()));
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required(_)))
    }

    /// First error for `value`, if any
    pub fn check(&self, value: &str) -> Option<&str> {
        self.rules.iter().find_map(|rule| rule.check(value))
    }
}

/// The fields of a form, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<(String, FieldRules)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Declaring the same name twice replaces its rules.
    pub fn field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = rules,
            None => self.fields.push((name, rules)),
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules_for(name).is_some()
    }

    pub fn rules_for(&self, name: &str) -> Option<&FieldRules> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Validate every declared field. Missing values are treated as empty.
    pub fn validate(&self, values: &Values) -> Errors {
        self.fields
            .iter()
            .filter_map(|(name, rules)| {
                let value = values.get(name).map(String::as_str).unwrap_or("");
                rules
                    .check(value)
                    .map(|msg| (name.clone(), msg.to_string()))
            })
            .collect()
    }
}
