// File: rusty-fields/src/value.rs
// Purpose: Field values and their controlled-value coercion

use serde::{Deserialize, Serialize};

/// Value bound to an input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// The value as text, if it is text. Numbers are not converted.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Number(_) => None,
        }
    }

    /// Empty text and `NaN` carry nothing to display.
    ///
    /// Zero is a real value and stays.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Number(n) => n.is_nan(),
        }
    }

    /// The string written to the element's `value`
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Number(n) => format_number(*n),
        }
    }
}

/// Coerce an optional value for a controlled field: blank or missing values
/// render as `""`.
pub fn rendered_value(value: Option<&FieldValue>) -> String {
    match value {
        Some(value) if !value.is_blank() => value.display(),
        _ => String::new(),
    }
}

fn format_number(n: f64) -> String {
    if n == 0.0 {
        // covers -0
        "0".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else {
        n.to_string()
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, "")]
    #[case(Some(FieldValue::from("")), "")]
    #[case(Some(FieldValue::from("hello")), "hello")]
    #[case(Some(FieldValue::from(0)), "0")]
    #[case(Some(FieldValue::from(-0.0)), "0")]
    #[case(Some(FieldValue::from(42)), "42")]
    #[case(Some(FieldValue::from(2.5)), "2.5")]
    #[case(Some(FieldValue::from(f64::NAN)), "")]
    #[case(Some(FieldValue::from(f64::INFINITY)), "Infinity")]
    fn test_rendered_value(#[case] value: Option<FieldValue>, #[case] expected: &str) {
        assert_eq!(rendered_value(value.as_ref()), expected);
    }

    #[test]
    fn test_as_text() {
        assert_eq!(FieldValue::from("abc").as_text(), Some("abc"));
        assert_eq!(FieldValue::from(3).as_text(), None);
    }

    #[test]
    fn test_untagged_serde() {
        let text: FieldValue = serde_json::from_str("\"hi\"").unwrap();
        let number: FieldValue = serde_json::from_str("7").unwrap();
        assert_eq!(text, FieldValue::from("hi"));
        assert_eq!(number, FieldValue::from(7));
    }
}
