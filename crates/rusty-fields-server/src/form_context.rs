// File: src/form_context.rs
// Purpose: Decode a form submission into values, touched fields and the field that fired an event

use axum::http::{header, HeaderMap};
use rusty_forms::{Schema, Touched, Values};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Hidden field carrying the comma-separated names of touched fields
pub const TOUCHED_KEY: &str = "__touched";

/// Field that fired a change/blur event
pub const FIELD_KEY: &str = "__field";

/// Raw fields of one submitted form
#[derive(Debug, Clone, Default)]
pub struct FormSubmission {
    fields: HashMap<String, String>,
}

impl FormSubmission {
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Decode a request body by its content type. JSON objects and
    /// urlencoded bodies are understood; anything else yields no fields.
    pub fn from_body(headers: &HeaderMap, body: &[u8]) -> Self {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("");

        if content_type.contains("application/json") {
            serde_json::from_slice::<JsonValue>(body)
                .map(Self::from_json)
                .unwrap_or_else(|e| {
                    tracing::warn!("Failed to parse JSON form body: {}", e);
                    Self::default()
                })
        } else if content_type.contains("application/x-www-form-urlencoded") {
            Self::from_urlencoded(&String::from_utf8_lossy(body))
        } else {
            Self::default()
        }
    }

    pub fn from_urlencoded(body: &str) -> Self {
        let fields = body
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(k), decode_component(v))
            })
            .collect();
        Self { fields }
    }

    pub fn from_json(json: JsonValue) -> Self {
        let mut fields = HashMap::new();

        if let JsonValue::Object(map) = json {
            for (key, value) in map {
                match value {
                    JsonValue::String(s) => {
                        fields.insert(key, s);
                    }
                    JsonValue::Null => {}
                    other => {
                        fields.insert(key, other.to_string());
                    }
                }
            }
        }

        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Name of the field whose event triggered this request
    pub fn event_field(&self) -> Option<&str> {
        self.get(FIELD_KEY).filter(|f| !f.is_empty())
    }

    /// Fields the client reports as already touched
    pub fn touched(&self) -> Touched {
        self.get(TOUCHED_KEY)
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Submitted values for the fields `schema` declares; others are dropped
    pub fn values_for(&self, schema: &Schema) -> Values {
        schema
            .field_names()
            .filter_map(|name| {
                self.fields
                    .get(name)
                    .map(|value| (name.to_string(), value.clone()))
            })
            .collect()
    }
}

/// Encode touched field names for the hidden field
pub fn encode_touched(touched: &Touched) -> String {
    touched.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.clone(),
    }
}
