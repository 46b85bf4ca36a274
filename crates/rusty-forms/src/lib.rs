//! # rusty-forms
//!
//! Form state for server-rendered forms. A [`Schema`] declares the fields of a
//! form and the rules each one must satisfy; a [`FormState`] tracks the
//! current values, the validation errors and which fields the user has
//! touched, and exposes the three form events (`handle_change`,
//! `handle_blur`, `handle_submit`).
//!
//! ```rust
//! use rusty_forms::{FieldRules, FormState, Schema};
//!
//! let schema = Schema::new()
//!     .field("email", FieldRules::string()
//!         .email("Invalid email address")
//!         .required("Email is required"));
//!
//! let mut form = FormState::new(&schema, Default::default());
//! form.handle_change("email", "nope").unwrap();
//! assert_eq!(form.field_error("email"), None); // not touched yet
//!
//! form.handle_blur("email").unwrap();
//! assert_eq!(form.field_error("email"), Some("Invalid email address"));
//! ```
//!
//! Field components never see the schema. They receive the already resolved
//! error string from [`FormState::field_error`].

pub mod error;
pub mod schema;
pub mod state;

pub use error::FormError;
pub use schema::{FieldRules, Rule, Schema};
pub use state::{field_error, FormState, SubmitOutcome};

use std::collections::{BTreeMap, BTreeSet};

/// Field name to current value
pub type Values = BTreeMap<String, String>;

/// Field name to first validation error
pub type Errors = BTreeMap<String, String>;

/// Names of fields the user has left at least once
pub type Touched = BTreeSet<String>;
