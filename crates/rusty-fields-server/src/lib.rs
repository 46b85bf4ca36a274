// File: src/lib.rs
// Purpose: Router for the contact form example

//! Example contact form served with Axum and HTMX.
//!
//! Every request rebuilds the form state from what the browser submitted, so
//! the server keeps nothing between requests.

pub mod config;
pub mod contact_form;
pub mod form_context;
pub mod handlers;
pub mod layout;
pub mod response;

pub use config::Config;
pub use contact_form::ContactForm;
pub use handlers::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use contact_form::{BLUR_PATH, CHANGE_PATH, SUBMIT_PATH};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Build the application router from configuration
pub fn app(config: &Config) -> Router {
    let state = AppState::new(ContactForm::new(config.contact.clone()));

    Router::new()
        .route("/", get(handlers::index))
        .route(SUBMIT_PATH, post(handlers::submit))
        .route(CHANGE_PATH, post(handlers::change))
        .route(BLUR_PATH, post(handlers::blur))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
