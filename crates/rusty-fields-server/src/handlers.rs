// File: src/handlers.rs
// Purpose: Axum handlers for the contact form page, submission and field events

use crate::contact_form::ContactForm;
use crate::form_context::FormSubmission;
use crate::layout::page;
use crate::response::HtmlResponse;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use maud::{html, Markup};
use rusty_forms::{FormError, FormState, SubmitOutcome};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

const PAGE_TITLE: &str = "Contact us";

/// Client event fired after a valid submission
pub const SUBMITTED_EVENT: &str = "contact-submitted";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub contact: Arc<ContactForm>,
}

impl AppState {
    pub fn new(contact: ContactForm) -> Self {
        Self {
            contact: Arc::new(contact),
        }
    }
}

/// Field event that could not be applied
#[derive(Debug, Error)]
pub enum EventError {
    #[error("request does not name the field that fired the event")]
    MissingField,

    #[error(transparent)]
    Form(#[from] FormError),
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected form event: {}", self);
        HtmlResponse::new(html! {
            p class="text-error" role="alert" { (self.to_string()) }
        })
        .status(StatusCode::BAD_REQUEST)
        .into_response()
    }
}

#[derive(Debug, Clone, Copy)]
enum FieldEvent {
    Change,
    Blur,
}

/// True for HTMX requests and explicit partial requests
fn wants_partial(headers: &HeaderMap) -> bool {
    headers.contains_key("hx-request") || headers.contains_key("x-partial")
}

fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get("accept")
        .and_then(|accept| accept.to_str().ok())
        .map(|accept| accept.contains("json"))
        .unwrap_or(false)
}

/// The form fragment, or the whole page for plain requests
fn respond(headers: &HeaderMap, fragment: Markup) -> HtmlResponse {
    let markup = if wants_partial(headers) {
        fragment
    } else {
        page(PAGE_TITLE, fragment)
    };
    HtmlResponse::new(markup).no_cache()
}

fn state_json(form: &FormState<'_>) -> Response {
    let visible: rusty_forms::Errors = form
        .schema()
        .field_names()
        .filter_map(|name| {
            form.field_error(name)
                .map(|error| (name.to_string(), error.to_string()))
        })
        .collect();

    Json(json!({
        "values": form.values(),
        "errors": visible,
        "touched": form.touched(),
        "valid": form.is_valid(),
    }))
    .into_response()
}

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let contact = &state.contact;
    let form = contact.initial_state();
    respond(&headers, contact.render(&form)).into_response()
}

pub async fn submit(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let contact = &state.contact;
    let submission = FormSubmission::from_body(&headers, &body);
    let mut form = FormState::new(contact.schema(), submission.values_for(contact.schema()));

    let outcome = form.handle_submit(|values| {
        tracing::info!(?values, "Contact form submitted");
    });

    if accepts_json(&headers) {
        let status = if outcome.is_submitted() {
            StatusCode::OK
        } else {
            StatusCode::UNPROCESSABLE_ENTITY
        };
        return (status, Json(outcome)).into_response();
    }

    match &outcome {
        SubmitOutcome::Submitted { values } => respond(&headers, contact.render_submitted(values))
            .header("HX-Trigger", SUBMITTED_EVENT)
            .into_response(),
        SubmitOutcome::Invalid { errors } => {
            tracing::debug!(fields = ?errors.keys().collect::<Vec<_>>(), "Contact form invalid");
            respond(&headers, contact.render(&form)).into_response()
        }
    }
}

pub async fn change(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, EventError> {
    field_event(&state, &headers, &body, FieldEvent::Change)
}

pub async fn blur(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, EventError> {
    field_event(&state, &headers, &body, FieldEvent::Blur)
}

/// Rebuild the form from the submission, apply one event, render the result
fn field_event(
    state: &AppState,
    headers: &HeaderMap,
    body: &[u8],
    event: FieldEvent,
) -> Result<Response, EventError> {
    let contact = &state.contact;
    let submission = FormSubmission::from_body(headers, body);
    let field = submission.event_field().ok_or(EventError::MissingField)?;

    let mut form = FormState::restore(
        contact.schema(),
        submission.values_for(contact.schema()),
        submission.touched(),
    )?;

    match event {
        FieldEvent::Change => {
            let value = submission.get(field).unwrap_or("").to_string();
            form.handle_change(field, value)?;
        }
        FieldEvent::Blur => form.handle_blur(field)?,
    }

    if accepts_json(headers) {
        return Ok(state_json(&form));
    }

    Ok(respond(headers, contact.render(&form)).into_response())
}
