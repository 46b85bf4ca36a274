//! Integration tests for the contact form routes

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use rstest::rstest;
use rusty_fields_server::{app, config::ContactConfig, Config};
use serde_json::{json, Value};

fn server() -> TestServer {
    TestServer::new(app(&Config::default())).unwrap()
}

fn hx_request() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("hx-request"),
        HeaderValue::from_static("true"),
    )
}

fn accept_json() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("accept"),
        HeaderValue::from_static("application/json"),
    )
}

const VALID: &[(&str, &str)] = &[
    ("first_name", "Ada"),
    ("last_name", "Lovelace"),
    ("email", "ada@example.com"),
    ("note", "Hello there"),
];

#[tokio::test]
async fn test_index_renders_full_page() {
    let response = server().get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<form id=\"contact-form\""));
    assert!(html.contains("id=\"form-email-email\""));
    assert!(html.contains(">Submit</button>"));
    assert!(!html.contains("aria-invalid=\"true\""));
}

#[tokio::test]
async fn test_htmx_request_gets_fragment() {
    let (name, value) = hx_request();
    let response = server().get("/").add_header(name, value).await;

    let html = response.text();
    assert!(html.starts_with("<form id=\"contact-form\""));
    assert!(!html.contains("<!DOCTYPE html>"));
}

#[tokio::test]
async fn test_empty_submit_shows_every_required_error() {
    let (name, value) = hx_request();
    let response = server()
        .post("/contact")
        .add_header(name, value)
        .form(&[("first_name", ""), ("last_name", ""), ("email", ""), ("note", "")])
        .await;
    response.assert_status_ok();

    let html = response.text();
    for message in [
        "First name is required",
        "Last name is required",
        "Email is required",
        "Note is required",
    ] {
        assert!(html.contains(message), "missing {message}");
    }
    assert!(html.contains("name=\"__touched\" value=\"email,first_name,last_name,note\""));
}

#[tokio::test]
async fn test_valid_submit_shows_confirmation() {
    let (name, value) = hx_request();
    let response = server()
        .post("/contact")
        .add_header(name, value)
        .form(&VALID)
        .await;
    response.assert_status_ok();

    assert_eq!(response.header("hx-trigger"), "contact-submitted");

    let html = response.text();
    assert!(html.contains("Thanks, Ada!"));
    assert!(!html.contains("<form"));
}

#[tokio::test]
async fn test_submit_json_outcome() {
    let (name, value) = accept_json();
    let response = server()
        .post("/contact")
        .add_header(name.clone(), value.clone())
        .json(&json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "not-an-email",
            "note": "hi",
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "status": "invalid",
            "errors": { "email": "Invalid email address" },
        })
    );

    let response = server().post("/contact").add_header(name, value).form(&VALID).await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "submitted");
    assert_eq!(body["values"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_blur_reveals_error_for_that_field_only() {
    let (name, value) = hx_request();
    let response = server()
        .post("/contact/blur")
        .add_header(name, value)
        .form(&[
            ("first_name", ""),
            ("last_name", ""),
            ("email", "nope"),
            ("note", ""),
            ("__field", "email"),
            ("__touched", ""),
        ])
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("aria-describedby=\"form-email-email_email-help\""));
    assert!(html.contains(">Invalid email address</small>"));
    assert!(!html.contains("First name is required"));
    assert!(html.contains("name=\"__touched\" value=\"email\""));
}

/// Value of the hidden `__touched` field in a rendered form
fn touched_in(html: &str) -> String {
    let marker = "name=\"__touched\" value=\"";
    let start = html.find(marker).expect("form carries __touched") + marker.len();
    let end = html[start..].find('"').expect("closing quote") + start;
    html[start..end].to_string()
}

#[tokio::test]
async fn test_edit_then_tab_out_shows_error() {
    let server = server();
    let fields = [("first_name", ""), ("last_name", ""), ("email", "nope"), ("note", "")];

    // change: validated, but nothing is revealed until the field is left
    let (name, value) = hx_request();
    let mut body = fields.to_vec();
    body.extend([("__field", "email"), ("__touched", "")]);
    let changed = server
        .post("/contact/change")
        .add_header(name, value)
        .form(&body)
        .await;
    changed.assert_status_ok();
    let touched = touched_in(&changed.text());
    assert_eq!(touched, "");
    assert!(!changed.text().contains("Invalid email address"));

    // the blur that follows carries the form as the change left it
    let (name, value) = hx_request();
    let mut body = fields.to_vec();
    body.extend([("__field", "email"), ("__touched", touched.as_str())]);
    let blurred = server
        .post("/contact/blur")
        .add_header(name, value)
        .form(&body)
        .await;
    blurred.assert_status_ok();

    let html = blurred.text();
    assert_eq!(touched_in(&html), "email");
    assert!(html.contains(">Invalid email address</small>"));
    assert!(html.contains("aria-invalid=\"true\""));
    assert!(!html.contains("First name is required"));
}

#[tokio::test]
async fn test_change_keeps_touched_fields_validated() {
    let (name, value) = accept_json();
    let response = server()
        .post("/contact/change")
        .add_header(name, value)
        .form(&[
            ("first_name", ""),
            ("email", "ada@example.com"),
            ("__field", "email"),
            ("__touched", "first_name,email"),
        ])
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["errors"], json!({ "first_name": "First name is required" }));
    assert_eq!(body["values"]["email"], "ada@example.com");
    assert_eq!(body["touched"], json!(["email", "first_name"]));
    assert_eq!(body["valid"], false);
}

#[rstest]
#[case::missing_field(&[("email", "x")])]
#[case::unknown_field(&[("__field", "age")])]
#[case::unknown_touched(&[("__field", "email"), ("__touched", "age")])]
#[tokio::test]
async fn test_bad_events_are_rejected(#[case] body: &[(&str, &str)]) {
    let response = server().post("/contact/blur").form(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_note_counter_follows_config() {
    let config = Config {
        contact: ContactConfig {
            note_max_length: 20,
            show_note_char_count: true,
            note_support_text: String::new(),
        },
        ..Config::default()
    };
    let server = TestServer::new(app(&config)).unwrap();

    let (name, value) = hx_request();
    let response = server
        .post("/contact/change")
        .add_header(name, value)
        .form(&[("note", "hello"), ("__field", "note"), ("__touched", "")])
        .await;

    let html = response.text();
    assert!(html.contains("5/20</small>"));
    assert!(html.contains("You have 15 characters remaining."));
    assert!(!html.contains("Tell us anything we should know."));
}
