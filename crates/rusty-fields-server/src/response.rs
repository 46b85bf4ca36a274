// File: src/response.rs
// Purpose: HTML response builder for Maud markup

use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use maud::Markup;

pub struct HtmlResponse {
    status: StatusCode,
    headers: HeaderMap,
    markup: Markup,
}

impl HtmlResponse {
    pub fn new(markup: Markup) -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            markup,
        }
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Set a header; invalid names or values are skipped
    pub fn header(mut self, key: &str, value: &str) -> Self {
        if let (Ok(name), Ok(val)) = (
            HeaderName::from_bytes(key.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, val);
        }
        self
    }

    pub fn no_cache(mut self) -> Self {
        self.headers
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
        self
    }
}

impl IntoResponse for HtmlResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            self.headers,
            axum::response::Html(self.markup.into_string()),
        )
            .into_response()
    }
}
