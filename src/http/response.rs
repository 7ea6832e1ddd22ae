//! Page responses.
//!
//! # Responsibilities
//! - Map the matched view to an HTTP status
//! - Attach `x-shell-view` so clients can tell which view was rendered
//!
//! # Design Decisions
//! - The fallback view answers 404; the page itself still renders the full shell

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::shell::View;

pub const X_SHELL_VIEW: HeaderName = HeaderName::from_static("x-shell-view");

pub fn status_for(view: View) -> StatusCode {
    match view {
        View::Home | View::About => StatusCode::OK,
        View::NotFound => StatusCode::NOT_FOUND,
    }
}

/// Build the response for a composed document.
pub fn page(view: View, document: String) -> Response {
    (
        status_for(view),
        [(X_SHELL_VIEW, HeaderValue::from_static(view.as_str()))],
        Html(document),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(View::Home), StatusCode::OK);
        assert_eq!(status_for(View::About), StatusCode::OK);
        assert_eq!(status_for(View::NotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_page_headers() {
        let res = page(View::NotFound, "<p>x</p>".into());
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(res.headers()[X_SHELL_VIEW], "not_found");
        assert!(res.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }
}
