//! Security response headers.
//!
//! # Responsibilities
//! - Define the static headers added to every page response
//! - Attach them to a router without overriding handler-set values
//!
//! # Design Decisions
//! - Static values only; nothing depends on the request
//! - `if_not_present` so a handler can still set its own value

use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

/// Headers applied when `security.enable_headers` is set.
pub fn security_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ),
    ]
}

/// Layer every security header onto `router`.
pub fn apply<S>(mut router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    for (name, value) in security_headers() {
        router = router.layer(SetResponseHeaderLayer::if_not_present(name, value));
    }
    router
}
