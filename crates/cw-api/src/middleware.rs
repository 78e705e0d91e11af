//! cookwithus/crates/cw-api/src/middleware.rs Middleware
//!
//! Request ids, tracing spans and CORS for the whole router.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, HeaderName, Method, Request};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info_span, Span};

use crate::extract::COOK_ID_HEADER;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wraps `router` with the standard layer stack. The request id is set
/// before the trace span opens so every log line of a request carries it.
pub fn standard_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(cors_policy()),
    )
}

/// The UI may be served from another origin during development.
pub fn cors_policy() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(COOK_ID_HEADER)])
        .max_age(Duration::from_secs(3600))
}

fn request_span(req: &Request<Body>) -> Span {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        request_id = %request_id,
    )
}
