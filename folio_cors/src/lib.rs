#![deny(missing_docs)]
//! Shared CORS configuration mounted by every folio service.

use http::{Method, header::CONTENT_TYPE};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer used across folio services.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60))
}
