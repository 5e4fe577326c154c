//! # Request Stamping Middleware
//!
//! Tags every request with a unique ID for tracing. The stamp is available
//! to handlers and later middleware through request extensions, and the ID
//! is echoed back in the `X-Request-ID` response header.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::SystemTime;
use uuid::Uuid;

/// Request metadata for tracing and debugging.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    /// Unique request identifier.
    pub id: String,
    /// When the request was received.
    pub received_at: SystemTime,
}

/// Request stamping middleware. Must run before the logging middleware so
/// the request ID is available there.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp {
        id: Uuid::new_v4().to_string(),
        received_at: SystemTime::now(),
    };
    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&stamp.id) {
        res.headers_mut().insert("X-Request-ID", value);
    }

    res
}
