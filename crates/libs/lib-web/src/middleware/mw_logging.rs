//! # Request/Response Logging Middleware
//!
//! Logs method, path, status, and duration for every request, correlated by
//! the request ID from [`super::mw_req_stamp`]. Credential-bearing headers
//! are redacted.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Headers that must never reach the logs.
const SENSITIVE_HEADERS: &[&str] = &["authorization", "cookie", "set-cookie"];

/// Request/response logging middleware.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let request_id = req
        .extensions()
        .get::<super::mw_req_stamp::RequestStamp>()
        .map(|s| s.id.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .map(|(name, value)| {
            let name_lower = name.as_str().to_lowercase();
            if SENSITIVE_HEADERS.iter().any(|h| name_lower.contains(h)) {
                (name.to_string(), "***REDACTED***".to_string())
            } else {
                (
                    name.to_string(),
                    value.to_str().unwrap_or("<binary>").to_string(),
                )
            }
        })
        .collect();

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "[REQUEST] {} {}",
        method,
        path
    );
    debug!(request_id = %request_id, headers = ?headers, "[REQUEST HEADERS]");

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        error!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms)",
            method,
            path,
            status.as_u16(),
            duration.as_millis()
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms)",
            method,
            path,
            status.as_u16(),
            duration.as_millis()
        );
    } else {
        info!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms)",
            method,
            path,
            status.as_u16(),
            duration.as_millis()
        );
    }

    response
}
