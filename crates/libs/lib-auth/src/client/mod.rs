//! # Identity Service Client
//!
//! HTTP client for the external identity service that validates opaque
//! session tokens.
//!
//! ## Upstream Contract
//!
//! `POST {base}/v1/sessions/verify` with body `{"token": "..."}`:
//! - `200` with `{"user_id", "email", "name"}` for a valid session
//! - `401` for an invalid or expired token
//! - anything else is treated as an upstream failure

use crate::session::{AuthError, Session, SessionVerifier};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Deserialize)]
struct VerifiedSessionBody {
    user_id: String,
    email: String,
    name: String,
}

/// Client for the external identity service.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
}

impl IdentityClient {
    /// Create a client against the given identity service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SessionVerifier for IdentityClient {
    async fn verify(&self, token: &str) -> Result<Session, AuthError> {
        let url = format!("{}/v1/sessions/verify", self.base_url);
        debug!("[IDENTITY] Verifying session token");

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "token": token }))
            .send()
            .await
            .map_err(|e| AuthError::Upstream(format!("request to identity service failed: {e}")))?;

        match response.status() {
            status if status.is_success() => {
                let body: VerifiedSessionBody = response.json().await.map_err(|e| {
                    AuthError::Upstream(format!("malformed identity service response: {e}"))
                })?;

                debug!("[IDENTITY] Session valid for user {}", body.user_id);
                Ok(Session {
                    user_id: body.user_id,
                    email: body.email,
                    name: body.name,
                })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!("[IDENTITY] Token rejected by identity service");
                Err(AuthError::InvalidToken)
            }
            status => Err(AuthError::Upstream(format!(
                "identity service returned {status}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = IdentityClient::new("https://identity.kelo.test/");
        assert_eq!(client.base_url, "https://identity.kelo.test");
    }
}
