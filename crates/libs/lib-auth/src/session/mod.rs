//! # Session Verification
//!
//! The session record, the verifier capability seam, and bearer-header
//! parsing.
//!
//! Session tokens are opaque bearer credentials. This crate never inspects
//! them; validation is delegated to the external identity service through
//! the [`SessionVerifier`] trait, and session lifetime is owned by that
//! service.

use async_trait::async_trait;
use thiserror::Error;

/// A verified session as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub name: String,
}

/// Errors from session verification.
///
/// [`InvalidToken`](AuthError::InvalidToken) is a caller error (401);
/// [`Upstream`](AuthError::Upstream) is a dependency failure (opaque 500).
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid or expired session token")]
    InvalidToken,

    #[error("identity service error: {0}")]
    Upstream(String),
}

/// Capability that validates an opaque session token.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    /// Verify `token` and return the session it identifies.
    async fn verify(&self, token: &str) -> Result<Session, AuthError>;
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// Returns `None` for a missing scheme, a wrong scheme, or an empty token.
pub fn bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_extracts_token() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes() {
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(bearer_token("bearer abc"), None);
    }

    #[test]
    fn test_bearer_token_rejects_empty_token() {
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer    "), None);
    }
}
