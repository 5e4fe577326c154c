//! # Session Handlers
//!
//! HTTP request handlers for session verification and logout.
//!
//! Both endpoints delegate to external services through the capability
//! traits in [`AppState`](crate::server::AppState): the identity service
//! validates tokens, the wallet service resolves wallets. This layer does
//! input validation and field mapping, nothing more.
//!
//! ## Error Behavior
//!
//! - Missing or rejected credential → `401` with the reason.
//! - Any external-service failure → opaque `500`; the detail is logged.
//! - No retries on either path.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{AppendHeaders, IntoResponse},
    Json,
};
use lib_auth::{bearer_token, AuthError, SessionVerifier};
use lib_core::dto::{LogoutResponse, SessionUser, VerifyResponse, WalletView};
use lib_core::{AppError, Config};
use lib_wallet::{WalletDirectory, WalletError};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Verify handler - validates the bearer session token and returns the
/// combined user + wallet projection.
///
/// A user without a wallet is a success case: the response carries
/// `"wallet": null`.
pub async fn verify(
    State(verifier): State<Arc<dyn SessionVerifier>>,
    State(wallets): State<Arc<dyn WalletDirectory>>,
    headers: HeaderMap,
) -> Result<Json<VerifyResponse>, AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token);

    // No credential: reject before touching any external service.
    let Some(token) = token else {
        warn!("[VERIFY] Missing bearer token");
        return Err(AppError::Unauthorized("No token provided".to_string()));
    };

    let session = match verifier.verify(token).await {
        Ok(session) => session,
        Err(AuthError::InvalidToken) => {
            warn!("[VERIFY] Token rejected by identity service");
            return Err(AppError::Unauthorized(
                "Invalid or expired token".to_string(),
            ));
        }
        Err(AuthError::Upstream(e)) => {
            error!("[VERIFY] Identity service failure: {}", e);
            return Err(AppError::Upstream(e));
        }
    };

    info!("[VERIFY] Session valid for user {}", session.user_id);

    let wallet = match wallets.wallet_for_user(&session.user_id).await {
        Ok(wallet) => wallet,
        Err(WalletError::Upstream(e)) => {
            error!("[VERIFY] Wallet lookup failure: {}", e);
            return Err(AppError::Upstream(e));
        }
    };

    Ok(Json(VerifyResponse {
        user: SessionUser {
            id: session.user_id,
            email: session.email,
            name: session.name,
        },
        wallet: wallet.map(|w| WalletView {
            id: w.id,
            address: w.address,
            is_active: w.is_active,
        }),
    }))
}

/// Logout handler - clears the session cookie.
///
/// Always succeeds from the caller's point of view; there is no precondition
/// on an existing session. The token is not invalidated at the identity
/// service.
// TODO: revoke the session upstream once the identity service exposes a
// revocation endpoint.
pub async fn logout(State(config): State<Config>) -> Result<impl IntoResponse, AppError> {
    let cookie = expired_session_cookie(&config);
    let value = HeaderValue::from_str(&cookie)
        .map_err(|e| AppError::Internal(format!("cookie header construction failed: {e}")))?;

    info!("[LOGOUT] Clearing session cookie {}", config.auth_cookie_name);

    Ok((
        AppendHeaders([(header::SET_COOKIE, value)]),
        Json(LogoutResponse { success: true }),
    ))
}

/// Reissue the session cookie with an immediate expiry, matching the
/// attributes it was originally set with (http-only, same-site lax, secure
/// in production).
fn expired_session_cookie(config: &Config) -> String {
    let mut cookie = format!(
        "{}=; Max-Age=0; Path=/; HttpOnly; SameSite=Lax",
        config.auth_cookie_name
    );
    if config.is_production() {
        cookie.push_str("; Secure");
    }
    cookie
}
