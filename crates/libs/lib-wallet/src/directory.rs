//! # Wallet Directory
//!
//! Lookup of a user's smart wallet through the external wallet service.
//!
//! A user has at most one wallet. "No wallet" is a legitimate outcome
//! surfaced as `Ok(None)`, never as an error.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// A smart wallet as reported by the wallet service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    pub id: String,
    pub address: String,
    pub is_active: bool,
}

/// Errors from wallet lookup.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("wallet service error: {0}")]
    Upstream(String),
}

/// Capability that resolves a user id to their wallet.
#[async_trait]
pub trait WalletDirectory: Send + Sync {
    /// Look up the wallet for `user_id`. `Ok(None)` when the user has no
    /// wallet.
    async fn wallet_for_user(&self, user_id: &str) -> Result<Option<Wallet>, WalletError>;
}

#[derive(Deserialize)]
struct WalletBody {
    id: String,
    address: String,
    is_active: bool,
}

/// Client for the external smart-wallet service.
///
/// ## Upstream Contract
///
/// `GET {base}/v1/wallets/{user_id}`:
/// - `200` with `{"id", "address", "is_active"}`
/// - `404` when the user has no wallet
/// - anything else is an upstream failure
#[derive(Debug, Clone)]
pub struct SmartWalletClient {
    http: reqwest::Client,
    base_url: String,
}

impl SmartWalletClient {
    /// Create a client against the given wallet service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl WalletDirectory for SmartWalletClient {
    async fn wallet_for_user(&self, user_id: &str) -> Result<Option<Wallet>, WalletError> {
        let url = format!("{}/v1/wallets/{}", self.base_url, user_id);
        debug!("[WALLET] Looking up wallet for user {}", user_id);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| WalletError::Upstream(format!("request to wallet service failed: {e}")))?;

        match response.status() {
            status if status.is_success() => {
                let body: WalletBody = response.json().await.map_err(|e| {
                    WalletError::Upstream(format!("malformed wallet service response: {e}"))
                })?;

                // The wallet service only issues EVM smart-wallet addresses.
                lib_utils::validate_evm_address(&body.address).map_err(|e| {
                    WalletError::Upstream(format!("wallet service returned bad address: {e}"))
                })?;

                Ok(Some(Wallet {
                    id: body.id,
                    address: body.address,
                    is_active: body.is_active,
                }))
            }
            StatusCode::NOT_FOUND => {
                debug!("[WALLET] No wallet for user {}", user_id);
                Ok(None)
            }
            status => Err(WalletError::Upstream(format!(
                "wallet service returned {status}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = SmartWalletClient::new("https://wallets.kelo.test/");
        assert_eq!(client.base_url, "https://wallets.kelo.test");
    }
}
