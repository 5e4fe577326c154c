//! # Authentication Data Transfer Objects
//!
//! Request/response structures for the session verification and logout
//! endpoints.
//!
//! ## Wire Format
//!
//! DTOs use snake_case field names (default serde behavior) except for the
//! wallet projection, which keeps the product's public camelCase contract
//! (`isActive`). The `wallet` field of [`VerifyResponse`] is always present:
//! a user without a wallet serializes as `"wallet": null`, never as an
//! omitted field.

use serde::{Deserialize, Serialize};

/// User projection of a verified session.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "usr_01HZX3",
///   "email": "amina@example.com",
///   "name": "Amina Odhiambo"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Wallet projection returned alongside a verified session.
///
/// Contains exactly the three public fields; nothing else from the underlying
/// wallet record is exposed.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "wal_9f2c",
///   "address": "0x71C7656EC7ab88b098defB751B7401B5f6d8976F",
///   "isActive": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletView {
    pub id: String,
    pub address: String,
    pub is_active: bool,
}

/// Response body for `POST /api/auth/verify`.
///
/// `wallet` is `null` when the user has no wallet; that is a legitimate
/// outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyResponse {
    pub user: SessionUser,
    // Serialized even when None so clients always see the field.
    pub wallet: Option<WalletView>,
}

/// Response body for `POST /api/auth/logout`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Standard error response for all API endpoints.
///
/// The HTTP status code is the sole machine-readable signal; `error` is a
/// human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> SessionUser {
        SessionUser {
            id: "usr_1".to_string(),
            email: "amina@example.com".to_string(),
            name: "Amina Odhiambo".to_string(),
        }
    }

    #[test]
    fn test_verify_response_without_wallet_serializes_null() {
        let response = VerifyResponse {
            user: sample_user(),
            wallet: None,
        };

        let json = serde_json::to_string(&response).expect("VerifyResponse should serialize");
        assert!(json.contains("\"wallet\":null"));
    }

    #[test]
    fn test_wallet_view_uses_camel_case_is_active() {
        let wallet = WalletView {
            id: "wal_1".to_string(),
            address: "0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_string(),
            is_active: true,
        };

        let json = serde_json::to_string(&wallet).expect("WalletView should serialize");
        assert!(json.contains("\"isActive\":true"));
        assert!(!json.contains("is_active"));
    }

    #[test]
    fn test_verify_response_roundtrip_with_wallet() {
        let response = VerifyResponse {
            user: sample_user(),
            wallet: Some(WalletView {
                id: "wal_1".to_string(),
                address: "0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_string(),
                is_active: false,
            }),
        };

        let json = serde_json::to_string(&response).expect("VerifyResponse should serialize");
        let deserialized: VerifyResponse =
            serde_json::from_str(&json).expect("Round-trip serialization should succeed");

        assert_eq!(response, deserialized);
    }

    #[test]
    fn test_logout_response_shape() {
        let json = serde_json::to_string(&LogoutResponse { success: true })
            .expect("LogoutResponse should serialize");
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn test_error_response_deserialize() {
        let error: ErrorResponse = serde_json::from_str(r#"{"error":"Invalid or expired token"}"#)
            .expect("Valid JSON should deserialize to ErrorResponse");
        assert_eq!(error.error, "Invalid or expired token");
    }
}
