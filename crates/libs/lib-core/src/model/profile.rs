//! # User Profile
//!
//! The borrower profile record and the state machine that keeps it coupled to
//! wallet-connection state.
//!
//! The profile's existence is strictly tied to the wallet connection:
//! connected ⇔ profile present. There is no intermediate or error state
//! visible to dependents; a failed fetch settles to `None` like a missing
//! profile.
//!
//! [`MockProfileSource`] is a placeholder data source. The real backend
//! profile service must implement [`ProfileSource`] with the same
//! loading → populated|null settling behavior so dependents are unaffected
//! by the swap.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Know-Your-Customer verification status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    Unverified,
    Pending,
    Verified,
}

/// Borrower profile associated with a connected wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub address: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub kyc_status: KycStatus,
    pub credit_score: u16,
    pub total_borrowed: f64,
    pub total_repaid: f64,
    pub active_loans: u32,
    pub created_at: DateTime<Utc>,
}

/// Error from a profile source.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile service error: {0}")]
    Upstream(String),
}

/// Capability that resolves a wallet address to a borrower profile.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the profile for `address`. `Ok(None)` means no profile exists,
    /// which is a legitimate outcome.
    async fn fetch(&self, address: &str) -> Result<Option<UserProfile>, ProfileError>;
}

/// Placeholder profile source that fabricates a profile for any address.
///
/// Stands in for the real profile service; nothing it returns is persisted.
#[derive(Debug, Default)]
pub struct MockProfileSource;

#[async_trait]
impl ProfileSource for MockProfileSource {
    async fn fetch(&self, address: &str) -> Result<Option<UserProfile>, ProfileError> {
        let suffix = address
            .trim_start_matches("0x")
            .chars()
            .take(8)
            .collect::<String>()
            .to_lowercase();

        Ok(Some(UserProfile {
            id: format!("usr-{}", suffix),
            address: address.to_string(),
            email: Some(format!("user-{}@kelo.africa", suffix)),
            phone: Some("+254700000000".to_string()),
            kyc_status: KycStatus::Verified,
            credit_score: 720,
            total_borrowed: 45_000.0,
            total_repaid: 30_000.0,
            active_loans: 1,
            created_at: lib_utils::now_utc(),
        }))
    }
}

/// Tracks the profile for the currently connected wallet.
///
/// Connection events drive the machine:
/// - [`connect`](Self::connect) enters loading, resolves the profile through
///   the source, and settles to populated or `None`.
/// - [`disconnect`](Self::disconnect) synchronously clears both the profile
///   and the loading flag.
///
/// A stale in-flight resolution is superseded by the next event; it is never
/// explicitly aborted.
pub struct ProfileTracker {
    source: Arc<dyn ProfileSource>,
    profile: Option<UserProfile>,
    loading: bool,
}

impl ProfileTracker {
    pub fn new(source: Arc<dyn ProfileSource>) -> Self {
        Self {
            source,
            profile: None,
            loading: false,
        }
    }

    /// Wallet connected (or switched) to `address`.
    pub async fn connect(&mut self, address: &str) {
        self.loading = true;
        // A fetch failure settles to None; dependents only see populated|null.
        self.profile = self.source.fetch(address).await.unwrap_or(None);
        self.loading = false;
    }

    /// Wallet disconnected. Clears state synchronously.
    pub fn disconnect(&mut self) {
        self.profile = None;
        self.loading = false;
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    #[async_trait]
    impl ProfileSource for FailingSource {
        async fn fetch(&self, _address: &str) -> Result<Option<UserProfile>, ProfileError> {
            Err(ProfileError::Upstream("service unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_connect_populates_profile_with_address() {
        let mut tracker = ProfileTracker::new(Arc::new(MockProfileSource));

        tracker
            .connect("0x71C7656EC7ab88b098defB751B7401B5f6d8976F")
            .await;

        let profile = tracker.profile().expect("profile should be populated");
        assert_eq!(profile.address, "0x71C7656EC7ab88b098defB751B7401B5f6d8976F");
        assert!(!tracker.is_loading());
    }

    #[tokio::test]
    async fn test_disconnect_clears_synchronously() {
        let mut tracker = ProfileTracker::new(Arc::new(MockProfileSource));
        tracker.connect("0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B").await;
        assert!(tracker.profile().is_some());

        tracker.disconnect();

        assert!(tracker.profile().is_none());
        assert!(!tracker.is_loading());
    }

    #[tokio::test]
    async fn test_reconnect_with_new_address_switches_profile() {
        let mut tracker = ProfileTracker::new(Arc::new(MockProfileSource));
        tracker.connect("0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B").await;
        tracker.disconnect();

        tracker
            .connect("0x71C7656EC7ab88b098defB751B7401B5f6d8976F")
            .await;

        let profile = tracker.profile().expect("profile should be populated");
        assert_eq!(profile.address, "0x71C7656EC7ab88b098defB751B7401B5f6d8976F");
    }

    #[tokio::test]
    async fn test_failed_fetch_settles_to_none() {
        let mut tracker = ProfileTracker::new(Arc::new(FailingSource));

        tracker.connect("0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B").await;

        assert!(tracker.profile().is_none());
        assert!(!tracker.is_loading());
    }
}
