//! # Wallet Library
//!
//! The smart-wallet directory seam to the external wallet service, plus the
//! wallet-connector configuration consumed by the client at startup.
//!
//! Smart-wallet internals and blockchain transaction construction are out of
//! scope; this crate only looks wallets up and describes how the client may
//! connect to them.

pub mod connector;
pub mod directory;

// Re-export commonly used types
pub use connector::{ChainDescriptor, ConnectorConfig, ConnectorKind};
pub use directory::{SmartWalletClient, Wallet, WalletDirectory, WalletError};
