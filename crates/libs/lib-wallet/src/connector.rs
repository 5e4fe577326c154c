//! # Wallet Connector Configuration
//!
//! Declares which chains and connection methods the client supports. The
//! wallet-connection library consumes this at startup; nothing here talks to
//! a chain.

use serde::Serialize;

/// A blockchain network the client may connect to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ChainDescriptor {
    /// EIP-155 chain id.
    pub id: u64,
    /// Network name.
    pub name: &'static str,
    /// Whether this is a test network.
    pub testnet: bool,
}

/// Base mainnet.
pub const BASE_MAINNET: ChainDescriptor = ChainDescriptor {
    id: 8453,
    name: "base",
    testnet: false,
};

/// Base Sepolia testnet.
pub const BASE_SEPOLIA: ChainDescriptor = ChainDescriptor {
    id: 84532,
    name: "base-sepolia",
    testnet: true,
};

/// Wallet connection method offered by the client.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorKind {
    /// Account-abstraction smart wallet (the product default).
    SmartWallet,
    /// Browser-extension wallet.
    Injected,
    /// WalletConnect relay.
    WalletConnect,
}

/// Connector configuration handed to the wallet-connection library.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConnectorConfig {
    pub app_name: &'static str,
    pub chains: Vec<ChainDescriptor>,
    pub connectors: Vec<ConnectorKind>,
}

impl ConnectorConfig {
    /// Build the connector configuration. Test networks are offered only
    /// when `include_testnets` is set (never in production deployments).
    pub fn new(include_testnets: bool) -> Self {
        let mut chains = vec![BASE_MAINNET];
        if include_testnets {
            chains.push(BASE_SEPOLIA);
        }

        Self {
            app_name: "Kelo",
            chains,
            connectors: vec![
                ConnectorKind::SmartWallet,
                ConnectorKind::Injected,
                ConnectorKind::WalletConnect,
            ],
        }
    }
}
