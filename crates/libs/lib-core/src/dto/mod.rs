//! # Data Transfer Objects
//!
//! Wire-format structures for the HTTP API.

pub mod auth;

pub use auth::{ErrorResponse, LogoutResponse, SessionUser, VerifyResponse, WalletView};
