//! # Core Library
//!
//! Configuration, error handling, wire DTOs, the static product catalog, and
//! the user-profile model for the Kelo session/wallet API.

pub mod catalog;
pub mod config;
pub mod dto;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use config::{Config, Environment};
pub use error::{AppError, Result};
