//! # HTTP Request Handlers
//!
//! Axum request handlers, organized by feature domain.
//!
//! - **[`auth`]**: session endpoints
//!   - `POST /api/auth/verify` - validate the bearer session token, return user + wallet
//!   - `POST /api/auth/logout` - clear the session cookie

pub mod auth;
