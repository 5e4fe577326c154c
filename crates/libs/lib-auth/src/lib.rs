//! # Authentication Library
//!
//! Session types, the session-verifier seam to the external identity
//! service, bearer-header parsing, and the post-login session gate.

pub mod client;
pub mod gate;
pub mod session;

// Re-export commonly used types
pub use client::IdentityClient;
pub use gate::{SessionGate, LANDING_PATH, POST_LOGIN_PATH};
pub use session::{bearer_token, AuthError, Session, SessionVerifier};
