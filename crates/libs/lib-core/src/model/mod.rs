//! # Domain Model
//!
//! User-profile model and the profile-source seam.

pub mod profile;

pub use profile::{
    KycStatus, MockProfileSource, ProfileError, ProfileSource, ProfileTracker, UserProfile,
};
