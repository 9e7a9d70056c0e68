//! Profile API access.
//!
//! The backend exposes a single read: `GET /api/buyer_profile/{user_id}`
//! returning a [`ProfileRecord`].

pub mod client;

use crate::error::{ProfileError, Result};
use crate::types::ProfileRecord;

pub use client::ProfileClient;

/// Anything that can produce a buyer profile for an identifier
pub trait ProfileSource: Send + Sync {
    /// Fetch the profile for `user_id`
    fn fetch_profile(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<ProfileRecord>> + Send;
}

/// Reject identifiers that cannot name a profile before any request is made
pub fn validate_user_id(user_id: &str) -> Result<&str> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(ProfileError::InvalidUserId(user_id.to_string()));
    }
    Ok(trimmed)
}
