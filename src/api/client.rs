//! HTTP implementation of [`ProfileSource`] backed by `reqwest`.

use std::time::Duration;

use reqwest::{Client, StatusCode, header};
use url::Url;

use super::{ProfileSource, validate_user_id};
use crate::config::Config;
use crate::error::{ProfileError, Result};
use crate::types::ProfileRecord;

/// Client for the buyer profile endpoint
#[derive(Debug, Clone)]
pub struct ProfileClient {
    client: Client,
    base_url: Url,
}

impl ProfileClient {
    /// Create a client from configuration, honouring the env override
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url(), config.api_timeout())
    }

    /// Create a client for the backend at `base_url`
    ///
    /// Connect timeout is capped at 10s; `timeout` bounds the whole request.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ProfileError::Config(format!(
                "'{base_url}' cannot be used as an API base URL"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the profile URL, keeping any path prefix of the base URL
    pub fn profile_url(&self, user_id: &str) -> Result<Url> {
        let user_id = validate_user_id(user_id)?;
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProfileError::Config(format!("'{}' cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "buyer_profile", user_id]);
        Ok(url)
    }
}

impl ProfileSource for ProfileClient {
    async fn fetch_profile(&self, user_id: &str) -> Result<ProfileRecord> {
        let url = self.profile_url(user_id)?;
        let user_id = validate_user_id(user_id)?;

        tracing::debug!(%url, "requesting buyer profile");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProfileError::NotFound(user_id.to_string()));
        }
        if !status.is_success() {
            return Err(ProfileError::Status(status));
        }

        let body = response.bytes().await?;
        let record: ProfileRecord = serde_json::from_slice(&body)?;

        tracing::debug!(
            user_id,
            tickets = record.tickets.len(),
            "profile data received"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ProfileClient {
        ProfileClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_profile_url() {
        let url = client("http://localhost:8000").profile_url("42").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/buyer_profile/42");
    }

    #[test]
    fn test_profile_url_keeps_prefix_and_trailing_slash() {
        let url = client("https://example.com/tickets/")
            .profile_url("42")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/tickets/api/buyer_profile/42"
        );
    }

    #[test]
    fn test_profile_url_encodes_identifier() {
        let url = client("http://localhost:8000")
            .profile_url("a b/c")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/buyer_profile/a%20b%2Fc"
        );
    }

    #[test]
    fn test_profile_url_rejects_blank_identifier() {
        let err = client("http://localhost:8000").profile_url(" ").unwrap_err();
        assert!(matches!(err, ProfileError::InvalidUserId(_)));
    }

    #[test]
    fn test_new_rejects_non_base_url() {
        assert!(ProfileClient::new("mailto:x@example.com", Duration::from_secs(1)).is_err());
        assert!(ProfileClient::new("localhost", Duration::from_secs(1)).is_err());
    }
}
