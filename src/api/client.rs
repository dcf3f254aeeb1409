use crate::core::error::LoadError;
use crate::models::user::User;
use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Loader for the users page
///
/// Makes exactly one `GET` per call against the configured endpoint, with no
/// query, headers or body. Nothing is cached between calls.
#[derive(Clone)]
pub struct UsersClient {
    client: reqwest::Client,
    endpoint: String,
}

impl UsersClient {
    pub fn new(endpoint: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the users list
    ///
    /// Non-success statuses become [`LoadError::Http`] with that status; the
    /// body of such a response is never parsed.
    pub async fn load_users(&self) -> Result<Vec<User>, LoadError> {
        debug!(endpoint = %self.endpoint, "Fetching users");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "Users endpoint unreachable");
                LoadError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "Users endpoint returned error status"
            );
            return Err(LoadError::http(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(LoadError::Network)?;

        let users: Vec<User> = serde_json::from_slice(&bytes).map_err(|e| {
            warn!(endpoint = %self.endpoint, error = %e, "Invalid users payload");
            LoadError::Parse(e)
        })?;

        debug!(users = users.len(), "Users loaded");

        Ok(users)
    }
}
