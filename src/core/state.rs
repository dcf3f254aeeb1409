// Application state (AppState)

use crate::api::client::UsersClient;
use crate::core::config::Config;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Shared application state
///
/// Read-only after startup; each request clones what it needs.
#[derive(Clone)]
pub struct AppState {
    /// Loader for the users page
    pub users_client: UsersClient,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let users_client = UsersClient::new(config.upstream.users_endpoint.clone())
            .context("Failed to create users client")?;

        Ok(Self {
            users_client,
            config: Arc::new(config),
        })
    }
}
