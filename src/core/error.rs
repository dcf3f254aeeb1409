// Centralized error handling for the users page

use crate::view::page::render_error_page;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Message carried by every non-success upstream response
pub const FETCH_USERS_FAILED: &str = "Failed to fetch users";

/// Errors that can occur while loading the users list
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{message} (status {status})")]
    Http { status: u16, message: &'static str },

    #[error("Failed to reach users endpoint: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Failed to parse users response: {0}")]
    Parse(#[source] serde_json::Error),
}

impl LoadError {
    pub fn http(status: u16) -> Self {
        LoadError::Http {
            status,
            message: FETCH_USERS_FAILED,
        }
    }

    /// Upstream status code, if the upstream answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::Http { status, .. } => Some(*status),
            LoadError::Network(_) | LoadError::Parse(_) => None,
        }
    }
}

/// Error boundary: a failed load replaces the page with an error page
impl IntoResponse for LoadError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            LoadError::Http { status, message } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message.to_string(),
            ),
            LoadError::Network(_) | LoadError::Parse(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let title = match &self {
            LoadError::Http { .. } => match status.canonical_reason() {
                Some(reason) => format!("{} {}", status.as_u16(), reason),
                None => status.as_u16().to_string(),
            },
            LoadError::Network(_) | LoadError::Parse(_) => {
                "Unexpected Application Error".to_string()
            }
        };

        (status, Html(render_error_page(&title, &detail))).into_response()
    }
}
