use crate::core::state::AppState;
use crate::view::users::render_users_page;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tracing::error;

/// Users page
///
/// GET /users
///
/// Loads the list before rendering. A failed load renders the error page
/// instead of the list.
pub async fn users_page_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.users_client.load_users().await {
        Ok(users) => (StatusCode::OK, Html(render_users_page(&users))).into_response(),
        Err(e) => {
            error!(
                endpoint = %state.users_client.endpoint(),
                status = ?e.status(),
                error = %e,
                "Failed to load users page"
            );
            e.into_response()
        }
    }
}
