use crate::view::page::render_error_page;
use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

pub async fn fallback_handler(uri: Uri) -> Response {
    debug!(path = %uri.path(), "No route matched");

    (
        StatusCode::NOT_FOUND,
        Html(render_error_page(
            "404 Not Found",
            "Page not found. The users list is at /users.",
        )),
    )
        .into_response()
}
