// Stub upstream users service for tests

use axum::{http::StatusCode, routing::get, Router};
use tokio::net::TcpListener;

/// Serve `body` with `status` on `GET /users` from an ephemeral local port.
/// Returns the full users endpoint URL.
pub async fn spawn_upstream(status: u16, body: &'static str) -> String {
    let status = StatusCode::from_u16(status).unwrap();
    let app = Router::new().route(
        "/users",
        get(move || async move {
            (status, [("content-type", "application/json")], body)
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/users", addr)
}

/// A users endpoint URL nothing is listening on
pub async fn unreachable_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}/users", addr)
}
