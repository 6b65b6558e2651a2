//! HTTP surface: `/ws` upgrade behind a CORS policy for the browser dashboard origin.

use std::future::Future;

use axum::{
    http::{header::HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::config::{ALLOWED_HEADER, ALLOWED_ORIGIN};
use crate::state::AppState;
use crate::ws::ws_handler;

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(HeaderValue::from_static(ALLOWED_ORIGIN))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([HeaderName::from_static(ALLOWED_HEADER)])
        .allow_credentials(true)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .layer(cors_layer())
        .with_state(state)
}

/// Serve until `shutdown` resolves. Open sessions watch `AppState::shutdown` and close
/// themselves; flip that signal before or together with this future.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
