//! WebSocket upgrade and per-connection handler. Each connection owns its own timer and
//! generator; both are dropped when the handler returns.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::session::Session;
use crate::state::AppState;

use std::sync::atomic::Ordering;

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

// Decrements the client count on every exit path.
struct ClientGuard(AppState);

impl ClientGuard {
    fn new(state: AppState) -> Self {
        let n = state.client_count.fetch_add(1, Ordering::Relaxed) + 1;
        info!(clients = n, "client connected");
        Self(state)
    }
}

impl Drop for ClientGuard {
    fn drop(&mut self) {
        let n = self.0.client_count.fetch_sub(1, Ordering::Relaxed) - 1;
        info!(clients = n, "client disconnected");
    }
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    let _guard = ClientGuard::new(state.clone());
    let mut session = Session::new(&state);
    let mut shutdown = state.shutdown.clone();
    let mut shutdown_gone = false;

    // First tick fires one period after connect.
    let mut ticker = interval_at(Instant::now() + state.tick, state.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let events = match session.tick().await {
                    Ok(ev) => ev,
                    Err(e) => {
                        warn!("tick failed: {e}");
                        continue;
                    }
                };
                for ev in &events {
                    let text = match serde_json::to_string(ev) {
                        Ok(t) => t,
                        Err(e) => {
                            warn!(event = ev.name(), "encode failed: {e}");
                            continue;
                        }
                    };
                    if socket.send(Message::Text(text)).await.is_err() {
                        debug!("send failed, dropping session");
                        return;
                    }
                }
            }
            msg = socket.recv() => match msg {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                // No application messages flow client -> server.
                Some(Ok(_)) => {}
            },
            res = shutdown.changed(), if !shutdown_gone => match res {
                Ok(()) if *shutdown.borrow() => {
                    let _ = socket.send(Message::Close(None)).await;
                    break;
                }
                Ok(()) => {}
                Err(_) => shutdown_gone = true,
            },
        }
    }
}
