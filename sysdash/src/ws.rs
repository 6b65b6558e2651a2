//! Minimal WebSocket client helpers: connect to the agent and forward pushed events.

use futures_util::{Stream, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc::UnboundedSender;
use tokio_tungstenite::{
    connect_async, tungstenite, tungstenite::Message, MaybeTlsStream, WebSocketStream,
};

use crate::types::ServerEvent;

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

// Connect to the agent and return the WS stream
pub async fn connect(url: &str) -> Result<WsStream, Box<dyn std::error::Error>> {
    let (ws, _) = connect_async(url).await?;
    Ok(ws)
}

pub fn decode_event(text: &str) -> Option<ServerEvent> {
    serde_json::from_str(text).ok()
}

/// Pump decoded events into `tx` until the socket ends or the receiver goes away.
/// Frames that are not valid events are skipped.
pub async fn forward_events<S>(mut stream: S, tx: UnboundedSender<ServerEvent>)
where
    S: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
{
    while let Some(Ok(msg)) = stream.next().await {
        match msg {
            Message::Text(text) => {
                if let Some(ev) = decode_event(&text) {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }
}
