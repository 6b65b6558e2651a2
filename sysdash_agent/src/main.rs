//! sysdash_agent: pushes synthetic metrics, log lines and alerts to each WebSocket client.

use std::net::SocketAddr;
use std::sync::Arc;

use sysdash_agent::config::{AgentConfig, USAGE};
use sysdash_agent::logfile::FileLog;
use sysdash_agent::server::serve;
use sysdash_agent::state::AppState;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Some(cfg) = AgentConfig::from_args_and_env(std::env::args()) else {
        eprintln!("{USAGE}");
        return Ok(());
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let log = Arc::new(FileLog::new(cfg.log_path.clone()));
    let state = AppState::new(&cfg, log, shutdown_rx);

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "Server running on port {} (log file: {}, tick: {:?})",
        listener.local_addr()?.port(),
        cfg.log_path.display(),
        cfg.tick
    );

    serve(listener, state, async move {
        let _ = tokio::signal::ctrl_c().await;
        info!("shutting down");
        let _ = shutdown_tx.send(true);
    })
    .await?;
    Ok(())
}
