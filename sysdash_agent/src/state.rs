//! Shared agent state: sysinfo handle for memory, thresholds, log sink, shutdown signal.

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Duration;

use sysinfo::{MemoryRefreshKind, RefreshKind, System};
use tokio::sync::{watch, Mutex};

use crate::alerts::AlertThresholds;
use crate::config::AgentConfig;
use crate::logfile::LogSink;

pub type SharedSystem = Arc<Mutex<System>>;

#[derive(Clone)]
pub struct AppState {
    // Persistent sysinfo handle (memory only)
    pub sys: SharedSystem,

    // Read-only for the life of the process
    pub thresholds: Arc<AlertThresholds>,
    pub log: Arc<dyn LogSink>,
    pub tick: Duration,

    // Diagnostics only; sessions never read each other's state
    pub client_count: Arc<AtomicUsize>,

    // Flips to true when the server is shutting down
    pub shutdown: watch::Receiver<bool>,
}

impl AppState {
    pub fn new(cfg: &AgentConfig, log: Arc<dyn LogSink>, shutdown: watch::Receiver<bool>) -> Self {
        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::everything()),
        );
        Self {
            sys: Arc::new(Mutex::new(sys)),
            thresholds: Arc::new(AlertThresholds::default()),
            log,
            tick: cfg.tick,
            client_count: Arc::new(AtomicUsize::new(0)),
            shutdown,
        }
    }
}
