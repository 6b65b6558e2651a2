//! sysdash agent: per-connection synthetic metrics, append-only log, threshold alerts.

pub mod alerts;
pub mod config;
pub mod error;
pub mod logfile;
pub mod metrics;
pub mod server;
pub mod session;
pub mod state;
pub mod types;
pub mod ws;
