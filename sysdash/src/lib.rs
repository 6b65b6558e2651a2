//! sysdash: terminal dashboard for the sysdash agent's metrics stream.

pub mod app;
pub mod dashboard;
pub mod history;
pub mod types;
pub mod ui;
pub mod ws;
