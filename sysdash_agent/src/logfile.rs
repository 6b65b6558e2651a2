//! Append-only metrics log: one line per generated sample.

use std::path::{Path, PathBuf};

use time::macros::format_description;
use time::OffsetDateTime;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::error;

use crate::error::AgentError;
use crate::types::MetricsSample;

/// Where formatted log entries go. Appends are fire-and-forget.
pub trait LogSink: Send + Sync {
    fn append(&self, entry: &str);
}

/// `<ISO-8601 UTC> - Metrics: <json>\n`, millisecond precision.
pub fn format_log_entry(at: OffsetDateTime, sample: &MetricsSample) -> Result<String, AgentError> {
    let fmt = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    let ts = at.to_offset(time::UtcOffset::UTC).format(fmt)?;
    let json = serde_json::to_string(sample)?;
    Ok(format!("{ts} - Metrics: {json}\n"))
}

pub async fn append_line(path: &Path, entry: &str) -> std::io::Result<()> {
    let mut f = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    f.write_all(entry.as_bytes()).await?;
    f.flush().await
}

/// File-backed sink shared by every connection.
#[derive(Debug, Clone)]
pub struct FileLog {
    path: PathBuf,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileLog {
    fn append(&self, entry: &str) {
        let path = self.path.clone();
        let entry = entry.to_owned();
        tokio::spawn(async move {
            if let Err(e) = append_line(&path, &entry).await {
                error!(path = %path.display(), "error writing to log file: {e}");
            }
        });
    }
}
