//! Data types sent to the client over WebSocket.
//! Keep this module minimal and stable; it defines the wire format.

use serde::Serialize;

/// Names of the six generated metrics, in alert evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Cpu,
    Memory,
    ApiLatency,
    DiskUsage,
    NetworkUsage,
    Temperature,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Cpu,
        Metric::Memory,
        Metric::ApiLatency,
        Metric::DiskUsage,
        Metric::NetworkUsage,
        Metric::Temperature,
    ];

    /// Wire name, e.g. `apiLatency`.
    pub fn key(self) -> &'static str {
        match self {
            Metric::Cpu => "cpu",
            Metric::Memory => "memory",
            Metric::ApiLatency => "apiLatency",
            Metric::DiskUsage => "diskUsage",
            Metric::NetworkUsage => "networkUsage",
            Metric::Temperature => "temperature",
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSample {
    pub cpu: f64,
    pub memory: f64,
    // milliseconds, 0..1000
    pub api_latency: f64,
    pub disk_usage: f64,
    pub network_usage: f64,
    pub temperature: f64,
}

impl MetricsSample {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Cpu => self.cpu,
            Metric::Memory => self.memory,
            Metric::ApiLatency => self.api_latency,
            Metric::DiskUsage => self.disk_usage,
            Metric::NetworkUsage => self.network_usage,
            Metric::Temperature => self.temperature,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct AlertEvent {
    #[serde(rename = "type")]
    pub kind: Metric,
    pub value: f64,
}

/// One text frame on the socket: `{"event": "...", "data": ...}`.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ServerEvent {
    Metrics(MetricsSample),
    Log(String),
    Alert(AlertEvent),
}

impl ServerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::Metrics(_) => "metrics",
            ServerEvent::Log(_) => "log",
            ServerEvent::Alert(_) => "alert",
        }
    }
}
