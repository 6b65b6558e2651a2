//! Types that mirror the agent's JSON schema.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
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

    /// Key with the first letter uppercased: `apiLatency` -> `ApiLatency`.
    pub fn label(self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(c) => c.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSample {
    pub cpu: f64,
    pub memory: f64,
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

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct AlertEvent {
    #[serde(rename = "type")]
    pub kind: Metric,
    pub value: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum ServerEvent {
    Metrics(MetricsSample),
    Log(String),
    Alert(AlertEvent),
}
