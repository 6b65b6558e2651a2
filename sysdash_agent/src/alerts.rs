//! Static alert thresholds and the per-sample breach check.

use crate::types::{AlertEvent, Metric, MetricsSample};

/// Ceiling per metric. Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertThresholds {
    pub cpu: f64,
    pub memory: f64,
    pub api_latency: f64,
    pub disk_usage: f64,
    pub network_usage: f64,
    pub temperature: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            cpu: 80.0,
            memory: 80.0,
            api_latency: 500.0,
            disk_usage: 90.0,
            network_usage: 80.0,
            temperature: 75.0,
        }
    }
}

impl AlertThresholds {
    pub fn ceiling(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Cpu => self.cpu,
            Metric::Memory => self.memory,
            Metric::ApiLatency => self.api_latency,
            Metric::DiskUsage => self.disk_usage,
            Metric::NetworkUsage => self.network_usage,
            Metric::Temperature => self.temperature,
        }
    }

    /// One alert for every field strictly above its ceiling, in `Metric::ALL` order.
    pub fn evaluate(&self, sample: &MetricsSample) -> Vec<AlertEvent> {
        Metric::ALL
            .iter()
            .filter_map(|&m| {
                let value = sample.value(m);
                (value > self.ceiling(m)).then_some(AlertEvent { kind: m, value })
            })
            .collect()
    }
}
